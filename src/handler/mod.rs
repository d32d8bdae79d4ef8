//! Request handler module
//!
//! The per-request service entry point and the two endpoint handlers.

mod hello;

pub use hello::{get_hello, get_root};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::Config;
use crate::logger;
use crate::routing::{RequestContext, Router};

/// Main entry point for HTTP request handling
///
/// Infallible: every request produces a response. The request body is
/// never read; handlers only see the borrowed [`RequestContext`].
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
    router: Arc<Router>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();

    if config.logging.access_log {
        logger::log_request(method, uri, req.version());
    }

    let ctx = RequestContext {
        method,
        path: uri.path(),
        version: req.version(),
    };

    Ok(router.dispatch(&ctx))
}
