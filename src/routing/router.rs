//! Route table module
//!
//! An ordered table of exact-path bindings, populated once at construction
//! and read on every request. Matching ignores method, headers, and body;
//! unmatched paths get the stock 404 response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response, Version};

use crate::http;

/// Borrowed view of an inbound request, handed to route handlers.
///
/// Handlers never see the request body; the underlying stream stays owned
/// by the connection layer for the duration of the handler call.
pub struct RequestContext<'a> {
    pub method: &'a Method,
    pub path: &'a str,
    pub version: Version,
}

/// A route handler: takes the request view, returns the full response
pub type HandlerFn = fn(&RequestContext<'_>) -> Response<Full<Bytes>>;

/// One path-to-handler binding
struct Route {
    path: String,
    handler: HandlerFn,
}

/// Ordered route table with exact-path matching
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a handler for an exact path.
    ///
    /// Registration order decides which binding wins if a path is
    /// registered twice.
    pub fn route(&mut self, path: &str, handler: HandlerFn) {
        self.routes.push(Route {
            path: path.to_string(),
            handler,
        });
    }

    /// Select and invoke the handler for the request path
    pub fn dispatch(&self, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
        match self.routes.iter().find(|route| route.path == ctx.path) {
            Some(route) => (route.handler)(ctx),
            None => http::build_404_response(),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
