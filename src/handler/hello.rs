//! Endpoint handlers
//!
//! Two stateless handlers, each logging one fixed diagnostic line and
//! writing one fixed line of text. Method, headers, and body of the
//! request are ignored.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::http;
use crate::logger;
use crate::routing::RequestContext;

/// Exact response body for `/`
pub const ROOT_BODY: &str = "Hello World\n";

/// Exact response body for `/hello`
pub const HELLO_BODY: &str = "Hello from /hello endpoint\n";

/// Handler for the root path
pub fn get_root(_ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    logger::log_request_received("/");
    http::build_text_response(ROOT_BODY)
}

/// Handler for `/hello`
pub fn get_hello(_ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    logger::log_request_received("/hello");
    http::build_text_response(HELLO_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::Method;

    fn ctx_for<'a>(method: &'a Method, path: &'a str) -> RequestContext<'a> {
        RequestContext {
            method,
            path,
            version: hyper::Version::HTTP_11,
        }
    }

    #[tokio::test]
    async fn root_body_is_exact() {
        let method = Method::GET;
        let resp = get_root(&ctx_for(&method, "/"));
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain; charset=utf-8");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Hello World\n");
    }

    #[tokio::test]
    async fn hello_body_is_exact() {
        let method = Method::POST;
        let resp = get_hello(&ctx_for(&method, "/hello"));
        assert_eq!(resp.status(), 200);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Hello from /hello endpoint\n");
    }
}
