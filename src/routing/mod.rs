//! Routing module
//!
//! An explicit route table maps request paths to handlers. There is no
//! process-global router; `app_router` builds a fresh instance for each
//! listener, so a restarted listener gets its own identical table.

mod router;

pub use router::{HandlerFn, RequestContext, Router};

use crate::handler;

/// Build the route table: the two fixed bindings this server answers
pub fn app_router() -> Router {
    let mut router = Router::new();
    router.route("/", handler::get_root);
    router.route("/hello", handler::get_hello);
    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::{Method, Version};

    async fn dispatch_body(router: &Router, method: Method, path: &str) -> (u16, Vec<u8>) {
        let ctx = RequestContext {
            method: &method,
            path,
            version: Version::HTTP_11,
        };
        let resp = router.dispatch(&ctx);
        let status = resp.status().as_u16();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn root_serves_hello_world() {
        let router = app_router();
        let (status, body) = dispatch_body(&router, Method::GET, "/").await;
        assert_eq!(status, 200);
        assert_eq!(body, b"Hello World\n");
    }

    #[tokio::test]
    async fn hello_serves_endpoint_line() {
        let router = app_router();
        let (status, body) = dispatch_body(&router, Method::GET, "/hello").await;
        assert_eq!(status, 200);
        assert_eq!(body, b"Hello from /hello endpoint\n");
    }

    #[tokio::test]
    async fn post_hello_gets_same_response() {
        let router = app_router();
        let (status, body) = dispatch_body(&router, Method::POST, "/hello").await;
        assert_eq!(status, 200);
        assert_eq!(body, b"Hello from /hello endpoint\n");
    }

    #[tokio::test]
    async fn unknown_path_is_404_with_empty_body() {
        let router = app_router();
        let (status, body) = dispatch_body(&router, Method::GET, "/missing").await;
        assert_eq!(status, 404);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn fresh_instances_serve_identical_bindings() {
        // A restart rebuilds the table; both generations must answer alike
        for router in [app_router(), app_router()] {
            let (status, body) = dispatch_body(&router, Method::GET, "/").await;
            assert_eq!(status, 200);
            assert_eq!(body, b"Hello World\n");
        }
    }
}
