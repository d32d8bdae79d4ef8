//! HTTP response building module
//!
//! Builders for the responses this server emits, decoupled from handler
//! logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 text response with the exact byte sequence of `content`
pub fn build_text_response(content: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", content.len())
        .body(Full::new(Bytes::from_static(content.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 404 Not Found response. Unmatched paths get no custom body.
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_response_sets_headers() {
        let resp = build_text_response("Hello World\n");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain; charset=utf-8");
        assert_eq!(resp.headers()["Content-Length"], "12");
    }

    #[test]
    fn not_found_is_bare() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert!(resp.headers().get("Content-Type").is_none());
    }
}
