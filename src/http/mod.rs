//! HTTP protocol layer module
//!
//! Response construction shared by the router and handlers.

pub mod response;

pub use response::{build_404_response, build_text_response};
