//! JSON API boundary.

mod http;

pub use http::{ApiErrorBody, PreviewRequest, PreviewServer, create_router};
