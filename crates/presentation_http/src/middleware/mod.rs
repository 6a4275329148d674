//! HTTP middleware

mod security_headers;

pub use security_headers::{SecurityHeaders, SecurityHeadersLayer};
