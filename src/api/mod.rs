//! # API Layer
//!
//! Transport-facing types. No server is bundled; callers embed these
//! bodies in whatever transport they expose.

pub mod error_response;

pub use error_response::{BAD_REQUEST, ErrorDetails, ErrorResponse};
