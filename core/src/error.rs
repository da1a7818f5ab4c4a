//! Error types for the posts API client.
//!
//! # Design
//! The demo API gives callers exactly two meaningful outcomes: a decoded
//! payload or a failure. Failures keep the raw status code and body for
//! debugging but are not classified beyond what the HTTP layer and the JSON
//! codec natively produce.

use std::fmt;

/// Errors returned by `PostsClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
