//! Error type for the async session layer.

use posts_core::ApiError;
use thiserror::Error;

/// Errors returned by `Session` operations.
///
/// `Cancelled` is how a superseded call reports itself: the session only
/// keeps one request in flight, and starting a new one cancels the previous.
/// Callers treat a cancelled outcome as a no-op rather than a failure.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("superseded by a newer request")]
    Cancelled,
}
