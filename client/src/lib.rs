//! Async HTTP client for the demo posts service.
//!
//! # Overview
//! Executes requests built by `posts_core` over reqwest and returns decoded
//! values. The session keeps at most one request in flight: each new call
//! cancels the previous one, and the superseded call resolves to
//! `SessionError::Cancelled` instead of a value.

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::Session;
