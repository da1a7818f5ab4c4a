//! Synchronous API client core for the demo posts service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `PostsClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Write operations are described by `HttpCall<B>`, pairing the HTTP
//!   method with the payload it carries.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::PostsClient;
pub use error::ApiError;
pub use http::{HttpCall, HttpMethod, HttpRequest, HttpResponse};
pub use types::{NewPost, Post};
