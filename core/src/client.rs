//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`. The
//! caller executes the actual HTTP round-trip, keeping the core deterministic
//! and free of I/O dependencies.
//!
//! Write operations route through `HttpCall<&NewPost>` so the method/payload
//! pairing is fixed by the type; GET and DELETE carry no body and are built
//! directly.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpCall, HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewPost, Post};

/// Synchronous, stateless client for the demo posts API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/posts", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_posts_by_user(&self, user_id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/posts?userId={user_id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_post(&self, input: &NewPost) -> Result<HttpRequest, ApiError> {
        self.build_call("/posts", HttpCall::Post(input))
    }

    pub fn build_replace_post(&self, id: i64, input: &NewPost) -> Result<HttpRequest, ApiError> {
        self.build_call(&format!("/posts/{id}"), HttpCall::Put(input))
    }

    pub fn build_patch_post(&self, id: i64, input: &NewPost) -> Result<HttpRequest, ApiError> {
        self.build_call(&format!("/posts/{id}"), HttpCall::Patch(input))
    }

    pub fn build_delete_post(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/posts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Lower an `HttpCall` description into a plain `HttpRequest`.
    fn build_call<B: Serialize>(
        &self,
        path: &str,
        call: HttpCall<&B>,
    ) -> Result<HttpRequest, ApiError> {
        let body = call
            .body()
            .map(|payload| serde_json::to_string(payload))
            .transpose()
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        let headers = if body.is_some() {
            vec![("content-type".to_string(), "application/json".to_string())]
        } else {
            Vec::new()
        };
        Ok(HttpRequest {
            method: call.method(),
            url: format!("{}{path}", self.base_url),
            headers,
            body,
        })
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_posts_by_user(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        self.parse_list_posts(response)
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        parse_written_post(response)
    }

    pub fn parse_replace_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        parse_written_post(response)
    }

    pub fn parse_patch_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        parse_written_post(response)
    }

    /// Any 2xx counts as a successful delete; the body is ignored and the
    /// fixed receipt is returned instead.
    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_success(&response)?;
        Ok(Post::deletion_receipt())
    }
}

/// Decode the echoed write payload and convert it to the read shape.
fn parse_written_post(response: HttpResponse) -> Result<Post, ApiError> {
    check_success(&response)?;
    let echoed: NewPost = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Deserialization(e.to_string()))?;
    Ok(echoed.into_post())
}

/// Any 2xx status is a success; everything else is an `ApiError::Http`.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
