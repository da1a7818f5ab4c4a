//! Async executor for requests built by `posts_core`.
//!
//! # Design
//! `Session` owns the I/O half of the split: it executes `HttpRequest`
//! values over reqwest and feeds the `HttpResponse` back into the core's
//! `parse_*` methods. It keeps at most one request in flight. Starting a new
//! call cancels the previous one (last-call-wins), and the superseded call
//! resolves to `SessionError::Cancelled` so its result can never overwrite
//! state produced by a newer call.

use std::sync::{Mutex, PoisonError};

use posts_core::{HttpMethod, HttpRequest, HttpResponse, NewPost, Post, PostsClient};
use tokio_util::sync::CancellationToken;

use crate::error::SessionError;

/// Async client for the demo posts API with single-flight semantics.
pub struct Session {
    core: PostsClient,
    http: reqwest::Client,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl Session {
    pub fn new(base_url: &str) -> Self {
        Self {
            core: PostsClient::new(base_url),
            http: reqwest::Client::new(),
            in_flight: Mutex::new(None),
        }
    }

    /// `GET /posts`
    pub async fn list_posts(&self) -> Result<Vec<Post>, SessionError> {
        let request = self.core.build_list_posts();
        let response = self.dispatch(request).await?;
        Ok(self.core.parse_list_posts(response)?)
    }

    /// `GET /posts?userId={user_id}`
    pub async fn posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, SessionError> {
        let request = self.core.build_posts_by_user(user_id);
        let response = self.dispatch(request).await?;
        Ok(self.core.parse_posts_by_user(response)?)
    }

    /// `POST /posts`
    pub async fn create_post(&self, input: &NewPost) -> Result<Post, SessionError> {
        let request = self.core.build_create_post(input)?;
        let response = self.dispatch(request).await?;
        Ok(self.core.parse_create_post(response)?)
    }

    /// `PUT /posts/{id}`
    pub async fn replace_post(&self, id: i64, input: &NewPost) -> Result<Post, SessionError> {
        let request = self.core.build_replace_post(id, input)?;
        let response = self.dispatch(request).await?;
        Ok(self.core.parse_replace_post(response)?)
    }

    /// `PATCH /posts/{id}`
    pub async fn patch_post(&self, id: i64, input: &NewPost) -> Result<Post, SessionError> {
        let request = self.core.build_patch_post(id, input)?;
        let response = self.dispatch(request).await?;
        Ok(self.core.parse_patch_post(response)?)
    }

    /// `DELETE /posts/{id}` — resolves to the fixed deletion receipt.
    pub async fn delete_post(&self, id: i64) -> Result<Post, SessionError> {
        let request = self.core.build_delete_post(id);
        let response = self.dispatch(request).await?;
        Ok(self.core.parse_delete_post(response)?)
    }

    /// Swap a fresh token into the in-flight slot, cancelling the previous
    /// request if one is still outstanding.
    fn begin(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut slot = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    /// Execute a request, racing it against cancellation by a newer call.
    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, SessionError> {
        let token = self.begin();
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            "dispatching request"
        );
        // Biased so cancellation wins when both outcomes are ready at the
        // same poll: a superseded call must never surface a value, even if
        // its response has already arrived.
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(SessionError::Cancelled),
            result = self.execute(request) => Ok(result?),
        }
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, reqwest::Error> {
        let mut builder = self.http.request(wire_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn wire_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}
