//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test.
//!
//! `HttpCall` pairs a method with the payload it carries, so a builder cannot
//! attach a body to a GET or forget one on a POST. `method()` and `body()`
//! are the pure projections from that description down to wire-level data.

/// Wire-level HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// The method name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A request description: the method together with the payload it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpCall<B> {
    Get,
    Post(B),
    Put(B),
    Patch(B),
    Delete(B),
}

impl<B> HttpCall<B> {
    /// Wire-level method for this call.
    pub fn method(&self) -> HttpMethod {
        match self {
            HttpCall::Get => HttpMethod::Get,
            HttpCall::Post(_) => HttpMethod::Post,
            HttpCall::Put(_) => HttpMethod::Put,
            HttpCall::Patch(_) => HttpMethod::Patch,
            HttpCall::Delete(_) => HttpMethod::Delete,
        }
    }

    /// Payload carried by this call, if any.
    pub fn body(&self) -> Option<&B> {
        match self {
            HttpCall::Get => None,
            HttpCall::Post(body)
            | HttpCall::Put(body)
            | HttpCall::Patch(body)
            | HttpCall::Delete(body) => Some(body),
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `PostsClient::build_*` methods. The caller is responsible for
/// executing this request against the network and returning the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `PostsClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_match_the_wire() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn call_maps_to_wire_method() {
        assert_eq!(HttpCall::<&str>::Get.method(), HttpMethod::Get);
        assert_eq!(HttpCall::Post("x").method(), HttpMethod::Post);
        assert_eq!(HttpCall::Put("x").method(), HttpMethod::Put);
        assert_eq!(HttpCall::Patch("x").method(), HttpMethod::Patch);
        assert_eq!(HttpCall::Delete("x").method(), HttpMethod::Delete);
    }

    #[test]
    fn get_carries_no_body() {
        assert!(HttpCall::<&str>::Get.body().is_none());
    }

    #[test]
    fn write_calls_expose_their_body() {
        assert_eq!(HttpCall::Post("payload").body(), Some(&"payload"));
        assert_eq!(HttpCall::Delete("payload").body(), Some(&"payload"));
    }
}
