//! DTOs for the demo posts API.
//!
//! # Design
//! `Post` is the read shape (`userId` is a number on the wire) and `NewPost`
//! is the write shape (`userId` is a string, the id is assigned server-side).
//! The demo API echoes write payloads back in the write shape, so
//! `NewPost::into_post` bridges the two for display.

use serde::{Deserialize, Serialize};

/// A single post returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Fixed record surfaced after a successful DELETE. The demo API returns
    /// an empty body on delete, so there is nothing real to decode.
    pub fn deletion_receipt() -> Self {
        Self {
            user_id: -1,
            id: -1,
            title: "DELETE".to_string(),
            body: "SUCCESS".to_string(),
        }
    }
}

/// Request payload for POST/PUT/PATCH. The server assigns (or confirms) the
/// id, which is why it is optional and skipped when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub body: String,
}

impl Default for NewPost {
    fn default() -> Self {
        Self {
            user_id: "1".to_string(),
            id: None,
            title: "Title".to_string(),
            body: "Body".to_string(),
        }
    }
}

impl NewPost {
    /// Default payload addressed at an existing post.
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Convert an echoed write payload into the read shape. Fields the
    /// server did not fill in collapse to `-1`.
    pub fn into_post(self) -> Post {
        Post {
            user_id: self.user_id.trim().parse().unwrap_or(-1),
            id: self.id.unwrap_or(-1),
            title: self.title,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_new_post_has_fixed_fields() {
        let input = NewPost::default();
        assert_eq!(input.user_id, "1");
        assert!(input.id.is_none());
        assert_eq!(input.title, "Title");
        assert_eq!(input.body, "Body");
    }

    #[test]
    fn with_id_round_trips_into_post() {
        let post = NewPost::with_id(1).into_post();
        assert_eq!(
            post,
            Post {
                user_id: 1,
                id: 1,
                title: "Title".to_string(),
                body: "Body".to_string(),
            }
        );
    }

    #[test]
    fn into_post_defaults_missing_id_to_minus_one() {
        let post = NewPost::default().into_post();
        assert_eq!(post.id, -1);
        assert_eq!(post.user_id, 1);
    }

    #[test]
    fn into_post_tolerates_non_numeric_user_id() {
        let input = NewPost {
            user_id: "nope".to_string(),
            ..NewPost::default()
        };
        assert_eq!(input.into_post().user_id, -1);
    }

    #[test]
    fn post_decodes_from_camel_case_json() {
        let post: Post =
            serde_json::from_str(r#"{"userId":1,"id":1,"title":"a","body":"b"}"#).unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "a");
        assert_eq!(post.body, "b");
    }

    #[test]
    fn new_post_serializes_user_id_as_string_and_skips_none_id() {
        let json = serde_json::to_value(NewPost::default()).unwrap();
        assert_eq!(json["userId"], "1");
        assert!(json.get("id").is_none());
        assert_eq!(json["title"], "Title");
        assert_eq!(json["body"], "Body");
    }

    #[test]
    fn deletion_receipt_is_fixed() {
        let receipt = Post::deletion_receipt();
        assert_eq!(receipt.user_id, -1);
        assert_eq!(receipt.id, -1);
        assert_eq!(receipt.title, "DELETE");
        assert_eq!(receipt.body, "SUCCESS");
    }
}
