use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// A stored post, served in the read shape (`userId` is a number).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// Write payload for POST and PUT, echoed back verbatim with the id filled
/// in. `userId` arrives as a string, like the demo API it stands in for.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritePost {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub body: String,
}

/// Partial payload for PATCH; omitted fields remain unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchPost {
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    user_id: Option<i64>,
}

pub type Db = Arc<RwLock<BTreeMap<i64, Post>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(posts: Vec<Post>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        posts.into_iter().map(|post| (post.id, post)).collect(),
    ));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            put(replace_post).patch(patch_post).delete(delete_post),
        )
        .with_state(db)
}

/// Three fixture posts in the style of the demo API, spread over two users.
pub fn demo_posts() -> Vec<Post> {
    vec![
        Post {
            user_id: 1,
            id: 1,
            title: "sunt aut facere repellat".to_string(),
            body: "quia et suscipit recusandae".to_string(),
        },
        Post {
            user_id: 1,
            id: 2,
            title: "qui est esse".to_string(),
            body: "est rerum tempore vitae".to_string(),
        },
        Post {
            user_id: 2,
            id: 3,
            title: "ea molestias quasi".to_string(),
            body: "et iusto sed quo iure".to_string(),
        },
    ]
}

/// Serve the demo-seeded app on `listener`.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(demo_posts())).await
}

fn parse_user_id(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(-1)
}

async fn list_posts(State(db): State<Db>, Query(query): Query<ListQuery>) -> Json<Vec<Post>> {
    let posts = db.read().await;
    let posts = posts
        .values()
        .filter(|post| query.user_id.is_none_or(|user_id| post.user_id == user_id))
        .cloned()
        .collect();
    Json(posts)
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<WritePost>,
) -> (StatusCode, Json<WritePost>) {
    let mut posts = db.write().await;
    let id = posts.keys().next_back().copied().unwrap_or(0) + 1;
    posts.insert(
        id,
        Post {
            user_id: parse_user_id(&input.user_id),
            id,
            title: input.title.clone(),
            body: input.body.clone(),
        },
    );
    (
        StatusCode::CREATED,
        Json(WritePost {
            id: Some(id),
            ..input
        }),
    )
}

async fn replace_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<WritePost>,
) -> Result<Json<WritePost>, StatusCode> {
    let mut posts = db.write().await;
    if !posts.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    posts.insert(
        id,
        Post {
            user_id: parse_user_id(&input.user_id),
            id,
            title: input.title.clone(),
            body: input.body.clone(),
        },
    );
    Ok(Json(WritePost {
        id: Some(id),
        ..input
    }))
}

async fn patch_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<PatchPost>,
) -> Result<Json<WritePost>, StatusCode> {
    let mut posts = db.write().await;
    let post = posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(user_id) = input.user_id {
        post.user_id = parse_user_id(&user_id);
    }
    if let Some(title) = input.title {
        post.title = title;
    }
    if let Some(body) = input.body {
        post.body = body;
    }
    Ok(Json(WritePost {
        user_id: post.user_id.to_string(),
        id: Some(post.id),
        title: post.title.clone(),
        body: post.body.clone(),
    }))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut posts = db.write().await;
    posts
        .remove(&id)
        .map(|_| Json(serde_json::json!({})))
        .ok_or(StatusCode::NOT_FOUND)
}
