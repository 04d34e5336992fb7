use serde::Serialize;

/// Wire payload for `POST /posts`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostRequest {
    pub submolt: String,
    pub title: String,
    pub content: String,
}
