//! Post API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Post;
use crate::AppState;

/// Body message for a missing post.
pub const POST_NOT_FOUND: &str = "Post not found";

/// Query parameters for post listings.
#[derive(Debug, Default, Deserialize)]
pub struct PostsQuery {
    /// Title substring; when present only matching posts are returned.
    #[serde(default)]
    pub criteria: Option<String>,
}

/// Fetch all posts, or only those matching `criteria`.
pub(crate) async fn fetch_posts(state: &AppState, query: &PostsQuery) -> Result<Vec<Post>, AppError> {
    match query.criteria.as_deref() {
        Some(criteria) => state.store.get_filtered_posts(criteria).await,
        None => state.store.get_all_posts().await,
    }
}

/// GET /api/posts - List posts, optionally filtered by title.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PostsQuery>,
) -> Result<Json<Vec<Post>>, AppError> {
    let posts = fetch_posts(&state, &query).await?;
    Ok(Json(posts))
}

/// GET /api/posts/{id} - Get a single post.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, AppError> {
    match state.store.get_post(id).await? {
        Some(post) => Ok(Json(post)),
        None => {
            tracing::debug!(id, "Post not found");
            Err(AppError::NotFound(POST_NOT_FOUND.to_string()))
        }
    }
}
