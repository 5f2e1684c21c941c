//! Post queries.
//!
//! Every call opens its own client, runs exactly one statement, closes the
//! client and only then validates the rows.

use super::client::{Client, Statement};
use crate::errors::AppError;
use crate::models::{Post, RawRow};

const SELECT_ALL_POSTS: &str = "SELECT id, title, description FROM posts ORDER BY id";

const SELECT_POSTS_BY_TITLE: &str =
    "SELECT id, title, description FROM posts WHERE title LIKE ? ORDER BY id";

const SELECT_POST_BY_ID: &str = "SELECT id, title, description FROM posts WHERE id = ?";

/// Read-only access to the posts table.
#[derive(Debug, Clone)]
pub struct PostStore {
    db_url: String,
}

impl PostStore {
    pub fn new(db_url: impl Into<String>) -> Self {
        Self {
            db_url: db_url.into(),
        }
    }

    /// Run one statement on a fresh client.
    ///
    /// The client is closed whether or not the statement succeeded.
    async fn run(&self, statement: Statement) -> Result<Vec<RawRow>, AppError> {
        let mut client = Client::connect(&self.db_url).await?;
        let result = client.execute(&statement).await;
        client.close().await;
        result
    }

    /// List every post.
    pub async fn get_all_posts(&self) -> Result<Vec<Post>, AppError> {
        tracing::debug!(db_url = %self.db_url, "Fetching all posts");

        let rows = self.run(Statement::new(SELECT_ALL_POSTS)).await?;
        Post::parse_all(&rows)
    }

    /// List posts whose title contains `criteria`.
    pub async fn get_filtered_posts(&self, criteria: &str) -> Result<Vec<Post>, AppError> {
        tracing::debug!(criteria, "Fetching filtered posts");

        let statement = Statement::new(SELECT_POSTS_BY_TITLE).bind(format!("%{}%", criteria));
        let rows = self.run(statement).await?;
        Post::parse_all(&rows)
    }

    /// Get a single post, `None` when no row has this id.
    pub async fn get_post(&self, id: i64) -> Result<Option<Post>, AppError> {
        tracing::debug!(id, "Fetching post");

        let rows = self.run(Statement::new(SELECT_POST_BY_ID).bind(id)).await?;
        match rows.first() {
            Some(row) => Post::parse(row).map(Some),
            None => Ok(None),
        }
    }
}
