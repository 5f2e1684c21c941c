//! Post model and its validate-on-read parser.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// One untyped row as returned by the store client, keyed by column name.
pub type RawRow = serde_json::Map<String, Value>;

/// A published post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub description: String,
}

impl Post {
    /// Parse a raw row into a post.
    ///
    /// Every field must be present and correctly typed; columns the schema does
    /// not know about are ignored.
    pub fn parse(row: &RawRow) -> Result<Post, AppError> {
        let post = serde_json::from_value(Value::Object(row.clone()))?;
        Ok(post)
    }

    /// Parse every row, failing on the first one that does not validate.
    pub fn parse_all(rows: &[RawRow]) -> Result<Vec<Post>, AppError> {
        rows.iter().map(Post::parse).collect()
    }
}
