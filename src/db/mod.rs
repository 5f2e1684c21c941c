//! Database module for the posts table.
//!
//! The store is external; this service only reads from it. There is no pool:
//! each call connects, runs one statement and disconnects.

mod client;
mod store;

pub use client::*;
pub use store::*;

use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use crate::errors::AppError;

/// Create the posts table if it does not exist yet.
///
/// Creates the database file (and its parent directory) when missing.
pub async fn init_schema(db_url: &str) -> Result<(), AppError> {
    if db_url.trim().is_empty() {
        return Err(AppError::Database(
            "No database endpoint configured (DB_URL)".to_string(),
        ));
    }

    let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);

    // Ensure the parent directory exists
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.ok();
        }
    }

    let mut client = Client::connect_with(options).await?;
    let result = client
        .execute(&Statement::new(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL
            )
            "#,
        ))
        .await;
    client.close().await;
    result?;

    tracing::info!("Posts schema ready");
    Ok(())
}
