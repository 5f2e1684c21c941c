//! Short-lived store client.
//!
//! One client owns exactly one connection. Rows come back untyped so that
//! validation stays independent of the client.

use std::str::FromStr;

use serde_json::{Number, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Column, Connection, Row, TypeInfo, ValueRef};

use crate::errors::AppError;
use crate::models::RawRow;

/// Positional statement argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Integer(i64),
    Text(String),
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Integer(value)
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

/// A fixed SQL statement with its positional arguments.
#[derive(Debug, Clone)]
pub struct Statement {
    pub sql: &'static str,
    pub args: Vec<Arg>,
}

impl Statement {
    pub fn new(sql: &'static str) -> Self {
        Self {
            sql,
            args: Vec::new(),
        }
    }

    pub fn bind(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// A single open connection to the backing store.
///
/// Dropping the client also releases the connection; [`Client::close`] does it
/// explicitly and waits for the shutdown.
pub struct Client {
    conn: SqliteConnection,
}

impl Client {
    /// Open a connection to `url`.
    pub async fn connect(url: &str) -> Result<Self, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::Database(
                "No database endpoint configured (DB_URL)".to_string(),
            ));
        }
        let options = SqliteConnectOptions::from_str(url)?;
        Self::connect_with(options).await
    }

    /// Open a connection with explicit options.
    pub async fn connect_with(options: SqliteConnectOptions) -> Result<Self, AppError> {
        let conn = SqliteConnection::connect_with(&options).await?;
        Ok(Self { conn })
    }

    /// Run one statement and return every resulting row.
    pub async fn execute(&mut self, statement: &Statement) -> Result<Vec<RawRow>, AppError> {
        let mut query = sqlx::query(statement.sql);
        for arg in &statement.args {
            query = match arg {
                Arg::Integer(value) => query.bind(*value),
                Arg::Text(value) => query.bind(value.clone()),
            };
        }

        let rows = query.fetch_all(&mut self.conn).await?;
        tracing::debug!(sql = statement.sql, rows = rows.len(), "Statement executed");

        rows.iter().map(raw_row).collect()
    }

    /// Close the connection.
    pub async fn close(self) {
        if let Err(e) = self.conn.close().await {
            tracing::warn!("Failed to close database connection: {}", e);
        }
    }
}

/// Convert a driver row into a column-name keyed JSON map.
fn raw_row(row: &SqliteRow) -> Result<RawRow, AppError> {
    let mut map = RawRow::new();

    for column in row.columns() {
        let index = column.ordinal();
        let raw = row.try_get_raw(index)?;

        let value = if raw.is_null() {
            Value::Null
        } else {
            let type_info = raw.type_info();
            match type_info.name() {
                "INTEGER" | "BOOLEAN" => Value::from(row.try_get::<i64, _>(index)?),
                "REAL" | "NUMERIC" => Number::from_f64(row.try_get::<f64, _>(index)?)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
                "BLOB" => Value::from(row.try_get::<Vec<u8>, _>(index)?),
                _ => Value::String(row.try_get::<String, _>(index)?),
            }
        };

        map.insert(column.name().to_string(), value);
    }

    Ok(map)
}
