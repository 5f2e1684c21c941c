//! Configuration module for the posts backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backing store endpoint, e.g. `sqlite:./data/posts.sqlite`.
    /// Empty when unset; that fails at connect time, not here.
    pub db_url: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Create the posts table at start-up
    pub init_schema: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let db_url = env::var("DB_URL").unwrap_or_default();

        let bind_addr = env::var("POSTS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()?;

        let log_level = env::var("POSTS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let init_schema = env::var("POSTS_INIT_SCHEMA")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            db_url,
            bind_addr,
            log_level,
            init_schema,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const VARS: [&str; 4] = ["DB_URL", "POSTS_BIND_ADDR", "POSTS_LOG_LEVEL", "POSTS_INIT_SCHEMA"];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_url, "");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.log_level, "info");
        assert!(!config.init_schema);
    }

    #[test]
    fn test_config_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("DB_URL", "sqlite::memory:");
        env::set_var("POSTS_BIND_ADDR", "0.0.0.0:8081");
        env::set_var("POSTS_INIT_SCHEMA", "TRUE");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.db_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.port(), 8081);
        assert!(config.init_schema);
    }

    #[test]
    fn test_invalid_bind_addr() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("POSTS_BIND_ADDR", "not-an-address");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }
}
