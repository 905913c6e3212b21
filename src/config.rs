// src/config.rs
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

use log::{info, LevelFilter};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid value for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    pub workers: usize,
    pub log_level: LevelFilter,
    /// Lifetime of a login session in seconds.
    pub session_ttl_secs: i64,
    /// Existing account promoted to admin at startup.
    pub admin_email: Option<String>,
}

impl AppConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let session_days: i64 = try_load(&lookup, "AUTOSALON_SESSION_DAYS", "7")?;
        if session_days <= 0 {
            return Err(ConfigError {
                key: "AUTOSALON_SESSION_DAYS",
                reason: "must be positive".into(),
            });
        }

        Ok(Self {
            addr: try_load(&lookup, "AUTOSALON_ADDR", "127.0.0.1:3000")?,
            db_path: try_load(&lookup, "AUTOSALON_DB", "autosalon.sqlite3")?,
            schema_path: try_load(&lookup, "AUTOSALON_SCHEMA", "sql/schema.sql")?,
            workers: try_load(&lookup, "AUTOSALON_WORKERS", "8")?,
            log_level: try_load(&lookup, "AUTOSALON_LOG", "info")?,
            session_ttl_secs: session_days * 24 * 60 * 60,
            admin_email: lookup("AUTOSALON_ADMIN_EMAIL")
                .map(|e| e.trim().to_lowercase())
                .filter(|e| !e.is_empty()),
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim().parse().map_err(|e: T::Err| ConfigError {
        key,
        reason: e.to_string(),
    })
}
