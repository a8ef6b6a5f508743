use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// Runtime settings, read from the environment with a `.env` fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store_timeout: Duration,
    pub reserve_retry_attempts: u32,
    pub membership_sync_interval: Duration,
    pub membership_sync_batch_size: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            store_timeout: Duration::from_millis(parse_or(&lookup, "STORE_TIMEOUT_MS", 2000)?),
            reserve_retry_attempts: parse_or(&lookup, "RESERVE_RETRY_ATTEMPTS", 2)?,
            membership_sync_interval: Duration::from_millis(parse_or(
                &lookup,
                "MEMBERSHIP_SYNC_INTERVAL_MS",
                250,
            )?),
            membership_sync_batch_size: parse_or(&lookup, "MEMBERSHIP_SYNC_BATCH_SIZE", 100)?,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("HOST/PORT do not form a socket address: {}:{}", self.host, self.port))
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a valid number, got {raw:?}")),
        None => Ok(default),
    }
}
