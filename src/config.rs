use std::{net::SocketAddr, time::Duration};

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub address: SocketAddr,
    pub max_connections: u32,
    /// Per-request deadline, also used as the pool acquire timeout.
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("PORT") {
            Some(port) => port.parse::<u16>().context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };
        let address = format!("{host}:{port}")
            .parse::<SocketAddr>()
            .with_context(|| format!("{host}:{port} is not a valid socket address"))?;
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(count) => count
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        Ok(Config {
            database_url,
            address,
            max_connections,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
