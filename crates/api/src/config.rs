//! Server configuration, read once at startup.

use std::time::Duration;

use crate::auth::jwt::JwtConfig;

/// Runtime settings for the HTTP server, sourced from the environment.
///
/// Every field falls back to a local-development default when its variable
/// is unset; malformed values abort startup rather than limping along with
/// a half-applied configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`PORT`, default `3000`).
    pub port: u16,
    /// Allowed CORS origins, from comma-separated `CORS_ORIGINS`
    /// (default `http://localhost:5173`, the storefront dev server).
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds (`REQUEST_TIMEOUT_SECS`, default 30).
    pub request_timeout_secs: u64,
    /// How long the post-shutdown cleanup waits for background tasks to
    /// drain (`SHUTDOWN_TIMEOUT_SECS`, default 30).
    pub shutdown_timeout_secs: u64,
    /// Seconds between WebSocket keepalive pings
    /// (`WS_HEARTBEAT_SECS`, default 30).
    pub ws_heartbeat_secs: u64,
    /// JWT signing secret and token lifetime.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs: env_secs("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: env_secs("SHUTDOWN_TIMEOUT_SECS", 30),
            ws_heartbeat_secs: env_secs("WS_HEARTBEAT_SECS", 30),
            jwt: JwtConfig::from_env(),
        }
    }

    /// Budget for draining background tasks after the listener stops.
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    /// Interval between WebSocket keepalive pings.
    pub fn ws_heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.ws_heartbeat_secs)
    }
}

/// Parse a duration-in-seconds variable, aborting on garbage values.
fn env_secs(var: &str, default: u64) -> u64 {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{var} must be a whole number of seconds")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping empty entries so a
/// trailing comma is harmless.
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
