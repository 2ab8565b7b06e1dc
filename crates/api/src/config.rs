use std::net::IpAddr;
use std::num::ParseIntError;

use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (`CORS_ORIGINS=*`).
    Any,
    /// An explicit allow-list.
    List(Vec<HeaderValue>),
}

/// Errors raised while reading [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOST must be an IP address, got '{value}'")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("PORT must be a valid u16, got '{value}'")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid CORS origin '{origin}'")]
    InvalidCorsOrigin {
        origin: String,
        #[source]
        source: InvalidHeaderValue,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://podcasts.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default                |
    /// |----------------|------------------------|
    /// | `HOST`         | `0.0.0.0`              |
    /// | `PORT`         | `3000`                 |
    /// | `DATABASE_URL` | `sqlite://podcasts.db` |
    /// | `CORS_ORIGINS` | `*`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host_value = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let host = host_value
            .parse::<IpAddr>()
            .map_err(|source| ConfigError::InvalidHost {
                value: host_value.clone(),
                source,
            })?;

        let port_value = lookup("PORT").unwrap_or_else(|| "3000".into());
        let port = port_value
            .trim()
            .parse::<u16>()
            .map_err(|source| ConfigError::InvalidPort {
                value: port_value.clone(),
                source,
            })?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://podcasts.db".into());

        let cors_raw = lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into());
        let cors_origins = parse_cors_origins(&cors_raw)?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
        })
    }
}

/// `*` anywhere in the list allows every origin.
fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|source| ConfigError::InvalidCorsOrigin {
                origin: origin.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
