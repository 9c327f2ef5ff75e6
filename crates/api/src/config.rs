use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use dreamjournal_interpreter::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use dreamjournal_interpreter::GeminiConfig;

/// Startup configuration errors. Any of these aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{0} must be set (environment or .env file)")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the Gemini API key has a default suitable for local use.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address, an IP literal (default: `127.0.0.1`).
    pub host: IpAddr,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Journal file location (default: `data/dreams.json`).
    pub data_file: PathBuf,
    /// HTTP request timeout in seconds for read-only pages (default: `60`).
    /// Must exceed `GEMINI_TIMEOUT_SECS`.
    pub request_timeout_secs: u64,
    /// Language model connection settings.
    pub gemini: GeminiConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                                     |
    /// |------------------------|---------------------------------------------|
    /// | `HOST`                 | `127.0.0.1`                                 |
    /// | `PORT`                 | `5000`                                      |
    /// | `DATA_FILE`            | `data/dreams.json`                          |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                                        |
    /// | `GEMINI_API_KEY`       | required                                    |
    /// | `GEMINI_MODEL`         | `gemini-1.5-flash`                          |
    /// | `GEMINI_BASE_URL`      | `https://generativelanguage.googleapis.com` |
    /// | `GEMINI_TIMEOUT_SECS`  | `30`                                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = var("GEMINI_API_KEY").ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let host = parse_or("HOST", var("HOST"), IpAddr::V4(Ipv4Addr::LOCALHOST))?;
        let port = parse_or("PORT", var("PORT"), 5000u16)?;
        let data_file = var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(dreamjournal_db::DEFAULT_DATA_FILE));
        let request_timeout_secs =
            parse_or("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS"), 60u64)?;

        let gemini = GeminiConfig {
            api_key,
            model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            base_url: var("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            timeout_secs: parse_or(
                "GEMINI_TIMEOUT_SECS",
                var("GEMINI_TIMEOUT_SECS"),
                DEFAULT_TIMEOUT_SECS,
            )?,
        };

        if gemini.timeout_secs >= request_timeout_secs {
            return Err(ConfigError::Invalid {
                name: "GEMINI_TIMEOUT_SECS",
                value: gemini.timeout_secs.to_string(),
                reason: format!(
                    "must be less than REQUEST_TIMEOUT_SECS ({request_timeout_secs})"
                ),
            });
        }

        Ok(Self {
            host,
            port,
            data_file,
            request_timeout_secs,
            gemini,
        })
    }
}

fn parse_or<T>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value: raw,
        }),
    }
}
