//! Player configuration
//!
//! Read from the environment (a `.env` file is loaded first when present).
//! Every setting has a default so the client runs with no configuration.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::infrastructure::http::{DEFAULT_API_URL, DEFAULT_CLIENT_ID, DEFAULT_COGNITO_URL};

pub const ENV_COGNITO_URL: &str = "TTRPGZ_COGNITO_URL";
pub const ENV_CLIENT_ID: &str = "TTRPGZ_CLIENT_ID";
pub const ENV_API_URL: &str = "TTRPGZ_API_URL";
pub const ENV_STORAGE: &str = "TTRPGZ_STORAGE";
pub const ENV_STORAGE_PATH: &str = "TTRPGZ_STORAGE_PATH";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "TTRPGZ_HTTP_TIMEOUT_SECS";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {message}")]
    InvalidUrl { key: &'static str, message: String },

    #[error("{key} has an invalid value: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Where session tokens are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StorageScope {
    /// Persisted to a file; survives restarts
    #[default]
    Local,
    /// Kept in memory for the life of the process
    Session,
}

impl FromStr for StorageScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "session" => Ok(Self::Session),
            other => Err(format!("unknown storage scope: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub cognito_url: Url,
    pub client_id: String,
    pub api_url: Url,
    pub storage: StorageScope,
    pub storage_path: Option<PathBuf>,
    pub http_timeout: Duration,
}

impl PlayerConfig {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let cognito_url = parse_url(
            ENV_COGNITO_URL,
            get(ENV_COGNITO_URL).as_deref().unwrap_or(DEFAULT_COGNITO_URL),
        )?;
        let api_url = parse_url(
            ENV_API_URL,
            get(ENV_API_URL).as_deref().unwrap_or(DEFAULT_API_URL),
        )?;
        let client_id = get(ENV_CLIENT_ID).unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string());

        let storage = match get(ENV_STORAGE) {
            Some(value) => value
                .parse::<StorageScope>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_STORAGE,
                    value,
                })?,
            None => StorageScope::default(),
        };

        let http_timeout = match get(ENV_HTTP_TIMEOUT_SECS) {
            Some(value) => {
                let secs = value.trim().parse::<u64>().ok().filter(|secs| *secs > 0);
                match secs {
                    Some(secs) => Duration::from_secs(secs),
                    None => {
                        return Err(ConfigError::InvalidValue {
                            key: ENV_HTTP_TIMEOUT_SECS,
                            value,
                        })
                    }
                }
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            cognito_url,
            client_id,
            api_url,
            storage,
            storage_path: get(ENV_STORAGE_PATH).map(PathBuf::from),
            http_timeout,
        })
    }
}

fn parse_url(key: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        key,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = PlayerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.cognito_url.as_str(), "https://cognito-idp.us-east-1.amazonaws.com/");
        assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
        assert_eq!(config.storage, StorageScope::Local);
        assert_eq!(config.storage_path, None);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_are_applied() {
        let config = PlayerConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://api.ttrpgz.test/v1"),
            (ENV_STORAGE, "Session"),
            (ENV_STORAGE_PATH, "/tmp/tokens.json"),
            (ENV_HTTP_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();
        assert_eq!(config.api_url.as_str(), "https://api.ttrpgz.test/v1");
        assert_eq!(config.storage, StorageScope::Session);
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/tokens.json")));
        assert_eq!(config.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = PlayerConfig::from_lookup(lookup(&[(ENV_CLIENT_ID, "  ")])).unwrap();
        assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            PlayerConfig::from_lookup(lookup(&[(ENV_API_URL, "not a url")])),
            Err(ConfigError::InvalidUrl { key: ENV_API_URL, .. })
        ));
        assert!(matches!(
            PlayerConfig::from_lookup(lookup(&[(ENV_STORAGE, "cloud")])),
            Err(ConfigError::InvalidValue { key: ENV_STORAGE, .. })
        ));
        assert!(matches!(
            PlayerConfig::from_lookup(lookup(&[(ENV_HTTP_TIMEOUT_SECS, "0")])),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
