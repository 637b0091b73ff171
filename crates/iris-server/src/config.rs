//! Server configuration read from the environment.

use std::num::ParseIntError;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MODEL_PATH: &str = "model.json";

/// Errors raised while reading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Artifact location, resolved against the working directory when relative.
    pub model_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `MODEL_PATH`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            model_path: lookup("MODEL_PATH").map(PathBuf::from).unwrap_or(defaults.model_path),
        })
    }

    /// Socket address string for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.model_path, PathBuf::from("model.json"));
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("MODEL_PATH", "artifacts/iris.json"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.model_path, PathBuf::from("artifacts/iris.json"));
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("eighty"));
    }
}
