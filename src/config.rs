//! Runtime configuration loaded from `config.yaml`.
//!
//! Every field has a default, so a missing file or a partial file both
//! work. Hosting platforms that assign the listen port hand it over via the
//! `PORT` environment variable, which overrides the configured value.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ApiConfig {
    /// Resolve the configured host/port into a bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("invalid listen address {0:?}")]
    InvalidAddress(String),
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let mut config = if path.exists() {
        serde_yaml::from_str(&fs::read_to_string(path)?)?
    } else {
        Config::default()
    };

    if let Ok(port) = env::var("PORT") {
        config.api.port = port
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_yaml_is_parsed() {
        let config: Config = serde_yaml::from_str("api:\n  host: 0.0.0.0\n  port: 8080\n").unwrap();
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.api.port, 8080);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_yaml::from_str("api:\n  port: 9000\n").unwrap();
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.api.port, 9000);
    }

    #[test]
    fn socket_addr_resolves_and_rejects() {
        let config = ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
        };
        assert_eq!(config.socket_addr().unwrap().port(), 5000);

        let bad = ApiConfig {
            host: "not a host".to_string(),
            port: 5000,
        };
        assert!(matches!(
            bad.socket_addr().unwrap_err(),
            ConfigError::InvalidAddress(_)
        ));
    }

    #[test]
    fn load_config_defaults_and_port_override() {
        // Sequential within one test: PORT mutation would race parallel
        // assertions on the default port.
        env::remove_var("PORT");
        let config = load_config(Path::new("no-such-config.yaml")).unwrap();
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.api.port, 5000);

        env::set_var("PORT", "8080");
        let config = load_config(Path::new("no-such-config.yaml")).unwrap();
        assert_eq!(config.api.port, 8080);

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            load_config(Path::new("no-such-config.yaml")).unwrap_err(),
            ConfigError::InvalidPort(_)
        ));
        env::remove_var("PORT");
    }
}
