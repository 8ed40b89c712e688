//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The values override the `site-addr` that Leptos reads from `Cargo.toml`.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const HOST_VAR: &str = "COMPONIX_HOST";
pub const PORT_VAR: &str = "COMPONIX_PORT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("COMPONIX_HOST is not an IP address: {value:?}")]
    InvalidHost { value: String },

    #[error("COMPONIX_PORT is not a port number: {value:?}")]
    InvalidPort { value: String },
}

/// Bind address overrides loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind, e.g. `127.0.0.1`
    pub host: Option<IpAddr>,

    /// TCP port to bind
    pub port: Option<u16>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var(HOST_VAR).ok(), std::env::var(PORT_VAR).ok())
    }

    /// Parse raw variable values. Blank values are treated as unset.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = match non_blank(host) {
            Some(value) => Some(
                value
                    .parse::<IpAddr>()
                    .map_err(|_| ConfigError::InvalidHost { value })?,
            ),
            None => None,
        };
        let port = match non_blank(port) {
            Some(value) => Some(
                value
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort { value })?,
            ),
            None => None,
        };
        Ok(Self { host, port })
    }

    pub fn has_overrides(&self) -> bool {
        self.host.is_some() || self.port.is_some()
    }

    /// Replace the parts of `addr` that are configured.
    pub fn apply(&self, addr: SocketAddr) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(addr.ip()),
            self.port.unwrap_or(addr.port()),
        )
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Parsing (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_from_vars_with_no_values() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.has_overrides());
    }

    #[test]
    fn test_from_vars_with_all_values() {
        let config =
            Config::from_vars(Some("127.0.0.1".to_string()), Some("8080".to_string())).unwrap();

        assert_eq!(config.host, Some("127.0.0.1".parse().unwrap()));
        assert_eq!(config.port, Some(8080));
        assert!(config.has_overrides());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_vars(Some("  ".to_string()), Some(String::new())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_vars(None, Some("http".to_string())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                value: "http".to_string()
            }
        );
        assert!(err.to_string().contains(PORT_VAR));

        assert!(Config::from_vars(None, Some("70000".to_string())).is_err());
    }

    #[test]
    fn test_invalid_host() {
        let err = Config::from_vars(Some("localhost".to_string()), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { value } if value == "localhost"));
    }

    // ========================================================================
    // Applying overrides
    // ========================================================================

    #[test]
    fn test_apply_keeps_unset_parts() {
        let base: SocketAddr = "0.0.0.0:5173".parse().unwrap();

        let port_only = Config {
            host: None,
            port: Some(3000),
        };
        assert_eq!(port_only.apply(base), "0.0.0.0:3000".parse().unwrap());

        let host_only = Config {
            host: Some("127.0.0.1".parse().unwrap()),
            port: None,
        };
        assert_eq!(host_only.apply(base), "127.0.0.1:5173".parse().unwrap());

        assert_eq!(Config::default().apply(base), base);
    }

    #[test]
    fn test_apply_ipv6_host() {
        let base: SocketAddr = "0.0.0.0:5173".parse().unwrap();
        let config = Config::from_vars(Some("::1".to_string()), None).unwrap();
        assert_eq!(config.apply(base), "[::1]:5173".parse().unwrap());
    }
}
