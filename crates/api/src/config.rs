//! Runtime configuration read from the environment.

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub const HOST_VAR: &str = "CLUBHUB_HOST";
pub const PORT_VAR: &str = "CLUBHUB_PORT";
pub const STATIC_DIR_VAR: &str = "CLUBHUB_STATIC_DIR";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CLUBHUB_HOST={value:?} is not an IP address: {source}")]
    InvalidHost { value: String, source: AddrParseError },

    #[error("CLUBHUB_PORT={value:?} is not a port number: {source}")]
    InvalidPort { value: String, source: ParseIntError },
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR) {
            let ip: IpAddr = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidHost { value: value.clone(), source })?;
            config.bind_addr.set_ip(ip);
        }

        match lookup(PORT_VAR) {
            Some(value) => {
                let port: u16 = value
                    .trim()
                    .parse()
                    .map_err(|source| ConfigError::InvalidPort { value: value.clone(), source })?;
                config.bind_addr.set_port(port);
            }
            None => tracing::warn!("{PORT_VAR} not set; using default port {DEFAULT_PORT}"),
        }

        if let Some(value) = lookup(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(value);
        }

        tracing::debug!(bind_addr = %config.bind_addr, static_dir = %config.static_dir.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn reads_every_variable() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, " 3000 "),
            (STATIC_DIR_VAR, "/srv/clubhub"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.static_dir, PathBuf::from("/srv/clubhub"));
    }

    #[test]
    fn rejects_bad_port() {
        let err = ApiConfig::from_lookup(lookup_from(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
        assert!(err.to_string().contains("CLUBHUB_PORT"));
    }

    #[test]
    fn rejects_hostname_instead_of_ip() {
        let err = ApiConfig::from_lookup(lookup_from(&[(HOST_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }
}
