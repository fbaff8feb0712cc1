use std::net::{SocketAddr, ToSocketAddrs};

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub upload_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            upload_limit_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `UPLOAD_LIMIT_BYTES` from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| DashboardError::Config(format!("PORT is not a valid port: {raw}")))?,
            None => defaults.port,
        };
        let upload_limit_bytes = match lookup("UPLOAD_LIMIT_BYTES") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                DashboardError::Config(format!("UPLOAD_LIMIT_BYTES is not a byte count: {raw}"))
            })?,
            None => defaults.upload_limit_bytes,
        };

        Ok(Self {
            host,
            port,
            upload_limit_bytes,
        })
    }

    /// Resolve the bind address. Accepts IP literals (v4 or bare v6) and
    /// hostnames; the first resolved address wins.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let invalid = || DashboardError::Config(format!("invalid bind address {}:{}", self.host, self.port));
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().unwrap().port(), 3001);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("UPLOAD_LIMIT_BYTES", "1024"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.upload_limit_bytes, 1024);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_hostname_host() {
        let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap();
        let addr = config.socket_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 3001);
    }

    #[test]
    fn test_bare_ipv6_host() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("HOST", "::1"), ("PORT", "8080")])).unwrap();
        let addr = config.socket_addr().unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.to_string(), "[::1]:8080");
    }

    #[test]
    fn test_invalid_host() {
        let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "not a host")])).unwrap();
        assert!(config.socket_addr().is_err());
    }
}
