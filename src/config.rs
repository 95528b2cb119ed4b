//! Server configuration resolved from command-line flags and environment.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid listen host '{host}': {source}")]
    InvalidHost {
        host: String,
        source: std::net::AddrParseError,
    },
}

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Listen address
    pub addr: SocketAddr,
    /// Simulated delay of the mock menu backend
    pub backend_latency: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            backend_latency: Duration::ZERO,
        }
    }
}

impl ServerConfig {
    pub fn from_parts(host: &str, port: u16, latency_ms: u64) -> Result<Self, ConfigError> {
        let ip: IpAddr = host.parse().map_err(|source| ConfigError::InvalidHost {
            host: host.to_string(),
            source,
        })?;

        Ok(Self {
            addr: SocketAddr::new(ip, port),
            backend_latency: Duration::from_millis(latency_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.to_string(), "0.0.0.0:3000");
        assert!(config.backend_latency.is_zero());
    }

    #[test]
    fn parts_are_combined() {
        let config = ServerConfig::from_parts("127.0.0.1", 8080, 150).unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.backend_latency, Duration::from_millis(150));

        let v6 = ServerConfig::from_parts("::1", 3000, 0).unwrap();
        assert!(v6.addr.is_ipv6());
    }

    #[test]
    fn hostnames_are_rejected() {
        let err = ServerConfig::from_parts("localhost", 3000, 0).unwrap_err();
        assert!(err.to_string().contains("localhost"));
    }
}
