//! Server settings and the configuration object handed to [`super::create_server`].

use std::net::{IpAddr, SocketAddr};

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Listener settings loaded from CLI flags, `FRONTDESK_*` environment
/// variables and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FRONTDESK")]
pub struct ServerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
}

/// Raised when the configured listener address is unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address built from [`Self::host`] and [`Self::port`].
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host().trim();
        let ip: IpAddr = host.parse().map_err(|source| ConfigError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Read by server tests only")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Attach Prometheus middleware to the configuration.
    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
