//! Server settings loaded via OrthoConfig from flags, environment variables
//! prefixed `REGION_SERVER_`, and configuration files.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_KEEP_ALIVE_SECS: u64 = 60;
const DEFAULT_CLIENT_REQUEST_TIMEOUT_MS: u64 = 1000;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 2;

/// Listener address and connection timeouts.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGION_SERVER")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Idle keep-alive window for persistent connections.
    pub keep_alive_secs: Option<u64>,
    /// Time allowed for a client to send request headers.
    pub client_request_timeout_ms: Option<u64>,
    /// Grace period for in-flight requests on shutdown.
    pub shutdown_timeout_secs: Option<u64>,
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

    /// Keep-alive window, falling back to 60 seconds.
    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_secs.unwrap_or(DEFAULT_KEEP_ALIVE_SECS))
    }

    /// Request header deadline, falling back to one second.
    pub fn client_request_timeout(&self) -> Duration {
        Duration::from_millis(
            self.client_request_timeout_ms
                .unwrap_or(DEFAULT_CLIENT_REQUEST_TIMEOUT_MS),
        )
    }

    /// Shutdown grace period in seconds, falling back to 2.
    pub fn shutdown_timeout_secs(&self) -> u64 {
        self.shutdown_timeout_secs
            .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS)
    }
}
