//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) keep_alive: Duration,
    pub(crate) client_request_timeout: Duration,
    pub(crate) shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Construct a configuration with actix's default timeouts.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            keep_alive: Duration::from_secs(5),
            client_request_timeout: Duration::from_secs(5),
            shutdown_timeout_secs: 30,
        }
    }

    /// Idle window before a keep-alive connection is closed.
    #[must_use]
    pub const fn with_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    /// Deadline for a client to deliver request headers.
    #[must_use]
    pub const fn with_client_request_timeout(mut self, timeout: Duration) -> Self {
        self.client_request_timeout = timeout;
        self
    }

    /// Grace period for in-flight requests once shutdown starts.
    #[must_use]
    pub const fn with_shutdown_timeout_secs(mut self, secs: u64) -> Self {
        self.shutdown_timeout_secs = secs;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
