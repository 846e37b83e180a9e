//! Server configuration.

use crate::auth::AuthConfig;
use std::net::SocketAddr;
use std::time::Duration;

/// Port the original service listened on.
pub const DEFAULT_PORT: u16 = 5247;

/// Configuration for the sort server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Deadline for a single sort, measured by the handler.
    pub request_timeout: Duration,
    /// Maximum number of values accepted in one request.
    pub max_values: usize,
    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
    /// Token authentication; `None` leaves the sort endpoint open.
    pub auth: Option<AuthConfig>,
}

impl ServerConfig {
    /// Creates a new server configuration.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            request_timeout: Duration::from_secs(30),
            max_values: 1_000_000,
            max_body_bytes: 16 * 1024 * 1024, // 16 MB
            auth: None,
        }
    }

    /// Sets the port, keeping the bind IP.
    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }

    /// Sets the per-request deadline.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the maximum number of values per request.
    pub fn with_max_values(mut self, max: usize) -> Self {
        self.max_values = max;
        self
    }

    /// Sets the maximum request body size.
    pub fn with_max_body_bytes(mut self, max: usize) -> Self {
        self.max_body_bytes = max;
        self
    }

    /// Enables token authentication with the given secret.
    pub fn with_auth(self, secret: Vec<u8>) -> Self {
        self.with_auth_config(AuthConfig::new(secret))
    }

    /// Enables token authentication with a full auth configuration.
    pub fn with_auth_config(mut self, auth: AuthConfig) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Returns true if requests must carry a valid token.
    pub fn requires_auth(&self) -> bool {
        self.auth.is_some()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)))
    }
}
