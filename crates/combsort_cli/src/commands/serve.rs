//! Serve command implementation.

use combsort_server::{AuthConfig, ServerConfig, SortServer};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::warn;

/// Options for `combsort serve`.
#[derive(Debug)]
pub struct ServeOptions {
    /// IP to bind to.
    pub bind: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Per-request deadline in seconds.
    pub timeout_secs: u64,
    /// Maximum values per request.
    pub max_values: usize,
    /// Token signing secret.
    pub auth_secret: Option<String>,
    /// Token lifetime in hours.
    pub token_ttl_hours: u64,
}

impl ServeOptions {
    /// Builds the server configuration.
    pub fn to_config(&self) -> ServerConfig {
        let mut config = ServerConfig::new(SocketAddr::new(self.bind, self.port))
            .with_request_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_values(self.max_values);

        match self.auth_secret.as_deref() {
            Some(secret) if !secret.is_empty() => {
                let expiry = Duration::from_secs(self.token_ttl_hours.saturating_mul(60 * 60));
                let auth = AuthConfig::new(secret.as_bytes().to_vec()).with_expiry(expiry);
                config = config.with_auth_config(auth);
            }
            _ => warn!("no auth secret configured, /api/sort is open to everyone"),
        }

        config
    }
}

/// Runs the serve command.
pub fn run(options: ServeOptions) -> Result<(), Box<dyn std::error::Error>> {
    let config = options.to_config();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(SortServer::new(config).serve())?;
    Ok(())
}
