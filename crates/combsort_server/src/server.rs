//! Main sort server.

use crate::auth::{AccessGate, OpenGate, TokenGate};
use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::handler::{self, AppState, SharedState};
use crate::journal::{SortJournal, TracingJournal};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// The sort server.
///
/// # Example
///
/// ```
/// use combsort_server::{ServerConfig, SortServer};
///
/// let server = SortServer::new(ServerConfig::default());
/// let _router = server.router();
///
/// // In a real application, call `server.serve().await`
/// ```
pub struct SortServer {
    state: SharedState,
}

impl SortServer {
    /// Creates a server with the default collaborators for `config`.
    pub fn new(config: ServerConfig) -> Self {
        let gate: Arc<dyn AccessGate> = match &config.auth {
            Some(auth) => Arc::new(TokenGate::new(auth.clone())),
            None => Arc::new(OpenGate),
        };
        Self::with_collaborators(config, gate, Arc::new(TracingJournal))
    }

    /// Creates a server with an explicit gate and journal.
    pub fn with_collaborators(
        config: ServerConfig,
        gate: Arc<dyn AccessGate>,
        journal: Arc<dyn SortJournal>,
    ) -> Self {
        Self {
            state: Arc::new(AppState::new(config, gate, journal)),
        }
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.state.config
    }

    /// Builds the HTTP router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE]);

        Router::new()
            .route("/", get(handler::index))
            .route(
                "/api/sort",
                post(handler::sort).route_layer(middleware::from_fn_with_state(
                    Arc::clone(&self.state),
                    handler::require_caller,
                )),
            )
            .layer(DefaultBodyLimit::max(self.state.config.max_body_bytes))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::clone(&self.state))
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.state.config.bind_addr).await?;
        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    /// Serves on `listener` until `signal` completes.
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, signal: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(
            addr = %listener.local_addr()?,
            auth = self.state.config.requires_auth(),
            "Server started successfully"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await?;

        info!("Server is shutting down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C; serving until killed");
        std::future::pending::<()>().await;
    }
}
