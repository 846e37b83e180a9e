//! # combsort server
//!
//! HTTP service exposing the comb sort engine.
//!
//! This crate provides:
//! - `POST /api/sort` with the JSON contract described in [`wire`]
//! - An access gate seam ([`AccessGate`]) with open and HMAC-token gates
//! - A journal seam ([`SortJournal`]) that receives every completed sort
//! - A deadline around the engine, which itself cannot be cancelled
//!
//! # Example
//!
//! ```rust,ignore
//! use combsort_server::{ServerConfig, SortServer};
//!
//! let config = ServerConfig::default().with_auth(b"my-secure-secret".to_vec());
//! SortServer::new(config).serve().await?;
//! ```
//!
//! # Collaborators
//!
//! The server owns no global state. The gate and the journal are handed to
//! [`SortServer::with_collaborators`] and shared with every handler through
//! axum state. The gate runs as route middleware, so unauthorized callers
//! are turned away before their body is read. [`SortServer::new`] picks
//! [`TokenGate`] when a secret is configured, [`OpenGate`] otherwise, and
//! always uses [`TracingJournal`].

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod auth;
mod config;
mod error;
mod handler;
mod journal;
mod server;
pub mod wire;

pub use auth::{AccessGate, AuthConfig, OpenGate, TokenGate, ANONYMOUS_USER, TOKEN_COOKIE};
pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{ServerError, ServerResult};
pub use journal::{SortJournal, SortRecord, TracingJournal};
pub use server::SortServer;
