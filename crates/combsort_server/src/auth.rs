//! Access gating for the sort endpoint.
//!
//! The server does not manage users or sessions. It only decides whether a
//! request may reach the engine, and under which user id the sort is
//! journaled.
//!
//! ## Token Format
//!
//! [`TokenGate`] accepts tokens of the form
//!
//! ```text
//! <user_id>.<issued_at_millis>.<hex HMAC-SHA256 of "user_id.issued_at_millis">
//! ```
//!
//! carried either as `Authorization: Bearer <token>` or in the
//! [`TOKEN_COOKIE`] cookie.

use crate::error::{ServerError, ServerResult};
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use zeroize::Zeroizing;

type HmacSha256 = Hmac<Sha256>;

/// User id reported by [`OpenGate`].
pub const ANONYMOUS_USER: &str = "anonymous";

/// Cookie that may carry a token.
pub const TOKEN_COOKIE: &str = "combsort_token";

/// Decides whether a request may use the sort endpoint.
pub trait AccessGate: Send + Sync {
    /// Returns the caller's user id, or [`ServerError::NotAuthorized`].
    fn authorize(&self, headers: &HeaderMap) -> ServerResult<String>;
}

/// Gate that lets every request through as [`ANONYMOUS_USER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGate;

impl AccessGate for OpenGate {
    fn authorize(&self, _headers: &HeaderMap) -> ServerResult<String> {
        Ok(ANONYMOUS_USER.to_string())
    }
}

/// Authentication configuration.
#[derive(Clone)]
pub struct AuthConfig {
    secret: Zeroizing<Vec<u8>>,
    /// Token expiration duration.
    pub token_expiry: Duration,
}

impl AuthConfig {
    /// Creates a new auth configuration.
    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            secret: Zeroizing::new(secret),
            token_expiry: Duration::from_secs(24 * 60 * 60), // 24 hours
        }
    }

    /// Sets the token expiration duration.
    pub fn with_expiry(mut self, expiry: Duration) -> Self {
        self.token_expiry = expiry;
        self
    }

    /// Returns the signing secret.
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("token_expiry", &self.token_expiry)
            .finish()
    }
}

/// Gate that requires an HMAC-signed, unexpired token.
#[derive(Debug, Clone)]
pub struct TokenGate {
    config: AuthConfig,
}

impl TokenGate {
    /// Creates a new token gate.
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Creates a token for `user_id`, issued now.
    ///
    /// User ids must be non-empty and made of ASCII letters, digits, `-`,
    /// `_`, `.` or `@`, so that the token survives as a cookie value.
    pub fn create_token(&self, user_id: &str) -> ServerResult<String> {
        self.create_token_at(user_id, now_millis())
    }

    fn create_token_at(&self, user_id: &str, issued_at: u64) -> ServerResult<String> {
        if !is_valid_user_id(user_id) {
            return Err(ServerError::InvalidRequest(format!(
                "invalid user id: {user_id:?}"
            )));
        }

        let payload = format!("{user_id}.{issued_at}");
        let signature = self.mac(payload.as_bytes())?.finalize().into_bytes();
        Ok(format!("{payload}.{}", hex::encode(signature)))
    }

    /// Validates a token and returns the user id it was issued for.
    pub fn validate_token(&self, token: &str) -> ServerResult<String> {
        let mut parts = token.rsplitn(3, '.');
        let (Some(signature), Some(issued_at), Some(user_id)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(ServerError::NotAuthorized("Malformed token".into()));
        };

        // "<user_id>.<issued_at>" is everything before the last dot.
        let payload = &token[..token.len() - signature.len() - 1];
        let signature = hex::decode(signature)
            .map_err(|_| ServerError::NotAuthorized("Malformed token signature".into()))?;
        self.mac(payload.as_bytes())?
            .verify_slice(&signature)
            .map_err(|_| ServerError::NotAuthorized("Invalid signature".into()))?;

        let issued_at: u64 = issued_at
            .parse()
            .map_err(|_| ServerError::NotAuthorized("Malformed token timestamp".into()))?;
        let expiry_millis = u64::try_from(self.config.token_expiry.as_millis()).unwrap_or(u64::MAX);
        if now_millis() > issued_at.saturating_add(expiry_millis) {
            return Err(ServerError::NotAuthorized("Token expired".into()));
        }

        Ok(user_id.to_string())
    }

    fn mac(&self, data: &[u8]) -> ServerResult<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(self.config.secret())
            .map_err(|e| ServerError::Internal(format!("hmac key: {e}")))?;
        mac.update(data);
        Ok(mac)
    }
}

impl AccessGate for TokenGate {
    fn authorize(&self, headers: &HeaderMap) -> ServerResult<String> {
        let token = extract_token(headers)
            .ok_or_else(|| ServerError::NotAuthorized("Authentication required".into()))?;
        self.validate_token(token)
    }
}

/// Finds a token in the `Authorization` header or the token cookie.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());
    if bearer.is_some() {
        return bearer;
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == TOKEN_COOKIE)
        .map(|(_, token)| token)
        .filter(|token| !token.is_empty())
}

fn is_valid_user_id(user_id: &str) -> bool {
    !user_id.is_empty()
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'))
}

fn now_millis() -> u64 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    u64::try_from(millis).unwrap_or(u64::MAX)
}
