use thiserror::Error;

/// Top-level error type for the `oasis-api` crate.
///
/// Covers every failure mode across both services: the directory
/// backend and the auth service. `oasis-core` maps these into
/// user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login or token verification failed.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// An operation that requires a token was attempted without one.
    #[error("Not signed in -- run `oasis auth login` first")]
    MissingToken,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Backend ─────────────────────────────────────────────────────
    /// Structured error parsed from the backend envelope
    /// (`success: false` or a non-2xx embedded code).
    #[error("API error (code {code}): {message}")]
    Api { message: String, code: i64 },

    /// The requested entity does not exist.
    #[error("Not found: {what}")]
    NotFound { what: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if re-authenticating might resolve this error.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::MissingToken)
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }
}
