// ── Core error types ──
//
// User-facing errors from oasis-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures
// directly. The `From<oasis_api::Error>` impl translates
// transport-layer errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Resource not found: {identifier}")]
    ResourceNotFound { identifier: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api { message: String, code: Option<i64> },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<oasis_api::Error> for CoreError {
    fn from(err: oasis_api::Error) -> Self {
        match err {
            oasis_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            oasis_api::Error::MissingToken => CoreError::NotSignedIn,
            oasis_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        code: e.status().map(|s| i64::from(s.as_u16())),
                    }
                }
            }
            oasis_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            oasis_api::Error::Api { message, code } => CoreError::Api {
                message,
                code: Some(code),
            },
            oasis_api::Error::NotFound { what } => CoreError::ResourceNotFound {
                identifier: what,
            },
            oasis_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
