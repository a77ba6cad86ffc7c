// ============================================================================
// Outbound Error Types
// ============================================================================

use thiserror::Error;

pub type OutboundResult<T> = Result<T, OutboundError>;

/// Error type for the signed outbound request pipeline
///
/// Every failure surfaces as one of these kinds so callers can branch on
/// what went wrong without string matching. Nothing is caught or
/// translated internally; failures bubble unchanged to the caller.
#[derive(Error, Debug)]
pub enum OutboundError {
    // ===== Key Resolution Errors =====
    #[error("no signing keypair provisioned for actor {0}")]
    KeyNotFound(String),

    // ===== Signing Errors =====
    #[error("request signing failed: {0}")]
    Signature(String),

    // ===== Serialization Errors =====
    #[error("activity serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    // ===== Transport Errors =====
    #[error("transport error: {0}")]
    Transport(String),

    // ===== Response Decoding Errors =====
    #[error("failed to decode response as JSON: {0}")]
    Parse(#[source] serde_json::Error),

    // ===== Request Construction Errors =====
    #[error("invalid target URL: {0}")]
    Url(#[from] url::ParseError),
}

impl OutboundError {
    /// Get error code for programmatic error handling
    pub fn error_code(&self) -> &'static str {
        match self {
            OutboundError::KeyNotFound(_) => "KEY_NOT_FOUND",
            OutboundError::Signature(_) => "SIGNATURE_ERROR",
            OutboundError::Serialization(_) => "SERIALIZATION_ERROR",
            OutboundError::Transport(_) => "TRANSPORT_ERROR",
            OutboundError::Parse(_) => "PARSE_ERROR",
            OutboundError::Url(_) => "URL_ERROR",
        }
    }

    /// Create a signing error
    pub fn signature(msg: impl Into<String>) -> Self {
        OutboundError::Signature(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        OutboundError::Transport(msg.into())
    }
}

impl From<reqwest::Error> for OutboundError {
    fn from(err: reqwest::Error) -> Self {
        OutboundError::Transport(err.to_string())
    }
}
