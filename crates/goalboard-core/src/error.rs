//! Error Taxonomy
//!
//! Failures surfaced by REST calls and client-side validation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected).
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx response without an application error message.
    #[error("server responded with HTTP {status}")]
    Http { status: u16, message: Option<String> },

    /// The server accepted the request but reported a failure in the body.
    #[error("{0}")]
    Rejected(String),

    /// The body did not match the endpoint's schema.
    #[error("unexpected response: {0}")]
    Parse(String),

    /// Input rejected before any request was issued.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// Text suitable for inline display next to a form.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Connection error.".to_string(),
            ApiError::Http { message: Some(m), .. } => m.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}
