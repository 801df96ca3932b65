use thiserror::Error;

use crate::model::ResourceKind;

pub type Result<T> = std::result::Result<T, BlinkPayError>;

/// Errors returned by Blink Debit operations.
#[derive(Debug, Error)]
pub enum BlinkPayError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("unauthorised: {0}")]
    Unauthorised(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("request timed out: {0}")]
    RequestTimeout(String),

    #[error("rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("{kind} {id} reached terminal status {status}")]
    Rejected {
        kind: ResourceKind,
        id: String,
        status: String,
    },

    #[error("gateway timed out waiting for authorisation of {kind} {id}")]
    GatewayTimeout { kind: ResourceKind, id: String },

    #[error("{kind} {id} was not resolved within {max_wait_secs} seconds")]
    PollTimeout {
        kind: ResourceKind,
        id: String,
        max_wait_secs: u64,
    },

    #[error("waiting for {kind} {id} was interrupted")]
    Interrupted { kind: ResourceKind, id: String },
}

impl BlinkPayError {
    /// Map a non-2xx HTTP status and its response body to an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = service_message(body);
        match status {
            400 => Self::InvalidValue(message),
            401 => Self::Unauthorised(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            408 => Self::RequestTimeout(message),
            429 => Self::RateLimitExceeded(message),
            _ => Self::Service { status, message },
        }
    }

    /// Whether this error came from the transport or the remote service rather
    /// than from a polling outcome.
    pub fn is_transport(&self) -> bool {
        !matches!(
            self,
            Self::Rejected { .. }
                | Self::GatewayTimeout { .. }
                | Self::PollTimeout { .. }
                | Self::Interrupted { .. }
        )
    }

    /// The resource ID a polling outcome refers to.
    pub fn resource_id(&self) -> Option<&str> {
        match self {
            Self::Rejected { id, .. }
            | Self::GatewayTimeout { id, .. }
            | Self::PollTimeout { id, .. }
            | Self::Interrupted { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of a BlinkPay or OAuth2 error body.
fn service_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
        if let Some(error) = value.get("error").and_then(|e| e.as_str()) {
            return match value.get("error_description").and_then(|d| d.as_str()) {
                Some(description) => format!("{error}: {description}"),
                None => error.to_string(),
            };
        }
    }
    body.chars().take(200).collect()
}
