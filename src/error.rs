//! Error handling for the MusicGPT client
//!
//! Every failure surfaced by this crate is a [`MusicGptError`]. The
//! transport client is the only place that classifies HTTP responses into
//! error variants; services propagate them unchanged.

use serde_json::{Map, Value};
use thiserror::Error;

/// Result type alias for the MusicGPT client
pub type Result<T> = std::result::Result<T, MusicGptError>;

/// Default message for payment failures when the API body carries none.
const PAYMENT_REQUIRED_MESSAGE: &str =
    "Your account has insufficient funds to process the request";

/// Unknown-error fallback when the API body carries no message.
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Main error type for the MusicGPT client
#[derive(Error, Debug)]
pub enum MusicGptError {
    /// Generic API error. Also wraps transport-level failures (DNS,
    /// connection refused, timeout), in which case `status` is 0 and the
    /// originating error is kept as the source.
    #[error("{message}")]
    Api {
        message: String,
        status: u16,
        endpoint: Option<String>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Authentication failed (401/403, invalid or missing API key)
    #[error("{message}")]
    Authentication {
        message: String,
        status: u16,
        endpoint: Option<String>,
    },

    /// Requested resource does not exist (404)
    #[error("{message}")]
    NotFound {
        message: String,
        endpoint: Option<String>,
    },

    /// Conflict with the current state of the resource (409)
    #[error("{message}")]
    Conflict {
        message: String,
        endpoint: Option<String>,
    },

    /// Account has insufficient funds (402)
    #[error("{message}")]
    PaymentRequired { message: String },

    /// Rate limit exceeded (429)
    #[error("{message}")]
    RateLimit {
        message: String,
        retry_after: Option<u64>,
    },

    /// Request validation failed (400/422), with per-field detail
    #[error("{message}")]
    Validation {
        message: String,
        errors: Map<String, Value>,
    },

    /// Client-side configuration error (empty API key, bad timeout)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Helper constructors, one per variant
impl MusicGptError {
    pub fn api(message: impl Into<String>, status: u16, endpoint: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            status,
            endpoint: Some(endpoint.into()),
            source: None,
        }
    }

    /// Wrap a transport-level failure. Status is 0 because no HTTP response
    /// was obtained.
    pub fn network(endpoint: &str, source: reqwest::Error) -> Self {
        Self::Api {
            message: format!(
                "Failed to request MusicGPT API endpoint \"{endpoint}\": {source}"
            ),
            status: 0,
            endpoint: Some(endpoint.to_string()),
            source: Some(source),
        }
    }

    pub fn authentication(
        message: impl Into<String>,
        status: u16,
        endpoint: impl Into<String>,
    ) -> Self {
        Self::Authentication {
            message: message.into(),
            status,
            endpoint: Some(endpoint.into()),
        }
    }

    pub fn not_found(message: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            endpoint: Some(endpoint.into()),
        }
    }

    pub fn conflict(message: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            endpoint: Some(endpoint.into()),
        }
    }

    pub fn payment_required(message: impl Into<String>) -> Self {
        Self::PaymentRequired {
            message: message.into(),
        }
    }

    pub fn rate_limit(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    pub fn validation(message: impl Into<String>, errors: Map<String, Value>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl MusicGptError {
    /// HTTP status the error was derived from, 0 when not HTTP-derived.
    pub fn status(&self) -> u16 {
        match self {
            Self::Api { status, .. } => *status,
            Self::Authentication { status, .. } => *status,
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::PaymentRequired { .. } => 402,
            Self::RateLimit { .. } => 429,
            Self::Validation { .. } => 0,
            Self::Config(_) => 0,
        }
    }

    /// Endpoint the failing request targeted, when known.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Api { endpoint, .. }
            | Self::Authentication { endpoint, .. }
            | Self::NotFound { endpoint, .. }
            | Self::Conflict { endpoint, .. } => endpoint.as_deref(),
            _ => None,
        }
    }

    /// Seconds to wait before retrying, for rate-limit errors.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Per-field validation detail. Empty for non-validation errors.
    pub fn field_errors(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Whether a caller-side retry can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimit { .. } => true,
            Self::Api { status, .. } => *status == 0 || *status >= 500,
            _ => false,
        }
    }
}

/// Classify an HTTP error response into a typed error.
///
/// Total function of (status code, body): callers branch on the returned
/// variant, so the table below must stay stable.
///
/// | Status     | Variant                                       |
/// |------------|-----------------------------------------------|
/// | 400        | `Validation` ("Bad Request: ...")             |
/// | 401, 403   | `Authentication`                              |
/// | 402        | `PaymentRequired`                             |
/// | 404        | `NotFound`                                    |
/// | 409        | `Conflict`                                    |
/// | 422        | `Validation` ("Validation failed: ...")       |
/// | 429        | `RateLimit` (retry_after from body)           |
/// | 500        | `Api` ("Internal Server Error: ...")          |
/// | other      | `Api`                                         |
pub(crate) fn classify_status(
    status: u16,
    body: &Map<String, Value>,
    endpoint: &str,
) -> MusicGptError {
    let message = body_message(body);

    match status {
        400 => MusicGptError::validation(
            format!("Bad Request: {message}"),
            field_errors(body),
        ),
        401 | 403 => MusicGptError::authentication(
            format!("Authentication failed: {message}"),
            status,
            endpoint,
        ),
        402 => MusicGptError::payment_required(
            explicit_body_message(body).unwrap_or(PAYMENT_REQUIRED_MESSAGE),
        ),
        404 => MusicGptError::not_found(message, endpoint),
        409 => MusicGptError::conflict(message, endpoint),
        422 => MusicGptError::validation(
            format!("Validation failed: {message}"),
            field_errors(body),
        ),
        429 => MusicGptError::rate_limit(message, retry_after(body)),
        500 => MusicGptError::api(format!("Internal Server Error: {message}"), status, endpoint),
        _ => MusicGptError::api(message, status, endpoint),
    }
}

/// Message from the body's `message` or `error` key, when present.
fn explicit_body_message(body: &Map<String, Value>) -> Option<&str> {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
}

fn body_message(body: &Map<String, Value>) -> &str {
    explicit_body_message(body).unwrap_or(UNKNOWN_ERROR_MESSAGE)
}

/// Per-field errors from the body's `errors` key, empty when absent or not
/// an object.
fn field_errors(body: &Map<String, Value>) -> Map<String, Value> {
    body.get("errors")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// `retry_after` from the body, parsed as an integer. The API sends it both
/// as a number and as a numeric string.
fn retry_after(body: &Map<String, Value>) -> Option<u64> {
    let value = body.get("retry_after")?;
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}
