//! Error types for the Webex API client.
//!
//! This module provides a single error type covering transport failures,
//! API error responses, malformed list pages and records that fail to
//! decode into their typed model.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Webex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Webex API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Tracking ID reported by Webex, quote it in support requests
        tracking_id: Option<String>,
        /// Raw response body for debugging
        body: Value,
    },

    /// The access token was rejected (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The token lacks the scope or role for this operation (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Token exchange with the OAuth endpoint failed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the API and retries were exhausted
    #[error("Rate limited; retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Number of seconds to wait before retrying
        retry_after_secs: u64,
    },

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// A list page did not have the expected shape
    #[error("Malformed page: {0}")]
    MalformedPage(String),

    /// A record in a list page failed to decode into its model
    #[error("Invalid record {index} under '{item_key}': {source}")]
    ItemValidation {
        /// Field of the page body holding the records
        item_key: String,
        /// Position of the record within the whole listing
        index: usize,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A Webex ID could not be decoded
    #[error("Invalid Webex ID: {0}")]
    InvalidId(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried.
    ///
    /// # Example
    ///
    /// ```
    /// use webex_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Retrying operation...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::Timeout | Error::RateLimited { .. } => true,
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Error::Unauthorized(_) | Error::Forbidden(_) | Error::Authentication(_)
        )
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::InvalidId(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if a list page or one of its records was malformed.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::MalformedPage(_) | Error::ItemValidation { .. })
    }

    /// The Webex tracking ID, when the server reported one.
    pub fn tracking_id(&self) -> Option<&str> {
        match self {
            Error::Api { tracking_id, .. } => tracking_id.as_deref(),
            _ => None,
        }
    }

    /// Create an API error from a response.
    ///
    /// Webex error bodies look like
    /// `{"message": "...", "errors": [{"description": "..."}], "trackingId": "..."}`.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message = api_message(&body).unwrap_or_else(|| "Unknown API error".to_string());
        let tracking_id = body
            .get("trackingId")
            .and_then(|t| t.as_str())
            .map(String::from);

        Error::Api {
            status,
            message,
            tracking_id,
            body,
        }
    }
}

/// Extract a human-readable message from a Webex error body.
pub(crate) fn api_message(body: &Value) -> Option<String> {
    let descriptions: Vec<&str> = body
        .get("errors")
        .and_then(|e| e.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("description").and_then(|d| d.as_str()))
                .collect()
        })
        .unwrap_or_default();

    if !descriptions.is_empty() {
        return Some(descriptions.join("; "));
    }

    body.get("message")
        .and_then(|m| m.as_str())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        assert!(Error::Timeout.is_retryable());
        assert!(Error::RateLimited { retry_after_secs: 30 }.is_retryable());
        assert!(!Error::InvalidInput("bad".into()).is_retryable());
        assert!(!Error::MalformedPage("bad".into()).is_retryable());
    }

    #[test]
    fn test_error_auth() {
        assert!(Error::Unauthorized("expired".into()).is_auth_error());
        assert!(Error::Forbidden("scope".into()).is_auth_error());
        assert!(Error::Authentication("failed".into()).is_auth_error());
        assert!(!Error::Timeout.is_auth_error());
    }

    #[test]
    fn test_from_api_response() {
        let body = serde_json::json!({
            "message": "The request could not be understood",
            "errors": [
                { "description": "Invalid email address" },
                { "description": "Missing displayName" }
            ],
            "trackingId": "ROUTER_65F1A2B3-1234"
        });

        let err = Error::from_api_response(400, body);
        assert!(err.is_client_error());
        assert_eq!(err.tracking_id(), Some("ROUTER_65F1A2B3-1234"));
        match err {
            Error::Api {
                status, message, ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid email address; Missing displayName");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_from_api_response_message_only() {
        let body = serde_json::json!({ "message": "Service unavailable" });
        let err = Error::from_api_response(503, body);
        assert!(err.is_server_error());
        assert!(err.is_retryable());
        assert!(err.to_string().contains("Service unavailable"));
    }

    #[test]
    fn test_item_validation_is_decode_error() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = Error::ItemValidation {
            item_key: "items".into(),
            index: 2,
            source,
        };
        assert!(err.is_decode_error());
        assert!(err.to_string().starts_with("Invalid record 2 under 'items'"));
    }
}
