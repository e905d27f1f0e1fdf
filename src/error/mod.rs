use reqwest::StatusCode;
use serde_json::Value;

/// Message used when a request went out but nothing came back
pub const NO_RESPONSE_MESSAGE: &str = "No response received from Supadata API";

/// Error types returned by the Supadata client
#[derive(thiserror::Error, Debug)]
pub enum SupadataError {
    /// The client could not be constructed (missing key, bad base URL, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required call argument was missing; no request was sent
    #[error("{0}")]
    Validation(String),

    /// The API answered with a non-2xx status
    #[error("Supadata API Error ({}): {message}", .status.as_u16())]
    Api {
        status: StatusCode,
        message: String,
        body: Option<Value>,
    },

    /// The request was sent but no response was received
    #[error("No response received from Supadata API")]
    Network(#[source] reqwest::Error),

    /// Any other transport failure, passed through as-is
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// A successful response carried a body that is not JSON
    #[error("Failed to decode Supadata API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SupadataError {
    /// Build the API error for a non-2xx response
    pub(crate) fn from_response(status: StatusCode, body: Option<Value>) -> Self {
        let message = match status {
            StatusCode::UNAUTHORIZED => "Invalid or missing API key".to_string(),
            StatusCode::TOO_MANY_REQUESTS => "Rate limit exceeded".to_string(),
            _ => body
                .as_ref()
                .and_then(|data| data.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("Unknown error occurred")
                .to_string(),
        };

        SupadataError::Api {
            status,
            message,
            body,
        }
    }

    /// Classify a transport error: anything that happened after the request
    /// left the client counts as "no response"
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() || err.is_redirect() {
            SupadataError::Http(err)
        } else if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            SupadataError::Network(err)
        } else {
            SupadataError::Http(err)
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SupadataError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of an API error
    pub fn body(&self) -> Option<&Value> {
        match self {
            SupadataError::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SupadataError::Validation(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, SupadataError::Configuration(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, SupadataError::Network(_))
    }
}

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, SupadataError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unauthorized_message() {
        let err = SupadataError::from_response(StatusCode::UNAUTHORIZED, None);
        assert_eq!(
            err.to_string(),
            "Supadata API Error (401): Invalid or missing API key"
        );
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_rate_limit_ignores_body_message() {
        let body = json!({ "message": "slow down" });
        let err = SupadataError::from_response(StatusCode::TOO_MANY_REQUESTS, Some(body.clone()));
        assert_eq!(err.to_string(), "Supadata API Error (429): Rate limit exceeded");
        assert_eq!(err.body(), Some(&body));
    }

    #[test]
    fn test_body_message_is_used() {
        let err = SupadataError::from_response(
            StatusCode::BAD_REQUEST,
            Some(json!({ "message": "Bad request" })),
        );
        assert_eq!(err.to_string(), "Supadata API Error (400): Bad request");
    }

    #[test]
    fn test_unknown_error_fallback() {
        let err = SupadataError::from_response(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(
            err.to_string(),
            "Supadata API Error (500): Unknown error occurred"
        );

        // non-string message fields are ignored
        let err = SupadataError::from_response(
            StatusCode::BAD_GATEWAY,
            Some(json!({ "message": 42 })),
        );
        assert_eq!(
            err.to_string(),
            "Supadata API Error (502): Unknown error occurred"
        );
    }

    #[test]
    fn test_validation_has_no_status() {
        let err = SupadataError::Validation("Video ID is required".to_string());
        assert_eq!(err.to_string(), "Video ID is required");
        assert!(err.is_validation());
        assert_eq!(err.status(), None);
        assert!(err.body().is_none());
    }
}
