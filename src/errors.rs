//! Error types for the Revolut SDK.
//!
//! Every endpoint surfaces one of a small set of failures: the client was
//! built with bad configuration, the transport failed, the API answered with
//! an unexpected status, or a JSON body could not be (de)serialized.
use thiserror::Error;

/// The primary error type for the SDK.
#[derive(Error, Debug)]
pub enum RevolutError {
    /// The client was constructed with an invalid configuration (empty
    /// credential, unusable base URL). Raised before any request is sent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// DNS, connection, TLS or timeout failure while talking to the API.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The API answered with a status the endpoint does not treat as success.
    /// `body` is the response text as sent. A body that is not valid UTF-8 has
    /// its invalid sequences replaced with U+FFFD.
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// A request body could not be encoded or a success body could not be decoded.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl RevolutError {
    /// Build an API error from a status code and the raw response text.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        RevolutError::Api {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status if this is an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            RevolutError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this is an API error.
    pub fn body(&self) -> Option<&str> {
        match self {
            RevolutError::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RevolutError {
    fn from(err: reqwest::Error) -> Self {
        RevolutError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for RevolutError {
    fn from(err: serde_json::Error) -> Self {
        RevolutError::JsonError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = RevolutError::api(404, r#"{"message":"Not found"}"#);
        assert_eq!(
            err.to_string(),
            r#"API error (status 404): {"message":"Not found"}"#
        );
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some(r#"{"message":"Not found"}"#));
    }

    #[test]
    fn non_api_errors_have_no_status() {
        let err = RevolutError::Config("access token is empty".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
    }
}
