//! Error types for thread API operations.

/// Errors that can occur while calling the threads API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Authentication material could not be used (invalid key bytes,
    /// missing credentials).
    #[error("Auth error: {message}")]
    Auth {
        /// Error description.
        message: String,
    },

    /// The service returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
        /// Service-specific error code.
        code: Option<String>,
        /// Whether this error can be retried.
        retryable: bool,
    },
}

impl ApiError {
    /// Whether this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status().is_some_and(|s| {
                        s == reqwest::StatusCode::TOO_MANY_REQUESTS || s.is_server_error()
                    })
            }
            Self::Api { retryable, .. } => *retryable,
            Self::Json(_) | Self::Auth { .. } => false,
        }
    }

    /// Error category string for log fields.
    pub fn category(&self) -> &str {
        match self {
            Self::Http(_) => "network",
            Self::Json(_) => "parse",
            Self::Auth { .. } => "auth",
            Self::Api { .. } => "api",
        }
    }
}

/// Parse an error response body into an [`ApiError::Api`].
///
/// The service wraps errors as `{"error": {"message": ..., "type": ...}}`;
/// anything else is carried verbatim. 429 and 5xx are retryable.
pub(crate) fn parse_api_error(body: &str, status: u16) -> ApiError {
    let retryable = status == 429 || status >= 500;
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let error = &json["error"];
        if error.is_object() {
            return ApiError::Api {
                status,
                message: error["message"]
                    .as_str()
                    .unwrap_or("Unknown error")
                    .to_string(),
                code: error["type"].as_str().map(String::from),
                retryable,
            };
        }
    }
    ApiError::Api {
        status,
        message: format!("HTTP {status}: {body}"),
        code: None,
        retryable,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_api_error_json_envelope() {
        let body = r#"{"error":{"type":"invalid_request_error","message":"No thread found"}}"#;
        let err = parse_api_error(body, 404);
        match err {
            ApiError::Api {
                status,
                message,
                code,
                retryable,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "No thread found");
                assert_eq!(code.as_deref(), Some("invalid_request_error"));
                assert!(!retryable);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_api_error_non_json_body() {
        let err = parse_api_error("Bad Gateway", 502);
        match err {
            ApiError::Api {
                status,
                message,
                code,
                retryable,
            } => {
                assert_eq!(status, 502);
                assert!(message.contains("502"));
                assert!(message.contains("Bad Gateway"));
                assert!(code.is_none());
                assert!(retryable);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_api_error_missing_fields() {
        let err = parse_api_error(r#"{"error":{}}"#, 400);
        match err {
            ApiError::Api { message, code, .. } => {
                assert_eq!(message, "Unknown error");
                assert!(code.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rate_limit_is_retryable() {
        let err = parse_api_error(r#"{"error":{"type":"rate_limit_exceeded","message":"Slow down"}}"#, 429);
        assert!(err.is_retryable());
        assert_eq!(err.category(), "api");
    }

    #[test]
    fn client_errors_not_retryable() {
        assert!(!parse_api_error("nope", 400).is_retryable());
        assert!(!parse_api_error("nope", 401).is_retryable());
        assert!(!parse_api_error("nope", 404).is_retryable());
    }

    #[test]
    fn server_errors_retryable() {
        assert!(parse_api_error("boom", 500).is_retryable());
        assert!(parse_api_error("boom", 503).is_retryable());
    }

    #[test]
    fn auth_error_not_retryable() {
        let err = ApiError::Auth {
            message: "bad key".into(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.category(), "auth");
    }

    #[test]
    fn display_formats() {
        let err = ApiError::Api {
            status: 404,
            message: "No thread found".into(),
            code: None,
            retryable: false,
        };
        assert_eq!(err.to_string(), "API error (404): No thread found");

        let err = ApiError::Auth {
            message: "missing key".into(),
        };
        assert_eq!(err.to_string(), "Auth error: missing key");
    }
}
