use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub param: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Error)]
pub enum AnthropicRequestError {
    /// Errors from the HTTP client
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    /// Invalid request errors from the API
    #[error("Invalid request error: {message}")]
    InvalidRequestError {
        message: String,
        param: Option<String>,
        code: Option<String>,
    },

    /// Authentication error
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimit,

    /// API overloaded
    #[error("API overloaded: {0}")]
    Overloaded(String),

    /// Generic API error
    #[error("API error: {0}")]
    Generic(String),

    /// Unexpected response from the API
    #[error("Unexpected response from API: {0}")]
    UnexpectedResponse(String),
}

/// Parse an error response from the Anthropic API.
/// This function handles both JSON format errors and plain text errors.
pub fn parse_error_response(
    status: reqwest::StatusCode,
    bytes: bytes::Bytes,
) -> AnthropicRequestError {
    // Try to parse as a structured Anthropic API error first
    if let Ok(payload) = serde_json::from_slice::<ApiErrorResponse>(&bytes) {
        match payload.error.r#type.as_deref() {
            Some("invalid_request_error") => AnthropicRequestError::InvalidRequestError {
                message: payload.error.message,
                param: payload.error.param,
                code: payload.error.code,
            },
            Some("authentication_error") => {
                AnthropicRequestError::Authentication(payload.error.message)
            }
            Some("permission_error") => {
                AnthropicRequestError::PermissionDenied(payload.error.message)
            }
            Some("not_found_error") => AnthropicRequestError::NotFound(payload.error.message),
            Some("rate_limit_error") => AnthropicRequestError::RateLimit,
            Some("api_error") => AnthropicRequestError::Generic(payload.error.message),
            Some("overloaded_error") => AnthropicRequestError::Overloaded(payload.error.message),
            _ => AnthropicRequestError::UnexpectedResponse(payload.error.message),
        }
    } else {
        // Fall back to text
        let error_text = String::from_utf8_lossy(&bytes).to_string();
        match status.as_u16() {
            429 => AnthropicRequestError::RateLimit,
            401 => AnthropicRequestError::Authentication(error_text),
            403 => AnthropicRequestError::PermissionDenied(error_text),
            404 => AnthropicRequestError::NotFound(error_text),
            _ => AnthropicRequestError::UnexpectedResponse(format!(
                "HTTP status {}: {}",
                status.as_u16(),
                error_text
            )),
        }
    }
}
