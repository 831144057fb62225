//! Error types for the chat completion client.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// Chat completion client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the provider
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl OpenAIError {
    /// Whether the provider rejected our credentials.
    ///
    /// Some proxies answer 400 with the provider's error body, so the body is
    /// checked as well as the status.
    pub fn is_auth_error(&self) -> bool {
        match self {
            OpenAIError::Api { status, message } => {
                *status == 401
                    || message.contains("invalid_api_key")
                    || message.contains("Incorrect API key")
            }
            _ => false,
        }
    }

    /// HTTP status returned by the provider, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            OpenAIError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
