//! Error type for HTTP handlers and its JSON rendering.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::domains::articles::ScrapeError;
use crate::domains::auth::AuthError;
use crate::domains::summarization::SummarizeError;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub details: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body or query could not be decoded.
    #[error("Invalid request format: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Authentication required.")]
    Unauthorized,

    #[error("Summary not found.")]
    NotFound,

    #[error(transparent)]
    Scraping(#[from] ScrapeError),

    #[error("AI provider is not configured: {0}")]
    Configuration(String),

    #[error("AI provider error: {message}")]
    AiProvider { auth: bool, message: String },

    #[error("Summarization failed: {0}")]
    Summarization(#[source] anyhow::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::BadRequest(_) | ApiError::Scraping(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Configuration(_) | ApiError::AiProvider { auth: true, .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::AiProvider { auth: false, .. } => StatusCode::BAD_GATEWAY,
            ApiError::Summarization(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The user-facing body. Never includes internal error text.
    pub fn body(&self) -> ErrorResponse {
        let (message, details) = match self {
            ApiError::InvalidRequest(_) => (
                "Invalid request format.",
                "Please check your request data and try again. Make sure all required fields are included and properly formatted.",
            ),
            ApiError::BadRequest(message) => {
                return ErrorResponse {
                    message: message.clone(),
                    details: "Please check your request data and try again.".to_string(),
                }
            }
            ApiError::Unauthorized => (
                "Authentication required.",
                "Please sign in and include your access token with the request.",
            ),
            ApiError::NotFound => (
                "Summary not found.",
                "The summary does not exist or is not available to your account.",
            ),
            ApiError::Scraping(e) => {
                let original = e.to_string();
                (scraping_message(&original), scraping_details(&original))
            }
            ApiError::Configuration(_) => (
                "Service temporarily unavailable.",
                "Our summarization service is currently experiencing configuration issues. Please try again later or contact support if the problem persists.",
            ),
            ApiError::AiProvider { auth: true, .. } => (
                "Service temporarily unavailable.",
                "Our AI summarization service is currently experiencing issues. Please try again later or contact support if the problem persists.",
            ),
            ApiError::AiProvider { auth: false, .. } => (
                "Service temporarily unavailable.",
                "Our AI service is currently experiencing issues. Please try again later.",
            ),
            ApiError::Summarization(_) => (
                "Unable to generate summary.",
                "We encountered an issue while processing your article. Please try again with a different article or contact support if the problem persists.",
            ),
            ApiError::Internal(_) => (
                "Something went wrong.",
                "We encountered an unexpected issue. Please try again later or contact support if the problem persists.",
            ),
        };

        ErrorResponse {
            message: message.to_string(),
            details: details.to_string(),
        }
    }
}

fn scraping_message(original: &str) -> &'static str {
    if original.contains("Unable to extract sufficient content")
        || original.contains("paywall")
        || original.contains("JavaScript")
    {
        "Unable to access article content."
    } else if original.contains("Failed to connect") {
        "Unable to reach the article URL."
    } else if original.contains("Invalid URL") {
        "Invalid article URL."
    } else {
        "Unable to process the article."
    }
}

fn scraping_details(original: &str) -> &'static str {
    if original.contains("paywall") {
        "The article may be behind a paywall or require special access. Please try a different article or check if you can access it directly."
    } else if original.contains("Failed to connect") {
        "Please check the URL and try again. The website may be temporarily unavailable."
    } else if original.contains("Invalid URL") {
        "Please check that the URL is correct and points to a valid article."
    } else {
        "Please verify the article URL is accessible and try again, or contact support if the problem persists."
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(e) => error!(error = ?e, "Internal error"),
            ApiError::Summarization(e) => error!(error = ?e, "Summarization failed"),
            ApiError::AiProvider { auth, message } => {
                warn!(auth = *auth, message = %message, "AI provider error")
            }
            ApiError::Configuration(message) => warn!(message = %message, "AI provider not configured"),
            ApiError::Scraping(e) => warn!(error = %e, "Article scraping failed"),
            other => debug!(error = %other, status = %status, "Request rejected"),
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

/// Unparseable path ids are reported as missing resources.
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::NotFound
    }
}

impl From<SummarizeError> for ApiError {
    fn from(error: SummarizeError) -> Self {
        match error {
            SummarizeError::Provider { auth, message } => ApiError::AiProvider { auth, message },
            SummarizeError::NotConfigured(message) => ApiError::Configuration(message),
            SummarizeError::Failed(e) => ApiError::Summarization(e),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Internal(e) => ApiError::Internal(e),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}
