use thiserror::Error;

/// Why an article could not be acquired.
///
/// The messages are matched on when building user-facing errors, so keep
/// their leading phrases stable.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    #[error("Failed to connect to the URL: {url} ({reason})")]
    Connection { url: String, reason: String },

    #[error("Unable to extract sufficient content from the URL. The article may be behind a paywall or require JavaScript.")]
    InsufficientContent,
}
