// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Prompting and reply parsing live in domains::summarization.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseArticleScraper)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::articles::{Article, ScrapeError};

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response).
    ///
    /// Provider failures are returned as `openai_client::OpenAIError` inside
    /// the `anyhow::Error` so callers can classify them.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

// =============================================================================
// Article Scraper Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseArticleScraper: Send + Sync {
    /// Fetch a URL and extract its main article text.
    async fn scrape(&self, url: &str) -> std::result::Result<Article, ScrapeError>;
}
