//! Article summarization through the configured LLM.

use openai_client::OpenAIError;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use super::models::{SummarizationResponse, Summary};
use super::parse::parse_summary_reply;
use super::prompt::build_summary_prompt;
use crate::common::utils::{compression_ratio, count_words};
use crate::domains::articles::Article;
use crate::kernel::BaseAI;

#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The provider rejected or failed the call.
    #[error("AI provider error: {message}")]
    Provider { auth: bool, message: String },

    /// No API key configured.
    #[error("AI provider is not configured: {0}")]
    NotConfigured(String),

    #[error("Failed to summarize the article.")]
    Failed(#[source] anyhow::Error),
}

impl SummarizeError {
    /// Classify a failed completion.
    fn from_completion_error(error: anyhow::Error) -> Self {
        match error.downcast::<OpenAIError>() {
            Ok(OpenAIError::Config(message)) => SummarizeError::NotConfigured(message),
            Ok(provider) => SummarizeError::Provider {
                auth: provider.is_auth_error(),
                message: provider.to_string(),
            },
            Err(other) => SummarizeError::Failed(other),
        }
    }
}

/// Summarizes article text with a single LLM call.
#[derive(Clone)]
pub struct Summarizer {
    ai: Arc<dyn BaseAI>,
}

impl Summarizer {
    pub fn new(ai: Arc<dyn BaseAI>) -> Self {
        Self { ai }
    }

    pub async fn summarize(
        &self,
        content: &str,
        title: &str,
    ) -> Result<SummarizationResponse, SummarizeError> {
        let original_word_count = count_words(content);
        let prompt = build_summary_prompt(content);

        let reply = self.ai.complete(&prompt).await.map_err(|e| {
            warn!(error = %e, "Summary completion failed");
            SummarizeError::from_completion_error(e)
        })?;

        let parsed = parse_summary_reply(&reply);
        let summary_word_count = count_words(&parsed.summary);

        debug!(
            original_words = original_word_count,
            summary_words = summary_word_count,
            key_points = parsed.key_points.len(),
            "Summary generated"
        );

        Ok(SummarizationResponse {
            article: Article {
                title: title.to_string(),
                content: content.to_string(),
                word_count: original_word_count,
            },
            summary: Summary {
                content: parsed.summary,
                key_points: parsed.key_points,
                word_count: summary_word_count,
                compression_ratio: compression_ratio(original_word_count, summary_word_count),
            },
        })
    }
}
