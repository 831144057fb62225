//! `BaseAI` backed by the OpenAI-compatible chat completion client.

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError};
use std::time::Duration;
use tracing::debug;

use super::BaseAI;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat completion adapter.
///
/// The API key is optional so the server can start without one; every
/// completion then fails with [`OpenAIError::Config`].
pub struct OpenAiChat {
    client: Option<OpenAIClient>,
    model: String,
    temperature: f32,
}

impl OpenAiChat {
    pub fn new(
        api_key: Option<String>,
        base_url: &str,
        model: impl Into<String>,
        temperature: f32,
    ) -> Result<Self> {
        let client = match api_key.filter(|k| !k.trim().is_empty()) {
            Some(key) => {
                let http_client = reqwest::Client::builder()
                    .timeout(REQUEST_TIMEOUT)
                    .build()
                    .context("Failed to create OpenAI HTTP client")?;
                Some(
                    OpenAIClient::new(key)
                        .with_base_url(base_url)
                        .with_http_client(http_client),
                )
            }
            None => None,
        };

        Ok(Self {
            client,
            model: model.into(),
            temperature,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl BaseAI for OpenAiChat {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| OpenAIError::Config("OPENAI_API_KEY is not set".into()))?;

        let mut request = ChatRequest::new(self.model.as_str()).message(Message::user(prompt));
        if !ChatRequest::is_reasoning_model(&self.model) {
            request = request.temperature(self.temperature);
        }

        let response = client.chat_completion(request).await?;
        if let Some(usage) = &response.usage {
            debug!(
                model = %self.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Summary completion usage"
            );
        }
        Ok(response.content)
    }
}
