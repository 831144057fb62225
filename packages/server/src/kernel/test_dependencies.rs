// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::OpenAIError;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

use super::{BaseAI, BaseArticleScraper, ServerDeps};
use crate::common::utils::count_words;
use crate::domains::articles::{Article, ScrapeError};
use crate::domains::auth::JwtService;

// =============================================================================
// Mock AI (Generic LLM capabilities)
// =============================================================================

enum MockReply {
    Text(String),
    Error(OpenAIError),
}

pub struct MockAI {
    responses: Arc<Mutex<Vec<MockReply>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockReply::Text(response.into()));
        self
    }

    /// Add a JSON response to the queue (will be serialized)
    pub fn with_json_response<T: serde::Serialize>(self, data: &T) -> Self {
        let json = serde_json::to_string(data).expect("Failed to serialize mock response");
        self.with_response(json)
    }

    /// Queue a provider failure
    pub fn with_error(self, error: OpenAIError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockReply::Error(error));
        self
    }

    /// Get all prompts that were sent to the AI
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last prompt sent to the AI
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Check if a prompt containing the given text was sent
    pub fn was_called_with(&self, text: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.contains(text))
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(r#"{"summary": "Mock summary.", "keyPoints": ["Mock point"]}"#.to_string());
        }
        match responses.remove(0) {
            MockReply::Text(text) => Ok(text),
            MockReply::Error(error) => Err(error.into()),
        }
    }
}

// =============================================================================
// Mock Article Scraper
// =============================================================================

pub struct MockArticleScraper {
    responses: Arc<Mutex<Vec<std::result::Result<Article, ScrapeError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockArticleScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl MockArticleScraper {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue an article with the given title and body
    pub fn with_article(self, title: &str, content: &str) -> Self {
        let article = Article {
            title: title.to_string(),
            content: content.to_string(),
            word_count: count_words(content),
        };
        self.responses.lock().unwrap().push(Ok(article));
        self
    }

    /// Queue a scrape failure
    pub fn with_error(self, error: ScrapeError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// URLs that were requested
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseArticleScraper for MockArticleScraper {
    async fn scrape(&self, url: &str) -> std::result::Result<Article, ScrapeError> {
        self.calls.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            return responses.remove(0);
        }

        let content = "This is mock article content used in tests. It has enough words to be summarized.";
        Ok(Article {
            title: "Mock Article".to_string(),
            content: content.to_string(),
            word_count: count_words(content),
        })
    }
}

// =============================================================================
// Test Dependencies Container
// =============================================================================

/// Builder for ServerDeps backed by mocks
pub struct TestDependencies {
    pub ai: Arc<dyn BaseAI>,
    pub scraper: Arc<dyn BaseArticleScraper>,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            ai: Arc::new(MockAI::new()),
            scraper: Arc::new(MockArticleScraper::new()),
        }
    }

    /// Set a mock AI
    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    /// Share a mock AI the test keeps a handle to
    pub fn shared_ai(mut self, ai: Arc<MockAI>) -> Self {
        self.ai = ai;
        self
    }

    /// Set a mock article scraper
    pub fn mock_scraper(mut self, scraper: MockArticleScraper) -> Self {
        self.scraper = Arc::new(scraper);
        self
    }

    /// Share a mock scraper the test keeps a handle to
    pub fn shared_scraper(mut self, scraper: Arc<MockArticleScraper>) -> Self {
        self.scraper = scraper;
        self
    }

    /// Convert into ServerDeps for testing
    pub fn into_server_deps(self, db_pool: PgPool, jwt_service: Arc<JwtService>) -> ServerDeps {
        ServerDeps::new(db_pool, self.ai, self.scraper, jwt_service)
    }
}
