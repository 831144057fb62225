//! Article fetching over HTTP.
//!
//! Fetches a page with a browser-like client and hands the HTML to
//! [`extract_article`]. No JavaScript rendering; pages that build their
//! content client-side usually end up as [`ScrapeError::InsufficientContent`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::errors::ScrapeError;
use super::extract::extract_article;
use super::models::Article;
use crate::kernel::BaseArticleScraper;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 5;

/// Fetches article pages and extracts their main text.
#[derive(Clone)]
pub struct ArticleScraper {
    client: reqwest::Client,
}

impl ArticleScraper {
    pub fn new() -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US,en;q=0.5"),
        );

        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    async fn fetch_html(&self, url: &Url) -> Result<String, ScrapeError> {
        let connection_error = |reason: String| ScrapeError::Connection {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| connection_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Article fetch returned non-success status");
            return Err(connection_error(format!("HTTP {}", status)));
        }

        if let Some(content_type) = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_html_content_type(content_type) {
                return Err(connection_error(format!(
                    "unsupported content type {}",
                    content_type
                )));
            }
        }

        response
            .text()
            .await
            .map_err(|e| connection_error(e.to_string()))
    }
}

#[async_trait]
impl BaseArticleScraper for ArticleScraper {
    async fn scrape(&self, url: &str) -> Result<Article, ScrapeError> {
        let url = validate_url(url)?;
        debug!(url = %url, "Fetching article");

        let html = self.fetch_html(&url).await?;
        let article = extract_article(&html)?;

        info!(
            url = %url,
            title = %article.title,
            word_count = article.word_count,
            "Article extracted"
        );
        Ok(article)
    }
}

/// Accept absolute http(s) URLs with a host.
pub fn validate_url(raw: &str) -> Result<Url, ScrapeError> {
    let trimmed = raw.trim();
    let invalid = || ScrapeError::InvalidUrl {
        url: trimmed.to_string(),
    };

    let url = Url::parse(trimmed).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(invalid()),
    }
}

fn is_html_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime.starts_with("text/") || mime == "application/xml" || mime.ends_with("+xml")
}
