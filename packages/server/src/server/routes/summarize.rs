//! Summarization endpoints. Authentication is optional; signed-in callers
//! get the result stored in their history.

use axum::{extract::rejection::JsonRejection, extract::Extension, Json};
use serde::Deserialize;
use tracing::warn;

use crate::common::utils::truncate_chars;
use crate::domains::summaries::create_user_summary;
use crate::domains::summarization::{SummarizationResponse, Summarizer};
use crate::kernel::ServerDeps;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

/// Characters of pasted text used as the title when none is given.
const TEXT_TITLE_CHARS: usize = 100;

#[derive(Debug, Deserialize)]
pub struct SummarizeTextRequest {
    pub content: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeUrlRequest {
    pub url: Option<String>,
}

pub async fn summarize_text_handler(
    Extension(state): Extension<AppState>,
    auth_user: Option<AuthUser>,
    payload: Result<Json<SummarizeTextRequest>, JsonRejection>,
) -> Result<Json<SummarizationResponse>, ApiError> {
    let Json(request) = payload?;
    let content = request
        .content
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Content is required.".to_string()))?;

    let title = request
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| truncate_chars(&content, TEXT_TITLE_CHARS).to_string());

    let deps = &state.server_deps;
    let response = Summarizer::new(deps.ai.clone())
        .summarize(&content, &title)
        .await?;

    store_for_user(auth_user.as_ref(), &response, &content, deps).await;
    Ok(Json(response))
}

pub async fn summarize_url_handler(
    Extension(state): Extension<AppState>,
    auth_user: Option<AuthUser>,
    payload: Result<Json<SummarizeUrlRequest>, JsonRejection>,
) -> Result<Json<SummarizationResponse>, ApiError> {
    let Json(request) = payload?;
    let url = request
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::BadRequest("URL is required.".to_string()))?;

    let deps = &state.server_deps;
    let article = deps.scraper.scrape(&url).await?;
    let response = Summarizer::new(deps.ai.clone())
        .summarize(&article.content, &article.title)
        .await?;

    store_for_user(auth_user.as_ref(), &response, &article.content, deps).await;
    Ok(Json(response))
}

/// Persist for signed-in callers. The summary is returned even if storing fails.
async fn store_for_user(
    auth_user: Option<&AuthUser>,
    response: &SummarizationResponse,
    original_content: &str,
    deps: &ServerDeps,
) {
    let Some(user) = auth_user else {
        return;
    };

    if let Err(e) = create_user_summary(user.user_id, response, original_content, deps).await {
        warn!(user_id = %user.user_id, error = %e, "Failed to store user summary");
    }
}
