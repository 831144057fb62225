use axum::{
    extract::rejection::QueryRejection,
    extract::{Extension, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domains::summaries::{showcase_page, ShowcaseSummaryDto};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ShowcaseQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseResponse {
    pub summaries: Vec<ShowcaseSummaryDto>,
    pub current_page: i64,
    pub total_pages: i64,
}

/// Public showcase; no authentication and no user data.
pub async fn showcase_handler(
    Extension(state): Extension<AppState>,
    query: Result<Query<ShowcaseQuery>, QueryRejection>,
) -> Result<Json<ShowcaseResponse>, ApiError> {
    let Query(query) = query?;

    let page = showcase_page(
        query.page,
        query.size,
        query.category.as_deref(),
        &state.server_deps,
    )
    .await?;

    Ok(Json(ShowcaseResponse {
        current_page: page.page,
        total_pages: page.total_pages(),
        summaries: page.items,
    }))
}
