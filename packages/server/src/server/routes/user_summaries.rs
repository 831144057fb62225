use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::SummaryId;
use crate::domains::summaries::{
    get_user_summary, list_user_summaries, toggle_saved, UserSummaryDto,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummariesQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub saved: Option<bool>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummariesResponse {
    pub summaries: Vec<UserSummaryDto>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_count: i64,
}

pub async fn list_summaries_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    query: Result<Query<ListSummariesQuery>, QueryRejection>,
) -> Result<Json<UserSummariesResponse>, ApiError> {
    let Query(query) = query?;

    let page = list_user_summaries(
        user.user_id,
        query.page,
        query.size,
        query.saved,
        query.sort_by.as_deref(),
        query.sort_order.as_deref(),
        &state.server_deps,
    )
    .await?;

    Ok(Json(UserSummariesResponse {
        current_page: page.page,
        total_pages: page.total_pages(),
        total_count: page.total,
        summaries: page.items,
    }))
}

pub async fn get_summary_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    id: Result<Path<SummaryId>, PathRejection>,
) -> Result<Json<UserSummaryDto>, ApiError> {
    let Path(id) = id?;
    get_user_summary(user.user_id, id, &state.server_deps)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn save_summary_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    id: Result<Path<SummaryId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    set_saved(state, user, id, true).await
}

pub async fn unsave_summary_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    id: Result<Path<SummaryId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    set_saved(state, user, id, false).await
}

async fn set_saved(
    state: AppState,
    user: AuthUser,
    id: Result<Path<SummaryId>, PathRejection>,
    saved: bool,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    if toggle_saved(user.user_id, id, saved, &state.server_deps).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}
