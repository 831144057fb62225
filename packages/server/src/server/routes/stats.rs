use axum::{extract::Extension, Json};

use crate::domains::summaries::{get_user_stats, UserStats};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

pub async fn user_stats_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
) -> Result<Json<UserStats>, ApiError> {
    let stats = get_user_stats(user.user_id, &state.server_deps).await?;
    Ok(Json(stats))
}
