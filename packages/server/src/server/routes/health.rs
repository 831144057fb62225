use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use sqlx::PgPool;
use std::time::Duration;
use tracing::warn;

use crate::server::app::AppState;

const DB_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: DatabaseHealth,
    connection_pool: PoolMetrics,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DatabaseHealth {
    fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct PoolMetrics {
    size: u32,
    idle_connections: usize,
    max_connections: u32,
}

impl PoolMetrics {
    fn of(pool: &PgPool) -> Self {
        Self {
            size: pool.size(),
            idle_connections: pool.num_idle(),
            max_connections: pool.options().get_max_connections(),
        }
    }
}

/// `SELECT 1` with a timeout.
async fn probe_database(pool: &PgPool) -> DatabaseHealth {
    let error = match tokio::time::timeout(DB_PROBE_TIMEOUT, sqlx::query("SELECT 1").execute(pool))
        .await
    {
        Ok(Ok(_)) => None,
        Ok(Err(e)) => Some(format!("Query failed: {}", e)),
        Err(_) => {
            warn!("Health check database probe timed out");
            Some(format!("Query timeout (>{}s)", DB_PROBE_TIMEOUT.as_secs()))
        }
    };

    DatabaseHealth {
        status: if error.is_none() { "ok" } else { "error" },
        error,
    }
}

/// Liveness plus database reachability. 503 when the database probe fails.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = probe_database(&state.db_pool).await;
    let (code, status) = if database.is_ok() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        code,
        Json(HealthResponse {
            status,
            connection_pool: PoolMetrics::of(&state.db_pool),
            database,
        }),
    )
}
