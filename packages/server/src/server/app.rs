//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::domains::articles::ArticleScraper;
use crate::domains::auth::JwtService;
use crate::kernel::{OpenAiChat, ServerDeps};
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    api_docs_health_handler, api_docs_json_handler, api_docs_yaml_handler, get_summary_handler,
    health_handler, list_summaries_handler, login_handler, me_handler, register_handler,
    save_summary_handler, showcase_handler, summarize_text_handler, summarize_url_handler,
    unsave_summary_handler, user_stats_handler, ApiDocs,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
    pub jwt_service: Arc<JwtService>,
    pub api_docs: Arc<ApiDocs>,
}

impl AppState {
    pub fn new(server_deps: ServerDeps) -> Self {
        Self {
            db_pool: server_deps.db_pool.clone(),
            jwt_service: server_deps.jwt_service.clone(),
            server_deps: Arc::new(server_deps),
            api_docs: Arc::new(ApiDocs::new()),
        }
    }
}

/// Wire production services from configuration.
pub fn build_server_deps(pool: PgPool, config: &Config) -> Result<ServerDeps> {
    let ai = OpenAiChat::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        config.openai_model.clone(),
        config.openai_temperature,
    )?;
    if ai.is_configured() {
        info!(model = %ai.model(), "AI provider configured");
    } else {
        warn!("OPENAI_API_KEY not set; summarize endpoints will answer 503");
    }

    let scraper = ArticleScraper::new()?;
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt_secret,
        config.jwt_issuer.clone(),
    ));

    Ok(ServerDeps::new(
        pool,
        Arc::new(ai),
        Arc::new(scraper),
        jwt_service,
    ))
}

/// CORS for the browser client. An empty list allows any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    let jwt_service_for_middleware = state.jwt_service.clone();

    Router::new()
        // Summarization (authentication optional)
        .route("/api/summarize/text", post(summarize_text_handler))
        .route("/api/summarize/url", post(summarize_url_handler))
        // History and stats (authentication required)
        .route("/api/users/me/summaries", get(list_summaries_handler))
        .route("/api/users/me/summaries/:id", get(get_summary_handler))
        .route(
            "/api/users/me/summaries/:id/save",
            post(save_summary_handler).delete(unsave_summary_handler),
        )
        .route("/api/users/me/stats", get(user_stats_handler))
        // Public showcase
        .route("/api/summaries/showcase", get(showcase_handler))
        // Accounts
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/me", get(me_handler))
        // API documentation
        .route("/v3/api-docs", get(api_docs_json_handler))
        .route("/v3/api-docs/health", get(api_docs_health_handler))
        .route("/openapi.yaml", get(api_docs_yaml_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service_for_middleware.clone(), req, next)
        })) // JWT authentication
        .layer(Extension(state)) // Add shared state (must be after middlewares that need it)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
