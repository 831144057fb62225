//! OpenAPI document served from the embedded `static/openapi.yaml`.

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rust_embed::RustEmbed;
use serde_json::json;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::server::app::AppState;
use crate::server::error::ApiError;

pub const OPENAPI_FILE: &str = "openapi.yaml";

const NOT_FOUND_MESSAGE: &str = "OpenAPI specification file not found";

#[derive(RustEmbed)]
#[folder = "static/"]
pub struct StaticAssets;

/// Embedded OpenAPI document with a lazily built JSON rendering.
#[derive(Default)]
pub struct ApiDocs {
    json: OnceCell<String>,
}

impl ApiDocs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw YAML, or `None` if the asset was not embedded.
    pub fn yaml() -> Option<String> {
        StaticAssets::get(OPENAPI_FILE).map(|file| String::from_utf8_lossy(&file.data).into_owned())
    }

    /// JSON rendering, converted once and cached.
    pub async fn json(&self) -> Result<Option<&str>> {
        let Some(yaml) = Self::yaml() else {
            return Ok(None);
        };

        let json = self
            .json
            .get_or_try_init(|| async move { yaml_to_json(&yaml) })
            .await?;
        Ok(Some(json.as_str()))
    }
}

pub fn yaml_to_json(yaml: &str) -> Result<String> {
    let value: serde_json::Value =
        serde_yaml::from_str(yaml).context("OpenAPI document is not valid YAML")?;
    serde_json::to_string(&value).context("Failed to render OpenAPI document as JSON")
}

pub async fn api_docs_json_handler(
    Extension(state): Extension<AppState>,
) -> Result<Response, ApiError> {
    match state.api_docs.json().await? {
        Some(json) => {
            debug!(size = json.len(), "Serving OpenAPI document as JSON");
            Ok((
                [(header::CONTENT_TYPE, "application/json")],
                json.to_string(),
            )
                .into_response())
        }
        None => Ok((StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()),
    }
}

pub async fn api_docs_yaml_handler() -> Response {
    match ApiDocs::yaml() {
        Some(yaml) => ([(header::CONTENT_TYPE, "application/yaml")], yaml).into_response(),
        None => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
    }
}

pub async fn api_docs_health_handler() -> (StatusCode, Json<serde_json::Value>) {
    if ApiDocs::yaml().is_some() {
        (
            StatusCode::OK,
            Json(json!({"status": "UP", "openapi": "available"})),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "DOWN", "openapi": "missing"})),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_document_is_present() {
        let yaml = ApiDocs::yaml().unwrap();
        assert!(yaml.contains("openapi:"));
    }

    #[tokio::test]
    async fn test_json_conversion_is_cached() {
        let docs = ApiDocs::new();
        let first = docs.json().await.unwrap().unwrap().to_string();
        let second = docs.json().await.unwrap().unwrap();
        assert_eq!(first, second);

        let value: serde_json::Value = serde_json::from_str(&first).unwrap();
        assert!(value["paths"]["/api/summarize/text"].is_object());
    }

    #[test]
    fn test_yaml_to_json() {
        let json = yaml_to_json("a: 1\nb:\n  - x\n  - y\n").unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&json).unwrap(),
            json!({"a": 1, "b": ["x", "y"]})
        );
        assert!(yaml_to_json("a: [unclosed").is_err());
    }
}
