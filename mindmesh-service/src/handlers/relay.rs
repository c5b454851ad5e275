use crate::dtos::{MindmapRequest, OrganizeRequest};
use crate::services::relay::{self, RelayError};
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Organize free-form text into categories and connections.
///
/// The model's reply is relayed verbatim; any failure collapses to a
/// generic 500 with the cause written to the operational log only.
pub async fn organize(
    State(state): State<AppState>,
    Json(req): Json<OrganizeRequest>,
) -> impl IntoResponse {
    match relay::organize(state.text_provider.as_ref(), &req.text).await {
        Ok(value) => (StatusCode::OK, Json(value)),
        Err(err) => {
            log_failure("/organize", &err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Processing failed" })),
            )
        }
    }
}

/// Convert organized data into a mind-map node tree.
pub async fn mindmap(
    State(state): State<AppState>,
    Json(req): Json<MindmapRequest>,
) -> impl IntoResponse {
    match relay::mindmap(state.text_provider.as_ref(), &req.structured).await {
        Ok(value) => (StatusCode::OK, Json(value)),
        Err(err) => {
            log_failure("/mindmap", &err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Mind map generation failed" })),
            )
        }
    }
}

fn log_failure(endpoint: &str, err: &RelayError) {
    match err {
        RelayError::Provider(e) => {
            tracing::error!(endpoint, error = %e, "Generation request failed")
        }
        RelayError::MalformedOutput(e) => {
            tracing::error!(endpoint, error = %e, "Model returned non-JSON output")
        }
    }
}
