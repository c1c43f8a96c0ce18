//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub workspace_open: bool,
}

/// `GET /api/health` — liveness check plus a hint of session state.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let workspace_open = ctx.core.read_session()?.workspace().is_some();

    Ok(Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        workspace_open,
    }))
}
