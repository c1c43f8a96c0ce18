//! Session state endpoints — transcript, processing log, suggestions,
//! and workspace control.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{ChatMessage, LogEntry};
use crate::session::{default_prompt_suggestions, PromptSuggestion, Workspace};

#[derive(Serialize)]
pub struct SessionResponse {
    pub turns: Vec<ChatMessage>,
    pub workspace: Option<Workspace>,
}

/// `GET /api/session` — full transcript plus the open workspace.
pub async fn snapshot(State(ctx): State<ApiContext>) -> Result<Json<SessionResponse>, ApiError> {
    let session = ctx.core.read_session()?;
    Ok(Json(SessionResponse {
        turns: session.turns().to_vec(),
        workspace: session.workspace().cloned(),
    }))
}

#[derive(Serialize)]
pub struct LogResponse {
    pub entries: Vec<LogEntry>,
}

/// `GET /api/session/log` — processing log, oldest first.
pub async fn log(State(ctx): State<ApiContext>) -> Result<Json<LogResponse>, ApiError> {
    let session = ctx.core.read_session()?;
    Ok(Json(LogResponse {
        entries: session.log_entries().to_vec(),
    }))
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<PromptSuggestion>,
}

/// `GET /api/session/suggestions` — starter prompts, one per desk.
pub async fn suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: default_prompt_suggestions(),
    })
}

#[derive(Serialize)]
pub struct CloseWorkspaceResponse {
    pub closed: bool,
}

/// `POST /api/session/workspace/close` — close the open workspace.
/// Idempotent: closing when nothing is open reports `closed: false`.
pub async fn close_workspace(
    State(ctx): State<ApiContext>,
) -> Result<Json<CloseWorkspaceResponse>, ApiError> {
    let mut session = ctx.core.write_session()?;
    Ok(Json(CloseWorkspaceResponse {
        closed: session.close_workspace(),
    }))
}
