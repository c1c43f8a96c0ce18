//! Free-text command endpoint — the core of the assistant.
//!
//! A command makes one round trip: transcript + INPUT/ANALYSIS log
//! entries, one classification call, then either a routed confirmation
//! (workspace opens), the fallback turn, or the apology turn when the
//! remote call fails. Classification failure is not an HTTP error —
//! the turn is recorded and the client gets a normal response.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{ChatMessage, LogStage};
use crate::routing::route_request;
use crate::session::{input_preview, Workspace, APOLOGY_MESSAGE, FALLBACK_MESSAGE};

/// Commands longer than this are rejected before any state changes.
const MAX_COMMAND_CHARS: usize = 2000;

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub command: String,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub user_turn: ChatMessage,
    pub assistant_turn: ChatMessage,
    /// Present only when the command was routed to a desk.
    pub workspace: Option<Workspace>,
}

/// `POST /api/command` — classify a command and route it.
pub async fn submit(
    State(ctx): State<ApiContext>,
    Json(req): Json<CommandRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = req.command.trim().to_string();
    if command.is_empty() {
        return Err(ApiError::BadRequest("Command must not be empty".into()));
    }
    if command.chars().count() > MAX_COMMAND_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Command exceeds {MAX_COMMAND_CHARS} characters"
        )));
    }

    // Record the turn and the first two log stages before the remote
    // call, so they are visible even if classification fails.
    let user_turn = {
        let mut session = ctx.core.write_session()?;
        session.log(
            LogStage::Input,
            format!("Request received: \"{}\"", input_preview(&command)),
        );
        session.log(LogStage::Analysis, "Analyzing intent with the routing model...");
        session.push_turn(ChatMessage::user(&command))
    };

    // One outstanding classification call at a time.
    let routed = {
        let _gate = ctx.core.acquire_routing_gate().await;
        route_request(ctx.core.classifier(), &command).await
    };

    let (assistant_turn, workspace) = match routed {
        Err(err) => {
            tracing::error!(%err, "classification failed");
            let mut session = ctx.core.write_session()?;
            session.log(LogStage::Completion, "Error processing request.");
            let turn = session.push_turn(ChatMessage::assistant(APOLOGY_MESSAGE, None));
            (turn, None)
        }
        Ok(None) => {
            let mut session = ctx.core.write_session()?;
            session.log(
                LogStage::Routing,
                "No matching operational category. Using fallback response.",
            );
            session.log(LogStage::Completion, "Fallback response delivered.");
            let turn = session.push_turn(ChatMessage::assistant(FALLBACK_MESSAGE, None));
            (turn, None)
        }
        Ok(Some(intent)) => {
            {
                let mut session = ctx.core.write_session()?;
                session.log(
                    LogStage::Routing,
                    format!(
                        "Intent classified: {}. Activating service workspace.",
                        intent.tool
                    ),
                );
            }

            // Brief pause so the log reads as a sequence. Session lock
            // is released across the sleep.
            let pause = ctx.core.config.routing_pause_ms;
            if pause > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(pause)).await;
            }

            let mut session = ctx.core.write_session()?;
            session.log(
                LogStage::Execution,
                format!("Dispatching to the {} desk.", intent.tool),
            );
            session.open_workspace(intent.tool, intent.request_detail.clone());
            session.log(LogStage::Completion, intent.compliance_note.clone());
            let turn =
                session.push_turn(ChatMessage::assistant(&intent.confirmation, Some(intent.tool)));
            let workspace = session.workspace().cloned();
            (turn, workspace)
        }
    };

    Ok(Json(CommandResponse {
        user_turn,
        assistant_turn,
        workspace,
    }))
}
