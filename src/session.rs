//! Chat session — turns, processing log, and the open workspace.
//!
//! Builds on top of:
//! - `models::ChatMessage` / `models::LogEntry` (data structs)
//! - `routing::RoutedIntent` (what the classifier produced)
//!
//! This module adds:
//! - The per-session containers (both append-only)
//! - The canned fallback / apology turns
//! - Prompt suggestions for an empty session
//! - The input preview helper used by the INPUT log entry

use serde::{Deserialize, Serialize};

use crate::models::{ChatMessage, LogEntry, LogStage, ToolName};

/// Maximum characters of user input echoed into the INPUT log entry.
const INPUT_PREVIEW_CHARS: usize = 30;

/// Shown when the classifier returns no function call (or an
/// unrecognized tool name).
pub const FALLBACK_MESSAGE: &str = "Sorry, this request does not fall under the four core \
     operational categories (registration, appointments, medical records, pharmacy). \
     Please contact the general information desk.";

/// Shown when the remote classification call itself fails.
pub const APOLOGY_MESSAGE: &str =
    "A system error occurred while processing your request. Please try again.";

// ═══════════════════════════════════════════
// Session state
// ═══════════════════════════════════════════

/// In-memory state for one assistant session. Lives for the lifetime
/// of the process; there is no persistence layer behind it.
#[derive(Debug, Default)]
pub struct ChatSession {
    turns: Vec<ChatMessage>,
    log: Vec<LogEntry>,
    open_workspace: Option<Workspace>,
}

/// The currently open mock workspace, with the request detail the
/// classifier extracted (used to pre-fill the desk form).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub tool: ToolName,
    pub request_detail: String,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Chat turns ──────────────────────────────────────────

    /// Append a turn. Returns a clone for the API response.
    pub fn push_turn(&mut self, turn: ChatMessage) -> ChatMessage {
        self.turns.push(turn.clone());
        turn
    }

    pub fn turns(&self) -> &[ChatMessage] {
        &self.turns
    }

    // ── Processing log ──────────────────────────────────────

    /// Append a processing-log entry.
    pub fn log(&mut self, stage: LogStage, message: impl Into<String>) {
        let entry = LogEntry::new(stage, message);
        tracing::debug!(stage = %entry.stage, message = %entry.message, "session log");
        self.log.push(entry);
    }

    pub fn log_entries(&self) -> &[LogEntry] {
        &self.log
    }

    // ── Workspace ───────────────────────────────────────────

    /// Open the workspace for a routed tool, replacing any open one.
    /// At most one workspace is ever open.
    pub fn open_workspace(&mut self, tool: ToolName, request_detail: impl Into<String>) {
        self.open_workspace = Some(Workspace {
            tool,
            request_detail: request_detail.into(),
        });
    }

    /// Close the open workspace. Returns whether one was open.
    pub fn close_workspace(&mut self) -> bool {
        self.open_workspace.take().is_some()
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        self.open_workspace.as_ref()
    }
}

// ═══════════════════════════════════════════
// Input preview
// ═══════════════════════════════════════════

/// Truncate user input for the INPUT log line, handling UTF-8
/// boundaries correctly. Appends "..." only when something was cut.
pub fn input_preview(input: &str) -> String {
    let trimmed = input.trim();
    let boundary = trimmed
        .char_indices()
        .nth(INPUT_PREVIEW_CHARS)
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    if boundary >= trimmed.len() {
        trimmed.to_string()
    } else {
        format!("{}...", &trimmed[..boundary])
    }
}

// ═══════════════════════════════════════════
// Prompt suggestions
// ═══════════════════════════════════════════

/// Prompt suggestion for an empty session, one per operational area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSuggestion {
    pub text: String,
    pub category: String,
}

/// Default prompt suggestions shown before the first command.
pub fn default_prompt_suggestions() -> Vec<PromptSuggestion> {
    vec![
        PromptSuggestion {
            text: "Patient Sinta wants to cancel all appointments with Dr. Andi this month.".into(),
            category: "appointments".into(),
        },
        PromptSuggestion {
            text: "Update insurance details for patient Bima, he switched to the national plan.".into(),
            category: "registration".into(),
        },
        PromptSuggestion {
            text: "Check warehouse stock of Ciprofloxacin 500mg.".into(),
            category: "pharmacy".into(),
        },
        PromptSuggestion {
            text: "I need a medical record summary for patient ID-998 from cardiology.".into(),
            category: "records".into(),
        },
    ]
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
