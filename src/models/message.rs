//! Chat turn model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Role, ToolName};

/// A single chat turn. `related_tool` is set on assistant turns that
/// confirmed a routed intent, so a client can highlight the matching
/// workspace next to the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_tool: Option<ToolName>,
}

impl ChatMessage {
    /// A turn authored by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            related_tool: None,
        }
    }

    /// An assistant turn, optionally tied to the tool it confirmed.
    pub fn assistant(content: impl Into<String>, related_tool: Option<ToolName>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: content.into(),
            related_tool,
        }
    }
}
