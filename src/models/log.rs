//! Append-only processing-log entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::LogStage;

/// One line of the processing log shown alongside the chat.
/// Entries are only ever appended; nothing edits or removes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub stage: LogStage,
    pub message: String,
}

impl LogEntry {
    pub fn new(stage: LogStage, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            stage,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_get_unique_ids() {
        let a = LogEntry::new(LogStage::Input, "one");
        let b = LogEntry::new(LogStage::Input, "one");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn entry_serializes_stage_label() {
        let entry = LogEntry::new(LogStage::Routing, "Intent classified");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["stage"], "ROUTING");
        assert_eq!(json["message"], "Intent classified");
    }
}
