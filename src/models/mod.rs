//! Shared data types for the routing assistant.
//!
//! Each module corresponds to one session-level entity. Desk-specific
//! types (forms, confirmations, inventory rows) live with their desk
//! in `crate::desks`.

pub mod enums;
pub mod log;
pub mod message;

pub use enums::{LogStage, Role, ToolName};
pub use log::LogEntry;
pub use message::ChatMessage;
