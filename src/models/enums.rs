//! Core enums: tool names, chat roles, processing-log stages.

use serde::{Deserialize, Serialize};

/// The four operational tools the classifier may route to.
///
/// Serializes to the wire name used in the function declarations
/// (`patient_registration`, ...). A tool name returned by the model
/// that does not match any variant is treated as "no routing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    PatientRegistration,
    AppointmentManagement,
    MedicalRecordsAccess,
    PharmacyLogistics,
}

impl ToolName {
    /// Wire name as declared to the model.
    pub fn as_wire_name(&self) -> &'static str {
        match self {
            Self::PatientRegistration => "patient_registration",
            Self::AppointmentManagement => "appointment_management",
            Self::MedicalRecordsAccess => "medical_records_access",
            Self::PharmacyLogistics => "pharmacy_logistics",
        }
    }

    /// Parse a wire name from a model function call.
    /// Unknown names yield `None` so callers fall back gracefully.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "patient_registration" => Some(Self::PatientRegistration),
            "appointment_management" => Some(Self::AppointmentManagement),
            "medical_records_access" => Some(Self::MedicalRecordsAccess),
            "pharmacy_logistics" => Some(Self::PharmacyLogistics),
            _ => None,
        }
    }

    /// All tools, in declaration order.
    pub fn all() -> [ToolName; 4] {
        [
            Self::PatientRegistration,
            Self::AppointmentManagement,
            Self::MedicalRecordsAccess,
            Self::PharmacyLogistics,
        ]
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire_name())
    }
}

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// Stages of the processing log, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogStage {
    Input,
    Analysis,
    Routing,
    Execution,
    Completion,
}

impl LogStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "INPUT",
            Self::Analysis => "ANALYSIS",
            Self::Routing => "ROUTING",
            Self::Execution => "EXECUTION",
            Self::Completion => "COMPLETION",
        }
    }
}

impl std::fmt::Display for LogStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
