//! Function declarations for the four operational tools.
//!
//! Each tool takes exactly one required string field carrying the full
//! request detail; the model extracts it from the user's command.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::ToolName;

/// The single required parameter on every tool.
pub const REQUEST_DETAIL_FIELD: &str = "request_detail";

/// A function declaration as sent to the model.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDeclaration {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: ParameterSchema,
}

/// Object schema with string properties, the only shape we declare.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub properties: BTreeMap<&'static str, PropertySchema>,
    pub required: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub description: &'static str,
}

fn single_detail_parameter(description: &'static str) -> ParameterSchema {
    let mut properties = BTreeMap::new();
    properties.insert(
        REQUEST_DETAIL_FIELD,
        PropertySchema {
            schema_type: "string",
            description,
        },
    );
    ParameterSchema {
        schema_type: "object",
        properties,
        required: vec![REQUEST_DETAIL_FIELD],
    }
}

/// Tool description shown to the model. Phrased around operational
/// impact so the routing policy has something to reason over.
pub fn tool_description(tool: ToolName) -> &'static str {
    match tool {
        ToolName::PatientRegistration => {
            "Handles new patient registration, demographic updates, and insurance \
             eligibility verification. Entry point of the revenue cycle; determines \
             billing accuracy and privacy compliance."
        }
        ToolName::AppointmentManagement => {
            "Manages scheduling, modification, and cancellation of patient \
             appointments. Affects operational efficiency and the charge-capture KPI."
        }
        ToolName::MedicalRecordsAccess => {
            "Handles retrieval, update, and summarization of patient medical \
             history. Access is strictly audited and follows interoperability \
             standards."
        }
        ToolName::PharmacyLogistics => {
            "Manages prescriptions, drug information, stock levels, and dispensing. \
             Impacts supply-chain management."
        }
    }
}

fn detail_description(tool: ToolName) -> &'static str {
    match tool {
        ToolName::PatientRegistration => {
            "Full detail of the registration or demographic-data request."
        }
        ToolName::AppointmentManagement => {
            "Detail of the schedule request: doctor name, time, or cancellation."
        }
        ToolName::MedicalRecordsAccess => {
            "Detail of the clinical data being requested or accessed."
        }
        ToolName::PharmacyLogistics => "Drug name, dose, or stock/logistics question.",
    }
}

/// The four concrete declarations, in fixed order.
pub fn tool_declarations() -> Vec<FunctionDeclaration> {
    ToolName::all()
        .into_iter()
        .map(|tool| FunctionDeclaration {
            name: tool.as_wire_name(),
            description: tool_description(tool),
            parameters: single_detail_parameter(detail_description(tool)),
        })
        .collect()
}
