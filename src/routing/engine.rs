//! Maps a classifier result to a routed intent.

use crate::models::ToolName;

use super::client::{FunctionCall, IntentClassifier};
use super::schema::REQUEST_DETAIL_FIELD;
use super::RoutingError;

/// A successfully routed command: the tool, the detail the model
/// extracted, and the copy shown in the chat.
#[derive(Debug, Clone)]
pub struct RoutedIntent {
    pub tool: ToolName,
    pub request_detail: String,
    pub confirmation: String,
    pub compliance_note: String,
}

/// Classify a command and build the routed intent.
///
/// `Ok(None)` covers both "the model called nothing" and "the model
/// named a tool we do not declare" — either way the caller takes the
/// fallback path and opens no workspace.
pub async fn route_request(
    classifier: &dyn IntentClassifier,
    input: &str,
) -> Result<Option<RoutedIntent>, RoutingError> {
    let call = match classifier.classify(input).await? {
        Some(call) => call,
        None => return Ok(None),
    };

    let Some(tool) = ToolName::from_wire_name(&call.name) else {
        tracing::warn!(tool = %call.name, "model returned undeclared tool, falling back");
        return Ok(None);
    };

    Ok(Some(build_intent(tool, &call, input)))
}

fn build_intent(tool: ToolName, call: &FunctionCall, input: &str) -> RoutedIntent {
    // The model extracts the detail; fall back to the raw command when
    // the argument is missing or not a string.
    let request_detail = call
        .args
        .get(REQUEST_DETAIL_FIELD)
        .and_then(|v| v.as_str())
        .unwrap_or(input)
        .to_string();

    let (confirmation, compliance_note) = match tool {
        ToolName::PatientRegistration => (
            format!(
                "Registration service activated. Processing demographic update: \"{request_detail}\""
            ),
            "Privacy validation: demographic data locked and verified.".to_string(),
        ),
        ToolName::AppointmentManagement => (
            format!("Scheduling service activated. Managing time slots for: \"{request_detail}\""),
            "Audit trail: schedule change recorded for charge-capture KPI tracking.".to_string(),
        ),
        ToolName::MedicalRecordsAccess => (
            format!("Records gateway activated. Retrieving summary: \"{request_detail}\""),
            "Security notice: ePHI access recorded in the compliance audit log.".to_string(),
        ),
        ToolName::PharmacyLogistics => (
            format!("Pharmacy logistics system activated. Query: \"{request_detail}\""),
            "Verification: dose and drug interactions cross-checked against the safety database."
                .to_string(),
        ),
    };

    RoutedIntent {
        tool,
        request_detail,
        confirmation,
        compliance_note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::MockClassifier;

    #[tokio::test]
    async fn routes_each_declared_tool() {
        for tool in ToolName::all() {
            let mock = MockClassifier::tool(tool.as_wire_name(), "some detail");
            let intent = route_request(&mock, "command").await.unwrap().unwrap();
            assert_eq!(intent.tool, tool);
            assert_eq!(intent.request_detail, "some detail");
            assert!(intent.confirmation.contains("some detail"));
            assert!(!intent.compliance_note.is_empty());
        }
    }

    #[tokio::test]
    async fn no_call_yields_none() {
        let mock = MockClassifier::no_call();
        assert!(route_request(&mock, "what is the weather")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn undeclared_tool_yields_none() {
        let mock = MockClassifier::tool("google_search", "anything");
        assert!(route_request(&mock, "search").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_detail_falls_back_to_input() {
        let mock = MockClassifier::call(FunctionCall {
            name: "pharmacy_logistics".into(),
            args: serde_json::json!({}),
        });
        let intent = route_request(&mock, "check Ciprofloxacin stock")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(intent.request_detail, "check Ciprofloxacin stock");
    }

    #[tokio::test]
    async fn classifier_failure_propagates() {
        let mock = MockClassifier::failing();
        let err = route_request(&mock, "anything").await.unwrap_err();
        assert!(matches!(err, RoutingError::Api { status: 503, .. }));
    }
}
