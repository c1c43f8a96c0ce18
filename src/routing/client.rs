//! Classifier clients: the production `generateContent` HTTP client
//! and a mock for tests.
//!
//! The hosted model is spoken to directly over its JSON wire format —
//! no vendor SDK. The request carries the system instruction, the four
//! function declarations, and a low temperature for deterministic
//! routing; the response is scanned for the first function call.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::prompt::SYSTEM_INSTRUCTION;
use super::schema::{tool_declarations, FunctionDeclaration};
use super::RoutingError;
use crate::config::Config;

/// Temperature for routing calls. Low for deterministic classification.
const ROUTING_TEMPERATURE: f32 = 0.1;

/// A function call returned by the model: wire-level tool name plus
/// the raw argument object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: serde_json::Value,
}

/// Seam between the routing engine and the hosted model.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Classify a command. `Ok(None)` means the model chose not to
    /// call any tool (out-of-scope request).
    async fn classify(&self, input: &str) -> Result<Option<FunctionCall>, RoutingError>;
}

// ═══════════════════════════════════════════
// Wire types (generateContent)
// ═══════════════════════════════════════════

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    system_instruction: RequestContent<'a>,
    tools: Vec<ToolBundle>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolBundle {
    function_declarations: Vec<FunctionDeclaration>,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    function_call: Option<FunctionCall>,
}

// ═══════════════════════════════════════════
// Production client
// ═══════════════════════════════════════════

/// HTTP client for the hosted `generateContent` endpoint.
#[derive(Debug)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Build from config. Fails fast when the API key is absent so no
    /// call is ever attempted without a credential.
    pub fn from_config(config: &Config) -> Result<Self, RoutingError> {
        if config.api_key.trim().is_empty() {
            return Err(RoutingError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| RoutingError::Http(e.to_string()))?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Scan candidate parts for the first function call.
    fn extract_function_call(response: GenerateContentResponse) -> Option<FunctionCall> {
        response
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.function_call)
    }
}

#[async_trait]
impl IntentClassifier for GeminiClient {
    async fn classify(&self, input: &str) -> Result<Option<FunctionCall>, RoutingError> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: Some("user"),
                parts: vec![RequestPart { text: input }],
            }],
            system_instruction: RequestContent {
                role: None,
                parts: vec![RequestPart {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            tools: vec![ToolBundle {
                function_declarations: tool_declarations(),
            }],
            generation_config: GenerationConfig {
                temperature: ROUTING_TEMPERATURE,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Http("Classification request timed out".into())
                } else {
                    RoutingError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| RoutingError::ResponseParsing(e.to_string()))?;

        Ok(Self::extract_function_call(parsed))
    }
}

// ═══════════════════════════════════════════
// Mock classifier
// ═══════════════════════════════════════════

/// Mock classifier for tests — returns a configured outcome.
pub struct MockClassifier {
    outcome: MockOutcome,
}

enum MockOutcome {
    Call(FunctionCall),
    NoCall,
    Failure,
}

impl MockClassifier {
    /// Always returns a call to `tool_name` with the given detail.
    pub fn tool(tool_name: &str, request_detail: &str) -> Self {
        Self {
            outcome: MockOutcome::Call(FunctionCall {
                name: tool_name.to_string(),
                args: serde_json::json!({ "request_detail": request_detail }),
            }),
        }
    }

    /// Always returns the given call verbatim.
    pub fn call(call: FunctionCall) -> Self {
        Self {
            outcome: MockOutcome::Call(call),
        }
    }

    /// Always returns "no function call" (out-of-scope).
    pub fn no_call() -> Self {
        Self {
            outcome: MockOutcome::NoCall,
        }
    }

    /// Always fails, simulating a remote-call error.
    pub fn failing() -> Self {
        Self {
            outcome: MockOutcome::Failure,
        }
    }
}

#[async_trait]
impl IntentClassifier for MockClassifier {
    async fn classify(&self, _input: &str) -> Result<Option<FunctionCall>, RoutingError> {
        match &self.outcome {
            MockOutcome::Call(call) => Ok(Some(call.clone())),
            MockOutcome::NoCall => Ok(None),
            MockOutcome::Failure => Err(RoutingError::Api {
                status: 503,
                body: "model overloaded".into(),
            }),
        }
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::for_tests("test-key")
    }

    #[test]
    fn client_requires_api_key() {
        let mut config = test_config();
        config.api_key = "".into();
        let err = GeminiClient::from_config(&config).unwrap_err();
        assert!(matches!(err, RoutingError::MissingApiKey));
    }

    #[test]
    fn endpoint_includes_model() {
        let client = GeminiClient::from_config(&test_config()).unwrap();
        assert!(client.endpoint().ends_with(&format!(
            "/v1beta/models/{}:generateContent",
            test_config().model
        )));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let mut config = test_config();
        config.api_base_url = "https://example.invalid/".into();
        let client = GeminiClient::from_config(&config).unwrap();
        assert!(client
            .endpoint()
            .starts_with("https://example.invalid/v1beta/"));
    }

    #[test]
    fn extracts_first_function_call_from_parts() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "routing..." },
                        { "functionCall": { "name": "pharmacy_logistics",
                                            "args": { "request_detail": "stock check" } } }
                    ]
                }
            }]
        });
        let parsed: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        let call = GeminiClient::extract_function_call(parsed).unwrap();
        assert_eq!(call.name, "pharmacy_logistics");
        assert_eq!(call.args["request_detail"], "stock check");
    }

    #[test]
    fn text_only_response_yields_none() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "This is out of scope." }] }
            }]
        });
        let parsed: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert!(GeminiClient::extract_function_call(parsed).is_none());
    }

    #[test]
    fn empty_candidates_yield_none() {
        let parsed: GenerateContentResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(GeminiClient::extract_function_call(parsed).is_none());
    }

    #[test]
    fn request_body_serializes_camel_case() {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: Some("user"),
                parts: vec![RequestPart { text: "hello" }],
            }],
            system_instruction: RequestContent {
                role: None,
                parts: vec![RequestPart {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            tools: vec![ToolBundle {
                function_declarations: tool_declarations(),
            }],
            generation_config: GenerationConfig { temperature: 0.1 },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("systemInstruction").is_some());
        assert!(json["tools"][0].get("functionDeclarations").is_some());
        let temp = json["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temp - 0.1).abs() < 1e-6);
        // System instruction has no role key
        assert!(json["systemInstruction"].get("role").is_none());
    }

    #[tokio::test]
    async fn mock_returns_configured_call() {
        let mock = MockClassifier::tool("appointment_management", "cancel visit");
        let call = mock.classify("anything").await.unwrap().unwrap();
        assert_eq!(call.name, "appointment_management");
        assert_eq!(call.args["request_detail"], "cancel visit");
    }

    #[tokio::test]
    async fn mock_no_call_and_failure() {
        assert!(MockClassifier::no_call()
            .classify("x")
            .await
            .unwrap()
            .is_none());
        assert!(MockClassifier::failing().classify("x").await.is_err());
    }
}
