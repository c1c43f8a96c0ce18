//! Intent routing — the contract between free-text commands and the
//! four operational tools.
//!
//! A command is sent to a hosted generative model configured with four
//! function declarations (`schema`) and a routing policy (`prompt`).
//! The model returns at most one function call; `engine` maps it to a
//! [`RoutedIntent`] or to the fallback path.

pub mod client;
pub mod engine;
pub mod prompt;
pub mod schema;

pub use client::{FunctionCall, GeminiClient, IntentClassifier, MockClassifier};
pub use engine::{route_request, RoutedIntent};

/// Errors from the remote classification call.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("API key is missing. Set MEDIROUTE_API_KEY before starting.")]
    MissingApiKey,
    #[error("HTTP client error: {0}")]
    Http(String),
    #[error("Model API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Failed to parse model response: {0}")]
    ResponseParsing(String),
}
