//! Runtime configuration, read from the environment at startup.

use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Mediroute";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default hosted model endpoint.
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
/// Default model for intent classification.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Default bind address for the HTTP server.
const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Pause between classifying a request and executing the routed tool,
/// so the activity log reads as a sequence rather than one burst.
const DEFAULT_ROUTING_PAUSE_MS: u64 = 800;
/// Simulated insurance-eligibility verification delay.
const DEFAULT_VERIFICATION_DELAY_MS: u64 = 1500;
/// Outbound HTTP timeout for classification calls.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API key is missing. Set MEDIROUTE_API_KEY before starting.")]
    MissingApiKey,
    #[error("Invalid bind address '{0}'. Expected host:port.")]
    InvalidBindAddr(String),
}

/// Everything the service needs at runtime.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base_url: String,
    pub model: String,
    pub bind_addr: SocketAddr,
    pub routing_pause_ms: u64,
    pub verification_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `MEDIROUTE_API_KEY` is required (with `GEMINI_API_KEY` accepted
    /// as a fallback); everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("MEDIROUTE_API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let bind_raw = env_or("MEDIROUTE_BIND", DEFAULT_BIND);
        let bind_addr: SocketAddr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        Ok(Self {
            api_key,
            api_base_url: env_or("MEDIROUTE_API_BASE", DEFAULT_API_BASE),
            model: env_or("MEDIROUTE_MODEL", DEFAULT_MODEL),
            bind_addr,
            routing_pause_ms: env_u64_or("MEDIROUTE_ROUTING_PAUSE_MS", DEFAULT_ROUTING_PAUSE_MS),
            verification_delay_ms: env_u64_or(
                "MEDIROUTE_VERIFICATION_DELAY_MS",
                DEFAULT_VERIFICATION_DELAY_MS,
            ),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        })
    }

    /// Config for tests: given key, local defaults, zero delays.
    pub fn for_tests(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_base_url: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            routing_pause_ms: 0,
            verification_delay_ms: 0,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,mediroute=debug"
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u64_or(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
