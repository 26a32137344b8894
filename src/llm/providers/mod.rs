//! LLM provider implementations
//!
//! Each provider is implemented in its own module for better organization and maintainability.

pub mod anthropic;
pub mod gemini;
pub mod ollama;
pub mod openai;

// Re-export providers for easy access
pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

use crate::error::{Result, ScoutError};
use reqwest::Client;
use std::time::Duration;

/// Upper bound on completion length; 300 domains per line fit comfortably
pub(crate) const MAX_COMPLETION_TOKENS: u32 = 4000;

/// System instruction shared by chat-style providers
pub(crate) const SYSTEM_PROMPT: &str =
    "You are a domain name generator. Reply with one domain name per line and nothing else.";

/// HTTP client for LLM calls
pub(crate) fn http_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| ScoutError::network(e.to_string(), None, None))
}

/// Map a failed LLM response to a provider error
pub(crate) fn response_error(provider: &str, status: reqwest::StatusCode, body: &str) -> ScoutError {
    let message = match status.as_u16() {
        401 => "Authentication failed (401). Please check your API key".to_string(),
        403 => "Access forbidden (403). Your API key may not have permission".to_string(),
        429 => "Rate limit exceeded (429). Please try again later".to_string(),
        500..=599 => format!("Server error ({}). The API service is experiencing issues", status),
        _ => format!("API request failed ({}): {}", status, body),
    };
    ScoutError::provider(provider, message, Some(status.as_u16().to_string()))
}
