//! LLM (Large Language Model) integration module
//!
//! Providers turn a prompt into raw text; [`parser`] turns that text into
//! domain candidates and builds the prompts.

pub mod parser;
pub mod providers;
pub mod router;

// Re-export main functionality
pub use parser::{build_brainstorm_prompt, parse_domain_lines, BrainstormPrompt};
pub use router::LlmRouter;

use crate::error::Result;
use crate::types::LlmConfig;
use async_trait::async_trait;

/// Core trait for all text generation providers
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the raw completion text
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String>;

    /// Get provider name
    fn name(&self) -> &'static str;

    /// Check if provider is configured and ready
    fn is_ready(&self) -> bool;
}

/// Get available LLM providers
pub fn available_providers() -> Vec<&'static str> {
    vec!["openai", "anthropic", "gemini", "ollama"]
}

/// Create an LLM provider from configuration
pub fn create_provider(config: &LlmConfig) -> Result<Box<dyn TextGenerator>> {
    match config.provider.as_str() {
        "openai" => Ok(Box::new(providers::OpenAiProvider::new(config)?)),
        "anthropic" => Ok(Box::new(providers::AnthropicProvider::new(config)?)),
        "gemini" => Ok(Box::new(providers::GeminiProvider::new(config)?)),
        "ollama" => Ok(Box::new(providers::OllamaProvider::new(config)?)),
        _ => Err(crate::error::ScoutError::config(format!(
            "Unsupported LLM provider: {}. Supported providers: {}",
            config.provider,
            available_providers().join(", ")
        ))),
    }
}
