//! Provider routing with fallback

use crate::error::{Result, ScoutError};
use crate::llm::{create_provider, TextGenerator};
use crate::types::LlmConfig;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

/// Text generator that tries the default provider first, then the others
/// in registration order.
#[derive(Clone)]
pub struct LlmRouter {
    providers: Arc<RwLock<Vec<(String, Arc<dyn TextGenerator>)>>>,
    default_provider: Arc<RwLock<String>>,
}

impl LlmRouter {
    /// Create an empty router
    pub fn new() -> Self {
        Self {
            providers: Arc::new(RwLock::new(Vec::new())),
            default_provider: Arc::new(RwLock::new("openai".to_string())),
        }
    }

    /// Build and register a provider from configuration
    pub fn add_provider(&self, config: &LlmConfig) -> Result<()> {
        let provider = create_provider(config)?;
        self.add_generator(&config.provider, Arc::from(provider));
        Ok(())
    }

    /// Register an already constructed generator under `name`
    pub fn add_generator(&self, name: &str, generator: Arc<dyn TextGenerator>) {
        let mut providers = self.providers.write();
        providers.retain(|(existing, _)| existing != name);
        providers.push((name.to_string(), generator));
    }

    /// Set default provider; ignored when `provider` is not registered
    pub fn set_default_provider(&self, provider: &str) {
        if self.has_provider(provider) {
            *self.default_provider.write() = provider.to_string();
        }
    }

    /// Complete with one named provider
    pub async fn complete_with_provider(
        &self,
        provider_name: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String> {
        let start_time = Instant::now();

        // Clone the Arc so no lock is held across the await
        let provider = {
            let providers = self.providers.read();
            providers
                .iter()
                .find(|(name, _)| name == provider_name)
                .map(|(_, p)| Arc::clone(p))
                .ok_or_else(|| {
                    ScoutError::config(format!("Provider not configured: {}", provider_name))
                })?
        };

        let result = provider.complete(prompt, temperature).await;

        match &result {
            Ok(text) => {
                tracing::info!(
                    provider = %provider_name,
                    response_chars = %text.len(),
                    duration_ms = %start_time.elapsed().as_millis(),
                    "Text generation completed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    provider = %provider_name,
                    error = %e,
                    duration_ms = %start_time.elapsed().as_millis(),
                    "Text generation failed"
                );
            }
        }

        result
    }

    /// Names of registered providers, in registration order
    pub fn available_providers(&self) -> Vec<String> {
        self.providers.read().iter().map(|(name, _)| name.clone()).collect()
    }

    /// Check if provider is available
    pub fn has_provider(&self, provider: &str) -> bool {
        self.providers.read().iter().any(|(name, _)| name == provider)
    }

    /// Current default provider name
    pub fn default_provider(&self) -> String {
        self.default_provider.read().clone()
    }
}

impl Default for LlmRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for LlmRouter {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        let mut last_error = None;
        let default_provider = self.default_provider();

        let mut order = self.available_providers();
        if let Some(pos) = order.iter().position(|name| *name == default_provider) {
            let name = order.remove(pos);
            order.insert(0, name);
        }

        for (attempt, provider_name) in order.iter().enumerate() {
            match self.complete_with_provider(provider_name, prompt, temperature).await {
                Ok(text) => {
                    if attempt > 0 {
                        tracing::info!(provider = %provider_name, "Fallback provider succeeded");
                    }
                    return Ok(text);
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ScoutError::config("No LLM providers configured")))
    }

    fn name(&self) -> &'static str {
        "router"
    }

    fn is_ready(&self) -> bool {
        !self.providers.read().is_empty()
    }
}
