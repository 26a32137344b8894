//! Ollama provider implementation
//!
//! Supports local Ollama API for running LLMs locally

use crate::error::{Result, ScoutError};
use crate::llm::TextGenerator;
use crate::types::LlmConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{http_client, response_error, SYSTEM_PROMPT};

/// Ollama provider implementation for local LLM inference
pub struct OllamaProvider {
    client: Client,
    model: String,
    base_url: String,
}

impl OllamaProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        Ok(Self {
            // Longer timeout for local inference
            client: http_client(120)?,
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| "http://localhost:11434".to_string()),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for OllamaProvider {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        let request = OllamaRequest {
            model: self.model.clone(),
            system: SYSTEM_PROMPT.to_string(),
            prompt: prompt.to_string(),
            options: OllamaOptions { temperature },
            stream: false,
        };

        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ScoutError::network(format!("Failed to connect to Ollama: {}", e), None, Some(url.clone()))
            })?;

        if response.status().as_u16() == 404 {
            return Err(ScoutError::provider(
                self.name(),
                format!(
                    "Model '{}' not found. Please pull the model first: ollama pull {}",
                    self.model, self.model
                ),
                Some("404".to_string()),
            ));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(response_error(self.name(), status, &error_text));
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .map_err(|e| ScoutError::parse(e.to_string(), None))?;

        Ok(ollama_response.response)
    }

    fn name(&self) -> &'static str {
        "ollama"
    }

    fn is_ready(&self) -> bool {
        true // Ollama doesn't need API key
    }
}

// Ollama API structures
#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    system: String,
    prompt: String,
    options: OllamaOptions,
    stream: bool,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}
