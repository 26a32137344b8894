//! Environment-driven configuration

use crate::domain::{self, AvailabilityProvider, DEFAULT_BATCH_DELAY};
use crate::error::{Result, ScoutError};
use crate::llm::LlmRouter;
use crate::tld::TldCatalog;
use crate::types::{AvailabilityBackend, AvailabilityConfig, LlmConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Complete runtime configuration, built once at startup
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    pub availability: AvailabilityConfig,
    /// Text generation providers in preference order; the first is the default
    pub llm: Vec<LlmConfig>,
    pub tld_list_path: Option<PathBuf>,
    pub batch_delay: Duration,
    pub rng_seed: Option<u64>,
}

impl ScoutConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let backend = match get("AVAILABILITY_PROVIDER").map(|v| v.to_lowercase()).as_deref() {
            None | Some("domainr") => AvailabilityBackend::Domainr,
            Some("namecom") | Some("name.com") => AvailabilityBackend::NameCom,
            Some(other) => {
                return Err(ScoutError::config(format!(
                    "Unsupported AVAILABILITY_PROVIDER '{}'. Supported providers: {}",
                    other,
                    domain::available_providers().join(", ")
                )))
            }
        };

        let availability = AvailabilityConfig {
            backend,
            namecom_username: get("NAMECOM_USERNAME"),
            namecom_token: get("NAMECOM_TOKEN"),
            namecom_base_url: get("NAMECOM_BASE_URL"),
            domainr_api_key: get("DOMAINR_API_KEY"),
            domainr_base_url: get("DOMAINR_BASE_URL"),
        };

        let mut llm = Vec::new();
        if let Some(api_key) = get("OPENAI_API_KEY") {
            llm.push(LlmConfig {
                provider: "openai".to_string(),
                model: get("OPENAI_MODEL").unwrap_or_else(|| "gpt-4.1-mini".to_string()),
                api_key,
                base_url: get("OPENAI_BASE_URL"),
            });
        }
        if let Some(api_key) = get("ANTHROPIC_API_KEY") {
            llm.push(LlmConfig {
                provider: "anthropic".to_string(),
                model: get("ANTHROPIC_MODEL").unwrap_or_else(|| "claude-sonnet-4-0".to_string()),
                api_key,
                base_url: None,
            });
        }
        if let Some(api_key) = get("GEMINI_API_KEY") {
            llm.push(LlmConfig {
                provider: "gemini".to_string(),
                model: get("GEMINI_MODEL").unwrap_or_else(|| "gemini-2.5-flash".to_string()),
                api_key,
                base_url: None,
            });
        }
        // Ollama needs no key, so it is opt-in through its own variables
        let ollama_url = get("OLLAMA_BASE_URL");
        let ollama_model = get("OLLAMA_MODEL");
        if ollama_url.is_some() || ollama_model.is_some() {
            llm.push(LlmConfig {
                provider: "ollama".to_string(),
                model: ollama_model.unwrap_or_else(|| "llama3.1".to_string()),
                api_key: String::new(),
                base_url: ollama_url,
            });
        }

        let batch_delay = match get("SCOUT_BATCH_DELAY_MS") {
            Some(raw) => Duration::from_millis(raw.parse().map_err(|_| {
                ScoutError::config(format!("SCOUT_BATCH_DELAY_MS must be a whole number, got '{}'", raw))
            })?),
            None => DEFAULT_BATCH_DELAY,
        };

        let rng_seed = get("SCOUT_RNG_SEED")
            .map(|raw| {
                raw.parse().map_err(|_| {
                    ScoutError::config(format!("SCOUT_RNG_SEED must be an unsigned integer, got '{}'", raw))
                })
            })
            .transpose()?;

        Ok(Self {
            availability,
            llm,
            tld_list_path: get("TLD_LIST_PATH").map(PathBuf::from),
            batch_delay,
            rng_seed,
        })
    }

    /// Router over every configured text generator
    pub fn build_router(&self) -> Result<LlmRouter> {
        if self.llm.is_empty() {
            return Err(ScoutError::config(
                "No LLM providers configured. Set OPENAI_API_KEY, ANTHROPIC_API_KEY, GEMINI_API_KEY or OLLAMA_MODEL",
            ));
        }

        let router = LlmRouter::new();
        for config in &self.llm {
            router.add_provider(config)?;
            tracing::info!(provider = %config.provider, model = %config.model, "LLM provider configured");
        }
        router.set_default_provider(&self.llm[0].provider);
        Ok(router)
    }

    /// Selected availability provider; fails when its credentials are missing
    pub fn build_availability(&self) -> Result<Arc<dyn AvailabilityProvider>> {
        let provider = domain::create_provider(&self.availability)?;
        tracing::info!(provider = %provider.name(), "Availability provider configured");
        Ok(Arc::from(provider))
    }

    /// Catalog from `TLD_LIST_PATH`, or the embedded list
    pub fn load_catalog(&self) -> Result<TldCatalog> {
        match &self.tld_list_path {
            Some(path) => TldCatalog::from_file(path),
            None => Ok(TldCatalog::embedded()),
        }
    }
}
