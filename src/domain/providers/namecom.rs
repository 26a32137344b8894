//! Name.com registrar provider
//!
//! Uses the v4 `domains:checkAvailability` batch endpoint, which reports
//! purchasability and premium pricing explicitly.

use crate::domain::{align_with_request, AvailabilityProvider};
use crate::error::{Result, ScoutError};
use crate::types::{AvailabilityConfig, DomainStatus};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{http_client, status_error};

const DEFAULT_BASE_URL: &str = "https://api.name.com";

/// Registrar batch availability provider
pub struct NameComProvider {
    client: Client,
    username: String,
    token: String,
    base_url: String,
}

impl NameComProvider {
    pub fn new(config: &AvailabilityConfig) -> Result<Self> {
        let username = config.namecom_username.clone().filter(|v| !v.is_empty());
        let token = config.namecom_token.clone().filter(|v| !v.is_empty());

        let (username, token) = match (username, token) {
            (Some(username), Some(token)) => (username, token),
            (username, token) => {
                let missing: Vec<&str> = [
                    username.is_none().then_some("NAMECOM_USERNAME"),
                    token.is_none().then_some("NAMECOM_TOKEN"),
                ]
                .into_iter()
                .flatten()
                .collect();
                return Err(ScoutError::config(format!(
                    "Name.com provider requires {}",
                    missing.join(" and ")
                )));
            }
        };

        Ok(Self {
            client: http_client()?,
            username,
            token,
            base_url: config
                .namecom_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

#[async_trait]
impl AvailabilityProvider for NameComProvider {
    async fn check_status(&self, domains: &[String]) -> Result<Vec<DomainStatus>> {
        if domains.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/v4/domains:checkAvailability", self.base_url.trim_end_matches('/'));
        let request = CheckAvailabilityRequest {
            domain_names: domains.to_vec(),
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.token))
            .json(&request)
            .send()
            .await
            .map_err(|e| ScoutError::network(e.to_string(), None, Some(url.clone())))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(self.name(), status, body, url));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ScoutError::network(e.to_string(), None, Some(url.clone())))?;
        let parsed: CheckAvailabilityResponse = serde_json::from_str(&text)
            .map_err(|e| ScoutError::parse(e.to_string(), Some(text)))?;

        let found = parsed.results.into_iter().map(NameComResult::into_status).collect();
        Ok(align_with_request(domains, found))
    }

    fn batch_size(&self) -> usize {
        20
    }

    fn name(&self) -> &'static str {
        "namecom"
    }
}

// Name.com API structures
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckAvailabilityRequest {
    domain_names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CheckAvailabilityResponse {
    #[serde(default)]
    results: Vec<NameComResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NameComResult {
    domain_name: String,
    #[serde(default)]
    purchasable: bool,
    #[serde(default)]
    premium: bool,
    purchase_price: Option<f64>,
}

impl NameComResult {
    fn into_status(self) -> DomainStatus {
        DomainStatus {
            domain: self.domain_name,
            available: self.purchasable,
            is_premium: self.premium,
            premium_price: if self.premium { self.purchase_price } else { None },
        }
    }
}
