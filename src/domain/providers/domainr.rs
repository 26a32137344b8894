//! Domainr status provider (RapidAPI)
//!
//! Availability is inferred from the status summary; premium from the
//! space-separated status flags.

use crate::domain::{align_with_request, AvailabilityProvider};
use crate::error::{Result, ScoutError};
use crate::types::{AvailabilityConfig, DomainStatus};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{http_client, status_error};

const DEFAULT_BASE_URL: &str = "https://domainr.p.rapidapi.com";
const RAPIDAPI_HOST: &str = "domainr.p.rapidapi.com";

/// Summary value Domainr reports for unregistered names
const INACTIVE_SUMMARY: &str = "inactive";

/// Status lookup availability provider
pub struct DomainrProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl DomainrProvider {
    pub fn new(config: &AvailabilityConfig) -> Result<Self> {
        let api_key = config
            .domainr_api_key
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ScoutError::config("Domainr provider requires DOMAINR_API_KEY"))?;

        Ok(Self {
            client: http_client()?,
            api_key,
            base_url: config
                .domainr_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

#[async_trait]
impl AvailabilityProvider for DomainrProvider {
    async fn check_status(&self, domains: &[String]) -> Result<Vec<DomainStatus>> {
        if domains.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/v2/status", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("domain", domains.join(","))])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
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
        let parsed = parse_status_response(&text)?;

        Ok(align_with_request(domains, parsed))
    }

    fn batch_size(&self) -> usize {
        5
    }

    fn name(&self) -> &'static str {
        "domainr"
    }
}

/// Parse a `/v2/status` body into normalized records
pub fn parse_status_response(text: &str) -> Result<Vec<DomainStatus>> {
    let parsed: StatusResponse = serde_json::from_str(text)
        .map_err(|e| ScoutError::parse(e.to_string(), Some(text.to_string())))?;

    if parsed.status.is_empty() {
        if let Some(error) = parsed.errors.first() {
            return Err(ScoutError::provider(
                "domainr",
                error.message.clone(),
                error.code.as_ref().map(|c| c.to_string()),
            ));
        }
    }

    Ok(parsed.status.iter().map(DomainrStatus::to_status).collect())
}

// Domainr API structures
#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    status: Vec<DomainrStatus>,
    #[serde(default)]
    errors: Vec<DomainrError>,
}

#[derive(Debug, Deserialize)]
struct DomainrStatus {
    domain: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    summary: String,
}

impl DomainrStatus {
    fn to_status(&self) -> DomainStatus {
        DomainStatus {
            domain: self.domain.clone(),
            available: self.summary == INACTIVE_SUMMARY,
            is_premium: self.status.contains("premium"),
            premium_price: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DomainrError {
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_summary_is_taken() {
        let body = r#"{"status":[{"domain":"example.com","zone":"com","status":"active","summary":"active"}]}"#;
        let statuses = parse_status_response(body).unwrap();

        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].domain, "example.com");
        assert!(!statuses[0].available);
        assert!(!statuses[0].is_premium);
        assert_eq!(statuses[0].premium_price, None);
    }

    #[test]
    fn test_inactive_and_premium_flags() {
        let body = r#"{"status":[
            {"domain":"pickle.ai","zone":"ai","status":"undelegated inactive","summary":"inactive"},
            {"domain":"pickle.io","zone":"io","status":"marketed priced premium","summary":"premium"}
        ]}"#;
        let statuses = parse_status_response(body).unwrap();

        assert!(statuses[0].available);
        assert!(!statuses[0].is_premium);
        assert!(!statuses[1].available);
        assert!(statuses[1].is_premium);
    }

    #[test]
    fn test_error_payload() {
        let body = r#"{"errors":[{"code":400,"message":"Invalid domain"}]}"#;
        let err = parse_status_response(body).unwrap_err();
        assert!(err.to_string().contains("Invalid domain"));
    }

    #[test]
    fn test_unparsable_payload() {
        assert!(matches!(
            parse_status_response("<html>"),
            Err(ScoutError::Parse { .. })
        ));
    }
}
