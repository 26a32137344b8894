//! Availability provider implementations
//!
//! Each backend lives in its own module and normalizes its response into
//! [`DomainStatus`](crate::types::DomainStatus).

pub mod domainr;
pub mod namecom;

pub use domainr::DomainrProvider;
pub use namecom::NameComProvider;

use crate::domain::AvailabilityProvider;
use crate::error::{Result, ScoutError};
use crate::types::{AvailabilityBackend, AvailabilityConfig};
use reqwest::Client;
use std::time::Duration;

/// Get available availability providers
pub fn available_providers() -> Vec<&'static str> {
    vec!["namecom", "domainr"]
}

/// Create the configured availability provider.
///
/// Fails before any request when the backend's credentials are missing.
pub fn create_provider(config: &AvailabilityConfig) -> Result<Box<dyn AvailabilityProvider>> {
    match config.backend {
        AvailabilityBackend::NameCom => Ok(Box::new(NameComProvider::new(config)?)),
        AvailabilityBackend::Domainr => Ok(Box::new(DomainrProvider::new(config)?)),
    }
}

/// Shared HTTP client for availability lookups
pub(crate) fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(15))
        .user_agent(concat!("domain-scout/", env!("CARGO_PKG_VERSION")))
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|e| ScoutError::network(e.to_string(), None, None))
}

/// Map a non-2xx status to an error with a readable message
pub(crate) fn status_error(provider: &str, status: reqwest::StatusCode, body: String, url: String) -> ScoutError {
    match status.as_u16() {
        401 | 403 => ScoutError::provider(
            provider,
            format!("Authentication failed ({}). Check your credentials", status),
            Some(status.as_u16().to_string()),
        ),
        429 => ScoutError::provider(
            provider,
            "Rate limit exceeded (429). Please try again later",
            Some("429".to_string()),
        ),
        _ => ScoutError::network(
            format!("{} request failed ({}): {}", provider, status, body),
            Some(status.as_u16()),
            Some(url),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_fail_fast() {
        let config = AvailabilityConfig {
            backend: AvailabilityBackend::NameCom,
            ..Default::default()
        };
        let err = create_provider(&config).err().unwrap();
        let message = err.to_string();
        assert!(message.contains("NAMECOM_USERNAME"));
        assert!(message.contains("NAMECOM_TOKEN"));

        let config = AvailabilityConfig::default();
        let err = create_provider(&config).err().unwrap();
        assert!(err.to_string().contains("DOMAINR_API_KEY"));
    }

    #[test]
    fn test_provider_batch_sizes() {
        let config = AvailabilityConfig {
            backend: AvailabilityBackend::NameCom,
            namecom_username: Some("user".to_string()),
            namecom_token: Some("token".to_string()),
            domainr_api_key: Some("key".to_string()),
            ..Default::default()
        };
        assert_eq!(create_provider(&config).unwrap().batch_size(), 20);

        let config = AvailabilityConfig {
            backend: AvailabilityBackend::Domainr,
            ..config
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.batch_size(), 5);
        assert_eq!(provider.name(), "domainr");
    }

    #[test]
    fn test_status_error_mapping() {
        let err = status_error(
            "namecom",
            reqwest::StatusCode::UNAUTHORIZED,
            String::new(),
            "https://api.name.com".to_string(),
        );
        assert!(matches!(err, ScoutError::Provider { .. }));

        let err = status_error(
            "namecom",
            reqwest::StatusCode::BAD_GATEWAY,
            "oops".to_string(),
            "https://api.name.com".to_string(),
        );
        assert!(matches!(err, ScoutError::Network { status_code: Some(502), .. }));
    }
}
