//! Domain validation and availability providers

pub mod checker;
pub mod providers;
pub mod validator;

// Re-export main functionality
pub use checker::{AvailabilityChecker, DEFAULT_BATCH_DELAY};
pub use providers::{create_provider, available_providers, DomainrProvider, NameComProvider};
pub use validator::{DomainValidator, ValidatedDomain};

use crate::error::Result;
use crate::types::DomainStatus;
use async_trait::async_trait;

/// Capability shared by every availability backend
#[async_trait]
pub trait AvailabilityProvider: Send + Sync {
    /// Look up registration status for one or more domains.
    ///
    /// Every requested domain is echoed back exactly once, in request order.
    async fn check_status(&self, domains: &[String]) -> Result<Vec<DomainStatus>>;

    /// Number of lookups the checker may run concurrently per batch
    fn batch_size(&self) -> usize;

    /// Get the provider name
    fn name(&self) -> &'static str;
}

/// Reorder provider output to match the request, filling gaps with
/// not-available records
pub(crate) fn align_with_request(requested: &[String], found: Vec<DomainStatus>) -> Vec<DomainStatus> {
    let mut by_domain: std::collections::HashMap<String, DomainStatus> = found
        .into_iter()
        .map(|status| (status.domain.to_lowercase(), status))
        .collect();

    requested
        .iter()
        .map(|domain| {
            by_domain
                .remove(&domain.to_lowercase())
                .unwrap_or_else(|| DomainStatus::unavailable(domain.clone()))
        })
        .collect()
}
