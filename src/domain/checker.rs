//! Batched availability checking

use crate::domain::AvailabilityProvider;
use crate::error::{Result, ScoutError};
use crate::types::DomainStatus;
use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Pause between consecutive batches unless configured otherwise
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(1000);

/// Runs lookups through a provider in fixed-size batches
#[derive(Clone)]
pub struct AvailabilityChecker {
    provider: Arc<dyn AvailabilityProvider>,
    batch_delay: Duration,
}

impl AvailabilityChecker {
    /// Create a checker with the default inter-batch delay
    pub fn new(provider: Arc<dyn AvailabilityProvider>) -> Self {
        Self {
            provider,
            batch_delay: DEFAULT_BATCH_DELAY,
        }
    }

    /// Override the inter-batch delay
    pub fn with_batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay = delay;
        self
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn batch_delay(&self) -> Duration {
        self.batch_delay
    }

    /// Look up a single domain, propagating provider errors
    pub async fn check_domain(&self, domain: &str) -> Result<DomainStatus> {
        let start_time = Instant::now();
        let request = [domain.to_string()];
        let statuses = self.provider.check_status(&request).await?;

        let status = statuses
            .into_iter()
            .find(|s| s.domain.eq_ignore_ascii_case(domain))
            .ok_or_else(|| {
                ScoutError::domain_check(
                    domain,
                    "Provider response did not include the domain",
                    Some(self.provider.name().to_string()),
                )
            })?;

        tracing::debug!(
            domain = %domain,
            provider = %self.provider.name(),
            available = %status.available,
            duration_ms = %start_time.elapsed().as_millis(),
            "Domain check completed"
        );

        Ok(status)
    }

    /// Check every domain, in batches of the provider's batch size.
    ///
    /// Lookups inside a batch run concurrently. A failed lookup becomes a
    /// not-available record, so the output always matches the input in
    /// length and order.
    pub async fn check_domains(&self, domains: &[String]) -> Vec<DomainStatus> {
        let batch_size = self.provider.batch_size().max(1);
        let batch_count = (domains.len() + batch_size - 1) / batch_size;
        let mut results = Vec::with_capacity(domains.len());

        for (index, batch) in domains.chunks(batch_size).enumerate() {
            let batch_start = Instant::now();
            let lookups = batch.iter().map(|domain| self.check_domain(domain));
            let outcomes = join_all(lookups).await;

            let mut error_count = 0u32;
            for (domain, outcome) in batch.iter().zip(outcomes) {
                match outcome {
                    Ok(status) => results.push(status),
                    Err(e) => {
                        error_count += 1;
                        tracing::warn!(
                            domain = %domain,
                            provider = %self.provider.name(),
                            error = %e,
                            "Failed to check domain"
                        );
                        results.push(DomainStatus::unavailable(domain.clone()));
                    }
                }
            }

            tracing::info!(
                batch = %(index + 1),
                batches = %batch_count,
                domains_requested = %batch.len(),
                errors = %error_count,
                batch_duration_ms = %batch_start.elapsed().as_millis(),
                "Batch domain check completed"
            );

            if index + 1 < batch_count && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        results
    }
}
