//! Service facade behind the three tools
//!
//! Every operation validates its input before touching a provider.

use crate::config::ScoutConfig;
use crate::domain::{AvailabilityChecker, AvailabilityProvider, DomainValidator};
use crate::engine::{
    creativity_score, exploration_insights, score, strategies_used, suggestion_insights,
    CandidateGenerator, ExploreRequest, Explorer, GenerationRequest,
};
use crate::error::Result;
use crate::keywords::{extract_keywords, unique_keywords};
use crate::llm::TextGenerator;
use crate::tld::{select_tlds, TldCatalog};
use crate::types::{
    Candidate, CreativityLevel, DeepTldResult, DomainStatus, ScoredResult, SearchMode,
    SearchResult, SearchStats,
};
use crate::validation_error;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const DEFAULT_MAX_SUGGESTIONS: usize = 20;
pub const MAX_SUGGESTIONS: usize = 50;
pub const MAX_DOMAINS_PER_CHECK: usize = 20;
pub const DEFAULT_BATCH_SIZE: usize = 50;
pub const MIN_BATCH_SIZE: usize = 10;
pub const MAX_BATCH_SIZE: usize = 500;
pub const DEFAULT_MAX_BATCHES: usize = 10;
pub const MAX_BATCHES: usize = 20;

/// Arguments of `suggest`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    pub description: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub max_suggestions: Option<usize>,
    #[serde(default)]
    pub check_availability: Option<bool>,
}

impl SuggestRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Check bounds, returning the effective suggestion count
    pub fn validate(&self) -> Result<usize> {
        if self.description.trim().is_empty() {
            return Err(validation_error!("description must not be empty"));
        }
        let count = self.max_suggestions.unwrap_or(DEFAULT_MAX_SUGGESTIONS);
        if !(1..=MAX_SUGGESTIONS).contains(&count) {
            return Err(validation_error!(
                "maxSuggestions must be between 1 and {}, got {}",
                MAX_SUGGESTIONS,
                count
            ));
        }
        Ok(count)
    }
}

/// Arguments of `checkAvailability`: exactly one of `domain` or `domains`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityRequest {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub domains: Option<Vec<String>>,
}

/// Validated form of [`CheckAvailabilityRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityTarget {
    Single(String),
    Many(Vec<String>),
}

impl CheckAvailabilityRequest {
    pub fn single(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            domains: None,
        }
    }

    pub fn many<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: None,
            domains: Some(domains.into_iter().map(Into::into).collect()),
        }
    }

    /// Check shape and syntax of every domain; names come back normalized
    pub fn validate(&self, validator: &DomainValidator) -> Result<AvailabilityTarget> {
        match (&self.domain, &self.domains) {
            (Some(_), Some(_)) => Err(validation_error!("Provide either domain or domains, not both")),
            (None, None) => Err(validation_error!("Provide one of domain or domains")),
            (Some(domain), None) => {
                let validated = validator.validate(domain)?;
                Ok(AvailabilityTarget::Single(validated.full_domain))
            }
            (None, Some(domains)) => {
                if domains.is_empty() || domains.len() > MAX_DOMAINS_PER_CHECK {
                    return Err(validation_error!(
                        "domains must contain between 1 and {} entries, got {}",
                        MAX_DOMAINS_PER_CHECK,
                        domains.len()
                    ));
                }
                domains
                    .iter()
                    .map(|d| validator.validate(d).map(|v| v.full_domain))
                    .collect::<Result<Vec<_>>>()
                    .map(AvailabilityTarget::Many)
            }
        }
    }
}

/// Response of `checkAvailability`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityReport {
    pub results: Vec<DomainStatus>,
    pub available_count: usize,
    pub provider: String,
    pub checked_at: DateTime<Utc>,
}

/// Arguments of `exploreDeep`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreDeepRequest {
    pub description: String,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub batch_size: Option<usize>,
    #[serde(default)]
    pub max_batches: Option<usize>,
    #[serde(default)]
    pub creativity_level: Option<CreativityLevel>,
    #[serde(default)]
    pub check_availability: Option<bool>,
}

impl ExploreDeepRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Check bounds, returning `(batch_size, max_batches)`
    pub fn validate(&self) -> Result<(usize, usize)> {
        if self.description.trim().is_empty() {
            return Err(validation_error!("description must not be empty"));
        }
        let batch_size = self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE);
        if !(MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&batch_size) {
            return Err(validation_error!(
                "batchSize must be between {} and {}, got {}",
                MIN_BATCH_SIZE,
                MAX_BATCH_SIZE,
                batch_size
            ));
        }
        let max_batches = self.max_batches.unwrap_or(DEFAULT_MAX_BATCHES);
        if !(1..=MAX_BATCHES).contains(&max_batches) {
            return Err(validation_error!(
                "maxBatches must be between 1 and {}, got {}",
                MAX_BATCHES,
                max_batches
            ));
        }
        Ok((batch_size, max_batches))
    }

    /// Explicit keywords when given, otherwise keywords of the description
    fn effective_keywords(&self) -> Vec<String> {
        let explicit = self
            .keywords
            .as_ref()
            .map(|kws| extract_keywords(&kws.join(" ")))
            .unwrap_or_default();
        if explicit.is_empty() {
            unique_keywords(&extract_keywords(&self.description))
        } else {
            unique_keywords(&explicit)
        }
    }
}

/// Domain suggestion service
#[derive(Clone)]
pub struct DomainScout {
    catalog: Arc<TldCatalog>,
    generator: CandidateGenerator,
    explorer: Explorer,
    checker: AvailabilityChecker,
    validator: DomainValidator,
    rng_seed: Option<u64>,
}

impl DomainScout {
    /// Assemble a service from its collaborators
    pub fn new(
        llm: Arc<dyn TextGenerator>,
        availability: Arc<dyn AvailabilityProvider>,
        catalog: Arc<TldCatalog>,
    ) -> Self {
        let generator = CandidateGenerator::new(llm, Arc::clone(&catalog));
        Self {
            explorer: Explorer::new(generator.clone()),
            generator,
            checker: AvailabilityChecker::new(availability),
            validator: DomainValidator::new(),
            catalog,
            rng_seed: None,
        }
    }

    /// Build every provider from configuration, failing fast on missing settings
    pub fn from_config(config: &ScoutConfig) -> Result<Self> {
        let router = config.build_router()?;
        let availability = config.build_availability()?;
        let catalog = config.load_catalog()?;
        tracing::info!(tlds = %catalog.len(), "TLD catalog ready");

        Ok(Self::new(Arc::new(router), availability, Arc::new(catalog))
            .with_batch_delay(config.batch_delay)
            .with_rng_seed(config.rng_seed))
    }

    /// Pause used between availability batches and exploration batches
    pub fn with_batch_delay(mut self, delay: Duration) -> Self {
        self.checker = self.checker.with_batch_delay(delay);
        self.explorer = self.explorer.with_batch_delay(delay);
        self
    }

    /// Fixed seed for shuffling; `None` draws from entropy per call
    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    pub fn catalog(&self) -> &TldCatalog {
        &self.catalog
    }

    fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generate, score and optionally check domain suggestions
    pub async fn suggest(&self, request: &SuggestRequest) -> Result<SearchResult> {
        let count = request.validate()?;
        let start_time = Instant::now();
        let mode = SearchMode::parse_or_default(request.mode.as_deref());
        let check = request.check_availability.unwrap_or(true);

        let keywords = extract_keywords(&request.description);
        let tlds = select_tlds(mode, &keywords);

        let mut rng = self.rng();
        let candidates = self
            .generator
            .generate(
                &GenerationRequest {
                    description: &request.description,
                    keywords: &keywords,
                    tlds: &tlds,
                    count,
                    creativity: CreativityLevel::Moderate,
                },
                &mut rng,
            )
            .await;

        let statuses = if check {
            let domains: Vec<String> = candidates.iter().map(|c| c.domain.clone()).collect();
            Some(self.checker.check_domains(&domains).await)
        } else {
            None
        };

        let results: Vec<ScoredResult> = candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                let status = statuses.as_ref().and_then(|s| s.get(i));
                let s = score(&candidate.domain, candidate.strategy, &keywords);
                ScoredResult::new(candidate, s, status)
            })
            .collect();

        let (mut available, mut premium, mut taken) = (Vec::new(), Vec::new(), Vec::new());
        for result in results.iter().cloned() {
            if result.is_premium {
                premium.push(result);
            } else if result.available {
                available.push(result);
            } else {
                taken.push(result);
            }
        }
        for list in [&mut available, &mut premium, &mut taken] {
            list.sort_by(|a, b| b.score.total_cmp(&a.score));
        }

        let insights = suggestion_insights(&available, &taken, &premium, check);
        let stats = SearchStats {
            total_generated: results.len(),
            total_checked: statuses.as_ref().map_or(0, Vec::len),
            available_count: available.len(),
            premium_count: premium.len(),
            creativity_score: creativity_score(results.iter().map(|r| r.strategy)),
            strategies_used: strategies_used(&results),
            mode,
            availability_checked: check,
        };

        tracing::info!(
            mode = %mode,
            generated = %stats.total_generated,
            available = %stats.available_count,
            duration_ms = %start_time.elapsed().as_millis(),
            "Suggestion search completed"
        );

        Ok(SearchResult {
            description: request.description.clone(),
            keywords,
            tlds_considered: tlds,
            available,
            taken,
            premium,
            insights,
            stats,
            generated_at: Utc::now(),
        })
    }

    /// Check one domain directly or a list through the batched checker
    pub async fn check_availability(&self, request: &CheckAvailabilityRequest) -> Result<AvailabilityReport> {
        let results = match request.validate(&self.validator)? {
            AvailabilityTarget::Single(domain) => vec![self.checker.check_domain(&domain).await?],
            AvailabilityTarget::Many(domains) => self.checker.check_domains(&domains).await,
        };

        Ok(AvailabilityReport {
            available_count: results.iter().filter(|r| r.available).count(),
            results,
            provider: self.checker.provider_name().to_string(),
            checked_at: Utc::now(),
        })
    }

    /// Sweep the full catalog in batches for standout names
    pub async fn explore_deep(&self, request: &ExploreDeepRequest) -> Result<DeepTldResult> {
        let (batch_size, max_batches) = request.validate()?;
        let creativity = request.creativity_level.unwrap_or_default();
        let check = request.check_availability.unwrap_or(false);
        let keywords = request.effective_keywords();

        let mut rng = self.rng();
        let mut exploration = self
            .explorer
            .explore(
                &ExploreRequest {
                    description: &request.description,
                    keywords: &keywords,
                    batch_size,
                    max_batches,
                    creativity,
                },
                &mut rng,
            )
            .await;

        let available_standouts = if check {
            let domains: Vec<String> = exploration.standouts.iter().map(|s| s.domain.clone()).collect();
            let statuses = self.checker.check_domains(&domains).await;
            exploration.stats.availability_checking = true;

            Some(
                exploration
                    .standouts
                    .iter()
                    .zip(&statuses)
                    // registrable includes premium listings
                    .filter(|(_, status)| status.available || status.is_premium)
                    .map(|(standout, status)| {
                        ScoredResult::new(
                            &Candidate::new(standout.domain.clone(), standout.strategy),
                            standout.score,
                            Some(status),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        } else {
            None
        };

        let insights = exploration_insights(
            &self.catalog,
            &exploration.standouts,
            available_standouts.as_deref(),
            &exploration.stats,
        );

        Ok(DeepTldResult {
            description: request.description.clone(),
            keywords,
            standouts: exploration.standouts,
            available_standouts,
            insights,
            stats: exploration.stats,
            generated_at: Utc::now(),
        })
    }
}
