//! Deep exploration across the whole TLD catalog
//!
//! The catalog is shuffled once and walked in contiguous batches, so every
//! TLD is offered to the text generator exactly once per run.

use super::generator::CandidateGenerator;
use super::scorer::score;
use super::strategies;
use crate::domain::DEFAULT_BATCH_DELAY;
use crate::tld::{TldCatalog, TldCategory};
use crate::types::{Candidate, CreativityLevel, ExplorationStandout, ExplorationStats, Strategy};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Minimum score for a candidate to count as a standout
pub const STANDOUT_THRESHOLD: f64 = 6.0;
/// Standouts kept from a single batch
pub const STANDOUTS_PER_BATCH: usize = 10;
/// Standouts kept from the whole run
pub const MAX_STANDOUTS: usize = 30;
/// Upper bound on names requested per batch
pub const MAX_REQUEST_PER_BATCH: usize = 300;

/// Effective batch layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    pub batch_size: usize,
    pub batch_count: usize,
}

/// Work out the batch layout for `total` TLDs.
///
/// The requested size shrinks when `max_batches` batches of it would not
/// cover the catalog. The batch count then follows from the size, so it may
/// exceed `max_batches` when the requested size was already smaller.
pub fn plan_batches(total: usize, requested_batch_size: usize, max_batches: usize) -> BatchPlan {
    if total == 0 {
        return BatchPlan {
            batch_size: requested_batch_size.max(1),
            batch_count: 0,
        };
    }
    let max_batches = max_batches.max(1);
    let batch_size = requested_batch_size.min(div_ceil(total, max_batches)).max(1);
    BatchPlan {
        batch_size,
        batch_count: div_ceil(total, batch_size),
    }
}

fn div_ceil(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}

/// Exploration parameters
#[derive(Debug, Clone)]
pub struct ExploreRequest<'a> {
    pub description: &'a str,
    pub keywords: &'a [String],
    pub batch_size: usize,
    pub max_batches: usize,
    pub creativity: CreativityLevel,
}

/// Standouts and counters from one run
#[derive(Debug, Clone)]
pub struct Exploration {
    pub standouts: Vec<ExplorationStandout>,
    pub stats: ExplorationStats,
}

/// Walks the catalog batch by batch through the text generator
#[derive(Clone)]
pub struct Explorer {
    generator: CandidateGenerator,
    batch_delay: Duration,
}

impl Explorer {
    pub fn new(generator: CandidateGenerator) -> Self {
        Self {
            generator,
            batch_delay: DEFAULT_BATCH_DELAY,
        }
    }

    /// Override the pause between batches
    pub fn with_batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay = delay;
        self
    }

    /// Run every batch to completion. Availability is left to the caller.
    pub async fn explore<R: Rng + ?Sized>(&self, request: &ExploreRequest<'_>, rng: &mut R) -> Exploration {
        let start_time = Instant::now();
        let catalog = Arc::clone(self.generator.catalog());
        let plan = plan_batches(catalog.len(), request.batch_size, request.max_batches);

        let mut order: Vec<String> = catalog.all().to_vec();
        order.shuffle(rng);

        let per_batch_request = (plan.batch_size * 2).min(MAX_REQUEST_PER_BATCH);
        let mut standouts = Vec::new();
        let mut explored = 0usize;
        let mut total_generated = 0usize;
        let mut batches_processed = 0usize;

        for (index, batch) in order.chunks(plan.batch_size).enumerate() {
            let batch_start = Instant::now();
            let candidates = self
                .batch_candidates(request, batch, per_batch_request)
                .await;
            let generated = candidates.len();
            total_generated += generated;

            let mut scored: Vec<(Candidate, f64)> = candidates
                .into_iter()
                .map(|c| {
                    let s = score(&c.domain, c.strategy, request.keywords);
                    (c, s)
                })
                .filter(|(_, s)| *s >= STANDOUT_THRESHOLD)
                .collect();
            scored.sort_by(|a, b| b.1.total_cmp(&a.1));
            scored.truncate(STANDOUTS_PER_BATCH);

            let kept = scored.len();
            standouts.extend(scored.into_iter().map(|(c, s)| standout(&catalog, c, s)));

            explored += batch.len();
            batches_processed += 1;

            tracing::info!(
                batch = %(index + 1),
                batches = %plan.batch_count,
                tlds = %batch.len(),
                generated = %generated,
                standouts = %kept,
                duration_ms = %batch_start.elapsed().as_millis(),
                "Exploration batch completed"
            );

            if index + 1 < plan.batch_count && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        standouts.sort_by(|a, b| b.score.total_cmp(&a.score));
        standouts.truncate(MAX_STANDOUTS);

        let total = catalog.len();
        let coverage_percent = if total == 0 {
            0.0
        } else {
            explored as f64 / total as f64 * 100.0
        };

        tracing::info!(
            tlds = %total,
            batches = %batches_processed,
            standouts = %standouts.len(),
            duration_ms = %start_time.elapsed().as_millis(),
            "Exploration completed"
        );

        Exploration {
            stats: ExplorationStats {
                total_combinations: total_generated,
                batches_processed,
                standout_count: standouts.len(),
                tlds_explored: explored,
                total_tlds: total,
                coverage_percent,
                creativity_level: request.creativity,
                batch_size_used: plan.batch_size,
                availability_checking: false,
            },
            standouts,
        }
    }

    /// Model suggestions for one batch, or keyword pairs when the model fails
    async fn batch_candidates(
        &self,
        request: &ExploreRequest<'_>,
        batch: &[String],
        count: usize,
    ) -> Vec<Candidate> {
        let found = self
            .generator
            .brainstorm(
                request.description,
                request.keywords,
                batch,
                count,
                request.creativity,
                Strategy::LlmIntelligentTld,
            )
            .await;

        match found {
            Ok(candidates) if !candidates.is_empty() => candidates,
            Ok(_) => {
                tracing::debug!(tlds = %batch.len(), "No usable model output for batch, using fallback");
                self.generator
                    .validate_unique(strategies::fallback_pairs(request.keywords, batch))
            }
            Err(e) => {
                tracing::warn!(error = %e, tlds = %batch.len(), "Batch generation failed, using fallback");
                self.generator
                    .validate_unique(strategies::fallback_pairs(request.keywords, batch))
            }
        }
    }
}

fn standout(catalog: &TldCatalog, candidate: Candidate, score: f64) -> ExplorationStandout {
    let tld = candidate.tld();
    let reason = standout_reason(catalog, &candidate, &tld);
    ExplorationStandout {
        domain: candidate.domain,
        score,
        strategy: candidate.strategy,
        tld,
        reason,
    }
}

/// One-line explanation built from the strategy and the TLD's category
pub fn standout_reason(catalog: &TldCatalog, candidate: &Candidate, tld: &str) -> String {
    let kind = match catalog.categories_of(tld).first() {
        Some(TldCategory::Tech) => "tech-focused",
        Some(TldCategory::Fun) => "playful",
        Some(TldCategory::Country) => "country-code",
        Some(TldCategory::Brand) => "brandable",
        None => "niche",
    };

    match candidate.strategy {
        Strategy::WordSlicing => format!(
            "'{}' and {} read as one word on a {} extension",
            candidate.base(),
            tld,
            kind
        ),
        Strategy::LlmIntelligentTld | Strategy::LlmCreative => format!(
            "{} pairs meaningfully with '{}' ({} extension)",
            tld,
            candidate.base(),
            kind
        ),
        Strategy::Fallback | Strategy::DirectKeyword => format!(
            "Exact keyword '{}' on a {} {} extension",
            candidate.base(),
            kind,
            tld
        ),
        other => format!("{} name on a {} {} extension", other, kind, tld),
    }
}
