//! Multi-strategy candidate generation

use super::strategies;
use crate::domain::DomainValidator;
use crate::error::Result;
use crate::keywords::unique_keywords;
use crate::llm::{build_brainstorm_prompt, parse_domain_lines, BrainstormPrompt, TextGenerator};
use crate::tld::TldCatalog;
use crate::types::{Candidate, CreativityLevel, Strategy};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// Share of the request handed to the text generator
const LLM_SHARE: f64 = 0.6;

/// Number of deterministic strategy slices sharing the remainder
const DETERMINISTIC_SLICES: usize = 6;

/// Per-strategy candidate quotas for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub llm: usize,
    pub direct: usize,
    pub slicing: usize,
    pub portmanteau: usize,
    /// Shared by creative-combination and creative-prefix
    pub creative: usize,
    pub vowel: usize,
    pub number: usize,
}

impl Budget {
    /// Split `count`: 60% (rounded up) to the text generator, the rest across
    /// the deterministic strategies with earlier ones taking the remainder
    pub fn for_count(count: usize) -> Self {
        let llm = ((count as f64) * LLM_SHARE).ceil() as usize;
        let rest = count.saturating_sub(llm);
        let share = rest / DETERMINISTIC_SLICES;
        let extra = rest % DETERMINISTIC_SLICES;
        let slice = |position: usize| share + usize::from(position < extra);

        Self {
            llm,
            direct: slice(0),
            slicing: slice(1),
            portmanteau: slice(2),
            creative: slice(3),
            vowel: slice(4),
            number: slice(5),
        }
    }

    /// Raise the direct-keyword slice to `floor`, taking slots from the last
    /// deterministic slices first. The total never changes.
    pub fn with_direct_floor(mut self, floor: usize) -> Self {
        while self.direct < floor {
            let donor = [
                &mut self.number,
                &mut self.vowel,
                &mut self.creative,
                &mut self.portmanteau,
                &mut self.slicing,
            ]
            .into_iter()
            .find(|slot| **slot > 0);
            match donor {
                Some(slot) => *slot -= 1,
                None => break,
            }
            self.direct += 1;
        }
        self
    }

    pub fn total(&self) -> usize {
        self.llm + self.direct + self.slicing + self.portmanteau + self.creative + self.vowel + self.number
    }
}

/// Inputs for one generation run
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub description: &'a str,
    pub keywords: &'a [String],
    /// Offered TLDs; model output outside this set is rejected
    pub tlds: &'a [String],
    pub count: usize,
    pub creativity: CreativityLevel,
}

/// Candidate generator combining deterministic strategies with a text generator
#[derive(Clone)]
pub struct CandidateGenerator {
    llm: Arc<dyn TextGenerator>,
    catalog: Arc<TldCatalog>,
    validator: DomainValidator,
}

impl CandidateGenerator {
    pub fn new(llm: Arc<dyn TextGenerator>, catalog: Arc<TldCatalog>) -> Self {
        Self {
            llm,
            catalog,
            validator: DomainValidator::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<TldCatalog> {
        &self.catalog
    }

    /// Produce up to `request.count` valid, unique candidates in shuffled order
    pub async fn generate<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest<'_>,
        rng: &mut R,
    ) -> Vec<Candidate> {
        let start_time = Instant::now();
        let keywords = unique_keywords(request.keywords);
        // TLD-major direct slice: one slot per keyword puts every keyword on the first TLD
        let budget = Budget::for_count(request.count)
            .with_direct_floor(keywords.len().min(strategies::DIRECT_KEYWORD_LIMIT));

        let mut pool = self.deterministic(&keywords, request.tlds, &budget);
        let deterministic_count = pool.len();

        let llm_candidates = match self
            .brainstorm(
                request.description,
                &keywords,
                request.tlds,
                budget.llm,
                request.creativity,
                Strategy::LlmCreative,
            )
            .await
        {
            Ok(found) if !found.is_empty() => found,
            Ok(_) => {
                tracing::warn!(provider = %self.llm.name(), "Text generator returned no usable domains, using fallback");
                strategies::fallback_pairs(&keywords, request.tlds)
            }
            Err(e) => {
                tracing::warn!(provider = %self.llm.name(), error = %e, "Text generation failed, using fallback");
                strategies::fallback_pairs(&keywords, request.tlds)
            }
        };
        pool.extend(llm_candidates.into_iter().take(budget.llm));

        let mut candidates = self.validate_unique(pool);
        candidates.shuffle(rng);
        candidates.truncate(request.count);

        tracing::info!(
            requested = %request.count,
            deterministic = %deterministic_count,
            generated = %candidates.len(),
            duration_ms = %start_time.elapsed().as_millis(),
            "Candidate generation completed"
        );

        candidates
    }

    /// Ask the text generator for `count` names restricted to `tlds`.
    ///
    /// Lines that fail validation or use a TLD outside `tlds` are dropped.
    pub async fn brainstorm(
        &self,
        description: &str,
        keywords: &[String],
        tlds: &[String],
        count: usize,
        creativity: CreativityLevel,
        strategy: Strategy,
    ) -> Result<Vec<Candidate>> {
        if count == 0 || tlds.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = build_brainstorm_prompt(&BrainstormPrompt {
            description,
            keywords,
            tlds,
            count,
            inspiration: creativity.inspiration_words(),
            match_tlds: strategy == Strategy::LlmIntelligentTld,
        });

        let text = self.llm.complete(&prompt, creativity.temperature()).await?;
        let validator = DomainValidator::new().with_tld_whitelist(tlds);
        let domains = parse_domain_lines(&text, &validator)?;

        let mut seen = HashSet::new();
        Ok(domains
            .into_iter()
            .filter(|d| seen.insert(d.clone()))
            .take(count)
            .map(|d| Candidate::new(d, strategy))
            .collect())
    }

    /// Leading slices of each deterministic strategy, in strategy order
    fn deterministic(&self, keywords: &[String], tlds: &[String], budget: &Budget) -> Vec<Candidate> {
        let mut pool = Vec::with_capacity(budget.total());
        pool.extend(strategies::direct_keyword(keywords, tlds).into_iter().take(budget.direct));
        pool.extend(
            strategies::word_slicing(keywords, self.catalog.all())
                .into_iter()
                .take(budget.slicing),
        );
        pool.extend(strategies::portmanteau(keywords, tlds).into_iter().take(budget.portmanteau));
        pool.extend(strategies::creative_affixes(keywords, tlds).into_iter().take(budget.creative));
        pool.extend(strategies::vowel_removal(keywords, tlds).into_iter().take(budget.vowel));
        pool.extend(strategies::number_substitution(keywords, tlds).into_iter().take(budget.number));
        pool
    }

    /// Drop invalid domains and later duplicates
    pub(crate) fn validate_unique(&self, pool: Vec<Candidate>) -> Vec<Candidate> {
        let mut seen = HashSet::new();
        pool.into_iter()
            .filter(|c| {
                if !self.validator.is_valid(&c.domain) {
                    tracing::debug!(domain = %c.domain, strategy = %c.strategy, "Dropping invalid candidate");
                    return false;
                }
                seen.insert(c.domain.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoutError;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct ScriptedLlm {
        reply: Option<String>,
    }

    #[async_trait]
    impl TextGenerator for ScriptedLlm {
        async fn complete(&self, _prompt: &str, _temperature: f32) -> Result<String> {
            self.reply
                .clone()
                .ok_or_else(|| ScoutError::provider("scripted", "unavailable", None))
        }

        fn name(&self) -> &'static str {
            "scripted"
        }

        fn is_ready(&self) -> bool {
            true
        }
    }

    fn generator(reply: Option<&str>) -> CandidateGenerator {
        CandidateGenerator::new(
            Arc::new(ScriptedLlm {
                reply: reply.map(str::to_string),
            }),
            Arc::new(TldCatalog::embedded()),
        )
    }

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_budget_split() {
        let budget = Budget::for_count(20);
        assert_eq!(budget.llm, 12);
        assert_eq!(
            (budget.direct, budget.slicing, budget.portmanteau, budget.creative, budget.vowel, budget.number),
            (2, 2, 1, 1, 1, 1)
        );
        assert_eq!(budget.total(), 20);

        let budget = Budget::for_count(1);
        assert_eq!(budget.llm, 1);
        assert_eq!(budget.total(), 1);

        for count in 1..=50 {
            assert_eq!(Budget::for_count(count).total(), count);
        }
    }

    #[test]
    fn test_direct_floor_keeps_total() {
        let budget = Budget::for_count(7).with_direct_floor(3);
        // 5 to the model leaves 2 deterministic slots
        assert_eq!(budget.llm, 5);
        assert_eq!(budget.direct, 2);
        assert_eq!(budget.slicing, 0);
        assert_eq!(budget.total(), 7);

        let budget = Budget::for_count(20).with_direct_floor(3);
        assert_eq!(
            (budget.direct, budget.slicing, budget.portmanteau, budget.creative, budget.vowel, budget.number),
            (3, 2, 1, 1, 1, 0)
        );

        assert_eq!(Budget::for_count(20).with_direct_floor(1), Budget::for_count(20));
        for count in 1..=50 {
            assert_eq!(Budget::for_count(count).with_direct_floor(5).total(), count);
        }
    }

    #[tokio::test]
    async fn test_small_counts_still_cover_later_keywords() {
        let generator = generator(None);
        let keywords = list(&["artisanal", "pickle", "factory"]);
        let tlds = list(&[".com", ".io", ".ai"]);

        for count in 5..=17 {
            let request = GenerationRequest {
                description: "artisanal pickle factory",
                keywords: &keywords,
                tlds: &tlds,
                count,
                creativity: CreativityLevel::Moderate,
            };
            let candidates = generator.generate(&request, &mut StdRng::seed_from_u64(3)).await;
            assert!(
                candidates
                    .iter()
                    .any(|c| c.strategy == Strategy::DirectKeyword && c.domain == "pickle.com"),
                "count {} lost pickle.com",
                count
            );
        }
    }

    #[tokio::test]
    async fn test_generate_mixes_strategies_without_duplicates() {
        let generator = generator(Some("brinebox.io\npickle.com\nfoo.invalidtld\njarly.ai"));
        let keywords = list(&["artisanal", "pickle", "factory"]);
        let tlds = list(&[".com", ".io", ".ai"]);
        let request = GenerationRequest {
            description: "artisanal pickle factory",
            keywords: &keywords,
            tlds: &tlds,
            count: 20,
            creativity: CreativityLevel::Moderate,
        };

        let mut rng = StdRng::seed_from_u64(7);
        let candidates = generator.generate(&request, &mut rng).await;

        assert!(!candidates.is_empty());
        assert!(candidates.len() <= 20);
        let unique: HashSet<_> = candidates.iter().map(|c| c.domain.clone()).collect();
        assert_eq!(unique.len(), candidates.len());

        // direct candidates win over identical model output
        let pickle = candidates.iter().find(|c| c.domain == "pickle.com").unwrap();
        assert_eq!(pickle.strategy, Strategy::DirectKeyword);
        assert!(candidates.iter().any(|c| c.strategy == Strategy::LlmCreative));
        assert!(candidates.iter().all(|c| c.domain != "foo.invalidtld"));
        assert!(candidates.iter().any(|c| c.domain == "artisan.al"));
    }

    #[tokio::test]
    async fn test_llm_failure_falls_back() {
        let generator = generator(None);
        let keywords = list(&["pickle", "jar"]);
        let tlds = list(&[".com", ".io"]);
        let request = GenerationRequest {
            description: "pickle jar",
            keywords: &keywords,
            tlds: &tlds,
            count: 10,
            creativity: CreativityLevel::Conservative,
        };

        let candidates = generator.generate(&request, &mut StdRng::seed_from_u64(1)).await;
        assert!(!candidates.is_empty());
        assert!(candidates.iter().any(|c| c.strategy == Strategy::Fallback));
        assert!(!candidates.iter().any(|c| c.strategy.is_llm()));
    }

    #[tokio::test]
    async fn test_same_seed_same_order() {
        let generator = generator(Some("brine.io"));
        let keywords = list(&["pickle", "factory"]);
        let tlds = list(&[".com", ".io"]);
        let request = GenerationRequest {
            description: "pickle factory",
            keywords: &keywords,
            tlds: &tlds,
            count: 15,
            creativity: CreativityLevel::Wild,
        };

        let first = generator.generate(&request, &mut StdRng::seed_from_u64(42)).await;
        let second = generator.generate(&request, &mut StdRng::seed_from_u64(42)).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_brainstorm_rejects_foreign_tlds() {
        let generator = generator(Some("1. pickle.io\n2. pickle.xyz\n3. pickle.io\nbrine.io"));
        let found = generator
            .brainstorm(
                "pickles",
                &list(&["pickle"]),
                &list(&[".io"]),
                5,
                CreativityLevel::Moderate,
                Strategy::LlmIntelligentTld,
            )
            .await
            .unwrap();

        let domains: Vec<&str> = found.iter().map(|c| c.domain.as_str()).collect();
        assert_eq!(domains, vec!["pickle.io", "brine.io"]);
        assert!(found.iter().all(|c| c.strategy == Strategy::LlmIntelligentTld));
    }
}
