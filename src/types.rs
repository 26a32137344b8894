//! Core types and structures for domain-scout

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Naming rule that produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    DirectKeyword,
    WordSlicing,
    Portmanteau,
    CreativeCombination,
    CreativePrefix,
    VowelRemoval,
    NumberSubstitution,
    LlmCreative,
    LlmIntelligentTld,
    Fallback,
}

impl Strategy {
    /// Additive score weight for this strategy
    pub fn score_weight(self) -> f64 {
        match self {
            Strategy::WordSlicing => 1.5,
            Strategy::LlmIntelligentTld | Strategy::LlmCreative | Strategy::Portmanteau => 1.0,
            Strategy::DirectKeyword
            | Strategy::CreativeCombination
            | Strategy::CreativePrefix => 0.5,
            Strategy::VowelRemoval | Strategy::Fallback => 0.0,
            Strategy::NumberSubstitution => -1.0,
        }
    }

    /// How inventive the strategy is, on a 0-10 scale
    pub fn creativity_points(self) -> f64 {
        match self {
            Strategy::DirectKeyword | Strategy::Fallback => 2.0,
            Strategy::NumberSubstitution | Strategy::VowelRemoval => 5.0,
            Strategy::CreativeCombination | Strategy::CreativePrefix => 6.0,
            Strategy::Portmanteau => 7.0,
            Strategy::LlmCreative => 8.0,
            Strategy::WordSlicing | Strategy::LlmIntelligentTld => 9.0,
        }
    }

    /// True for strategies backed by the text generator
    pub fn is_llm(self) -> bool {
        matches!(self, Strategy::LlmCreative | Strategy::LlmIntelligentTld)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::DirectKeyword => write!(f, "direct-keyword"),
            Strategy::WordSlicing => write!(f, "word-slicing"),
            Strategy::Portmanteau => write!(f, "portmanteau"),
            Strategy::CreativeCombination => write!(f, "creative-combination"),
            Strategy::CreativePrefix => write!(f, "creative-prefix"),
            Strategy::VowelRemoval => write!(f, "vowel-removal"),
            Strategy::NumberSubstitution => write!(f, "number-substitution"),
            Strategy::LlmCreative => write!(f, "llm-creative"),
            Strategy::LlmIntelligentTld => write!(f, "llm-intelligent-tld"),
            Strategy::Fallback => write!(f, "fallback"),
        }
    }
}

/// TLD selection mode for `suggest`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Standard,
    Competitive,
    Premium,
    Budget,
    International,
}

impl SearchMode {
    /// Parse a mode name; unknown or absent names fall back to `Standard`
    pub fn parse_or_default(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_lowercase()).as_deref() {
            Some("competitive") => SearchMode::Competitive,
            Some("premium") => SearchMode::Premium,
            Some("budget") => SearchMode::Budget,
            Some("international") => SearchMode::International,
            _ => SearchMode::Standard,
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Standard => write!(f, "standard"),
            SearchMode::Competitive => write!(f, "competitive"),
            SearchMode::Premium => write!(f, "premium"),
            SearchMode::Budget => write!(f, "budget"),
            SearchMode::International => write!(f, "international"),
        }
    }
}

/// Coarse creativity knob for deep exploration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreativityLevel {
    Conservative,
    #[default]
    Moderate,
    Wild,
}

impl CreativityLevel {
    /// Sampling temperature sent to the text generator
    pub fn temperature(self) -> f32 {
        match self {
            CreativityLevel::Conservative => 0.6,
            CreativityLevel::Moderate => 0.8,
            CreativityLevel::Wild => 1.0,
        }
    }

    /// Auxiliary inspiration words used in prompts and fallbacks
    pub fn inspiration_words(self) -> &'static [&'static str] {
        match self {
            CreativityLevel::Conservative => &["hq", "group", "pro", "works", "co"],
            CreativityLevel::Moderate => &["hub", "ly", "ify", "lab", "nest"],
            CreativityLevel::Wild => &["zap", "vibe", "nova", "pop", "zen"],
        }
    }
}

impl std::fmt::Display for CreativityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreativityLevel::Conservative => write!(f, "conservative"),
            CreativityLevel::Moderate => write!(f, "moderate"),
            CreativityLevel::Wild => write!(f, "wild"),
        }
    }
}

/// Generated domain candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub domain: String,
    pub strategy: Strategy,
}

impl Candidate {
    pub fn new(domain: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            domain: domain.into(),
            strategy,
        }
    }

    /// Portion of the domain before the first dot
    pub fn base(&self) -> &str {
        base_label(&self.domain)
    }

    /// Final label with its leading dot, e.g. `.com`
    pub fn tld(&self) -> String {
        tld_of(&self.domain)
    }
}

/// Portion of a domain before the first dot
pub fn base_label(domain: &str) -> &str {
    domain.split('.').next().unwrap_or(domain)
}

/// Final label of a domain with a leading dot
pub fn tld_of(domain: &str) -> String {
    match domain.rsplit_once('.') {
        Some((_, tld)) => format!(".{}", tld),
        None => String::new(),
    }
}

/// Normalized availability record shared by every provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainStatus {
    pub domain: String,
    pub available: bool,
    pub is_premium: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_price: Option<f64>,
}

impl DomainStatus {
    /// Record used when a lookup fails
    pub fn unavailable(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            available: false,
            is_premium: false,
            premium_price: None,
        }
    }
}

/// Candidate with score and availability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub domain: String,
    pub strategy: Strategy,
    pub available: bool,
    pub is_premium: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_price: Option<f64>,
    pub tld: String,
    pub score: f64,
}

impl ScoredResult {
    /// Combine a candidate, its score and an availability record
    pub fn new(candidate: &Candidate, score: f64, status: Option<&DomainStatus>) -> Self {
        Self {
            domain: candidate.domain.clone(),
            strategy: candidate.strategy,
            available: status.map_or(false, |s| s.available),
            is_premium: status.map_or(false, |s| s.is_premium),
            premium_price: status.and_then(|s| s.premium_price),
            tld: candidate.tld(),
            score,
        }
    }
}

/// High-scoring candidate from deep exploration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationStandout {
    pub domain: String,
    pub score: f64,
    pub strategy: Strategy,
    pub tld: String,
    pub reason: String,
}

/// Counters reported with a suggestion search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub total_generated: usize,
    pub total_checked: usize,
    pub available_count: usize,
    pub premium_count: usize,
    pub creativity_score: f64,
    pub strategies_used: Vec<Strategy>,
    pub mode: SearchMode,
    pub availability_checked: bool,
}

/// Response of `suggest`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub description: String,
    pub keywords: Vec<String>,
    pub tlds_considered: Vec<String>,
    pub available: Vec<ScoredResult>,
    pub taken: Vec<ScoredResult>,
    pub premium: Vec<ScoredResult>,
    pub insights: Vec<String>,
    pub stats: SearchStats,
    pub generated_at: DateTime<Utc>,
}

/// Counters reported with a deep exploration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationStats {
    pub total_combinations: usize,
    pub batches_processed: usize,
    pub standout_count: usize,
    pub tlds_explored: usize,
    pub total_tlds: usize,
    pub coverage_percent: f64,
    pub creativity_level: CreativityLevel,
    pub batch_size_used: usize,
    pub availability_checking: bool,
}

/// Response of `exploreDeep`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepTldResult {
    pub description: String,
    pub keywords: Vec<String>,
    pub standouts: Vec<ExplorationStandout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_standouts: Option<Vec<ScoredResult>>,
    pub insights: Vec<String>,
    pub stats: ExplorationStats,
    pub generated_at: DateTime<Utc>,
}

/// Availability backend family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityBackend {
    /// Registrar batch API with explicit availability and premium flags
    NameCom,
    /// Status lookup API with summary-derived availability
    #[default]
    Domainr,
}

impl std::fmt::Display for AvailabilityBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityBackend::NameCom => write!(f, "namecom"),
            AvailabilityBackend::Domainr => write!(f, "domainr"),
        }
    }
}

/// Availability provider configuration
#[derive(Debug, Clone, Default)]
pub struct AvailabilityConfig {
    pub backend: AvailabilityBackend,
    pub namecom_username: Option<String>,
    pub namecom_token: Option<String>,
    pub namecom_base_url: Option<String>,
    pub domainr_api_key: Option<String>,
    pub domainr_base_url: Option<String>,
}

/// LLM configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: String,
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4.1-mini".to_string(),
            api_key: String::new(),
            base_url: None,
        }
    }
}
