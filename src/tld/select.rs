//! Mode and industry driven TLD selection

use crate::types::SearchMode;
use std::collections::HashSet;

/// Upper bound on TLDs returned by [`select_tlds`]
pub const MAX_SELECTED_TLDS: usize = 50;

const STANDARD_TLDS: &[&str] = &[".com", ".net", ".org", ".io", ".co", ".app", ".dev", ".ai"];

const COMPETITIVE_TLDS: &[&str] = &[
    ".com", ".io", ".ai", ".co", ".app", ".dev", ".tech", ".xyz", ".me", ".ly",
];

const PREMIUM_TLDS: &[&str] = &[".com", ".ai", ".io", ".app", ".dev", ".co"];

const BUDGET_TLDS: &[&str] = &[
    ".xyz", ".online", ".site", ".store", ".tech", ".space", ".website", ".fun", ".club", ".info",
];

const INTERNATIONAL_TLDS: &[&str] = &[
    ".com", ".co", ".uk", ".de", ".fr", ".ca", ".au", ".eu", ".es", ".it", ".nl", ".jp", ".in",
    ".io",
];

/// Industry term list and the TLDs it implies
struct Industry {
    terms: &'static [&'static str],
    tlds: &'static [&'static str],
}

const INDUSTRIES: &[Industry] = &[
    // tech
    Industry {
        terms: &["tech", "software", "app", "code", "dev", "data", "cloud", "digital", "web", "cyber", "robot"],
        tlds: &[".tech", ".dev", ".app", ".io", ".ai", ".software", ".cloud", ".digital"],
    },
    // finance
    Industry {
        terms: &["financ", "bank", "money", "pay", "invest", "capital", "fund", "crypto", "loan", "credit"],
        tlds: &[".finance", ".money", ".capital", ".fund", ".exchange", ".credit", ".financial"],
    },
    // health
    Industry {
        terms: &["health", "medic", "care", "clinic", "wellness", "fitness", "doctor", "pharma", "dental"],
        tlds: &[".health", ".care", ".clinic", ".fitness", ".doctor", ".healthcare", ".dental"],
    },
    // food
    Industry {
        terms: &[
            "food", "restaurant", "cafe", "kitchen", "bakery", "cook", "recipe", "chef", "coffee", "grocer",
            "deli", "bistro", "catering", "snack", "pizza",
        ],
        tlds: &[".food", ".restaurant", ".cafe", ".kitchen", ".recipes", ".pizza", ".coffee"],
    },
    // travel
    Industry {
        terms: &["travel", "trip", "tour", "hotel", "vacation", "flight", "adventure", "voyage"],
        tlds: &[".travel", ".tours", ".holiday", ".flights", ".vacations", ".voyage"],
    },
    // education
    Industry {
        terms: &["educat", "learn", "school", "course", "teach", "academy", "tutor", "study"],
        tlds: &[".education", ".academy", ".school", ".courses", ".university", ".training"],
    },
];

/// Base list for a search mode
pub fn mode_base_tlds(mode: SearchMode) -> &'static [&'static str] {
    match mode {
        SearchMode::Standard => STANDARD_TLDS,
        SearchMode::Competitive => COMPETITIVE_TLDS,
        SearchMode::Premium => PREMIUM_TLDS,
        SearchMode::Budget => BUDGET_TLDS,
        SearchMode::International => INTERNATIONAL_TLDS,
    }
}

/// TLDs implied by industries the keywords mention, in industry table order
pub fn industry_tlds(keywords: &[String]) -> Vec<&'static str> {
    INDUSTRIES
        .iter()
        .filter(|industry| {
            keywords
                .iter()
                .any(|kw| industry.terms.iter().any(|term| kw.contains(term)))
        })
        .flat_map(|industry| industry.tlds.iter().copied())
        .collect()
}

/// Mode base list followed by industry additions, deduplicated, capped at 50
pub fn select_tlds(mode: SearchMode, keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    mode_base_tlds(mode)
        .iter()
        .copied()
        .chain(industry_tlds(keywords))
        .filter(|tld| seen.insert(*tld))
        .take(MAX_SELECTED_TLDS)
        .map(str::to_string)
        .collect()
}
