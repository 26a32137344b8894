//! Deterministic naming strategies
//!
//! Each function yields candidates in a fixed natural order. Callers take a
//! leading prefix of that order as the strategy's share of the budget.

use crate::types::{Candidate, Strategy};

/// Affixes used by the creative strategies
pub const CREATIVE_WORDS: &[&str] = &[
    "hub", "lab", "ly", "ify", "hq", "go", "get", "try", "my", "pro", "box", "nest", "works",
    "craft", "base", "spot", "zone", "wise", "mate", "kit", "flow", "loop", "forge", "verse",
    "path", "shop", "deck", "dock", "yard", "nova",
];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Letter groups replaced by digits, applied in order
const NUMBER_SUBSTITUTIONS: &[(&str, &str)] = &[("to", "2"), ("for", "4"), ("ate", "8")];

fn join(base: &str, tld: &str) -> String {
    format!("{}{}", base, tld)
}

/// Keywords used by the direct-keyword strategy
pub const DIRECT_KEYWORD_LIMIT: usize = 5;

/// `{keyword}{tld}` over the first 5 keywords and first 10 TLDs, TLD-major
pub fn direct_keyword(keywords: &[String], tlds: &[String]) -> Vec<Candidate> {
    tlds.iter()
        .take(10)
        .flat_map(|tld| {
            keywords
                .iter()
                .take(DIRECT_KEYWORD_LIMIT)
                .map(move |kw| Candidate::new(join(kw, tld), Strategy::DirectKeyword))
        })
        .collect()
}

/// Keywords whose ending spells a TLD, e.g. `artisanal` -> `artisan.al`
pub fn word_slicing(keywords: &[String], catalog: &[String]) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for kw in keywords {
        for tld in catalog {
            let suffix = tld.trim_start_matches('.');
            if let Some(prefix) = kw.strip_suffix(suffix) {
                if prefix.chars().count() >= 3 {
                    candidates.push(Candidate::new(join(prefix, tld), Strategy::WordSlicing));
                }
            }
        }
    }
    candidates
}

/// Front half of one keyword joined to the back half of a later one
pub fn portmanteau(keywords: &[String], tlds: &[String]) -> Vec<Candidate> {
    let words: Vec<Vec<char>> = keywords.iter().take(6).map(|k| k.chars().collect()).collect();
    let mut candidates = Vec::new();

    for i in 0..words.len() {
        for j in (i + 1)..words.len() {
            let head_len = (words[i].len() + 1) / 2;
            let tail_start = words[j].len() / 2;
            let blend: String = words[i][..head_len]
                .iter()
                .chain(&words[j][tail_start..])
                .collect();

            for tld in tlds.iter().take(5) {
                candidates.push(Candidate::new(join(&blend, tld), Strategy::Portmanteau));
            }
        }
    }
    candidates
}

/// Keyword with a creative word appended and prepended, interleaved
pub fn creative_affixes(keywords: &[String], tlds: &[String]) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for kw in keywords.iter().take(3) {
        for word in CREATIVE_WORDS {
            for tld in tlds.iter().take(3) {
                candidates.push(Candidate::new(
                    format!("{}{}{}", kw, word, tld),
                    Strategy::CreativeCombination,
                ));
                candidates.push(Candidate::new(
                    format!("{}{}{}", word, kw, tld),
                    Strategy::CreativePrefix,
                ));
            }
        }
    }
    candidates
}

/// Keyword with vowels dropped, kept when 3-6 characters remain
pub fn vowel_removal(keywords: &[String], tlds: &[String]) -> Vec<Candidate> {
    keywords
        .iter()
        .filter_map(|kw| {
            let stripped: String = kw.chars().filter(|c| !VOWELS.contains(c)).collect();
            (3..=6).contains(&stripped.chars().count()).then_some(stripped)
        })
        .flat_map(|base| {
            tlds.iter()
                .take(5)
                .map(move |tld| Candidate::new(join(&base, tld), Strategy::VowelRemoval))
        })
        .collect()
}

/// Keyword with `to`/`for`/`ate` replaced by digits, kept only when changed
pub fn number_substitution(keywords: &[String], tlds: &[String]) -> Vec<Candidate> {
    keywords
        .iter()
        .filter_map(|kw| {
            let replaced = NUMBER_SUBSTITUTIONS
                .iter()
                .fold(kw.clone(), |acc, (from, to)| acc.replace(from, to));
            (replaced != *kw).then_some(replaced)
        })
        .flat_map(|base| {
            tlds.iter()
                .take(5)
                .map(move |tld| Candidate::new(join(&base, tld), Strategy::NumberSubstitution))
        })
        .collect()
}

/// Plain keyword pairs used when the text generator yields nothing,
/// first 5 keywords by first 10 TLDs, keyword-major
pub fn fallback_pairs(keywords: &[String], tlds: &[String]) -> Vec<Candidate> {
    keywords
        .iter()
        .take(5)
        .flat_map(|kw| {
            tlds.iter()
                .take(10)
                .map(move |tld| Candidate::new(join(kw, tld), Strategy::Fallback))
        })
        .collect()
}
