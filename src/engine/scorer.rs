//! Heuristic domain quality score

use crate::types::{base_label, tld_of, Strategy};

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

const BASELINE: f64 = 3.0;
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// How the base label relates to the keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relevance {
    Exact,
    Partial,
    None,
}

/// Score a domain on a 1-10 scale in steps of 0.5.
///
/// Pure and deterministic: the same inputs always produce the same score.
pub fn score(domain: &str, strategy: Strategy, keywords: &[String]) -> f64 {
    let base = base_label(domain).to_lowercase();
    let tld = tld_of(domain).to_lowercase();
    let len = base.chars().count();

    let mut total = BASELINE;

    total += match len {
        4..=8 => 2.0,
        3..=12 => 1.0,
        _ => -1.0,
    };

    total += strategy.score_weight();
    total += tld_weight(&tld);

    let relevance = relevance(&base, keywords);
    total += match relevance {
        Relevance::Exact => 1.5,
        Relevance::Partial => 0.5,
        Relevance::None => -0.5,
    };

    let pronounceable = is_pronounceable(&base);
    total += if pronounceable { 1.0 } else { -1.0 };

    let has_digit = base.chars().any(|c| c.is_ascii_digit());
    let has_hyphen = base.contains('-');
    if has_digit {
        total -= 1.5;
    }
    if has_hyphen {
        total -= 2.0;
    }
    if len <= 2 {
        total -= 2.0;
    }
    if len >= 15 {
        total -= 1.0;
    }
    if has_long_run(&base, 4) {
        total -= 1.0;
    }
    if !base.chars().any(|c| VOWELS.contains(&c)) {
        total -= 1.5;
    }

    let premium_tld = matches!(tld.as_str(), ".com" | ".io" | ".ai");
    if (4..=7).contains(&len)
        && pronounceable
        && relevance != Relevance::None
        && premium_tld
        && !has_digit
        && !has_hyphen
    {
        total += 1.0;
    }

    round_half(total.clamp(MIN_SCORE, MAX_SCORE))
}

fn tld_weight(tld: &str) -> f64 {
    match tld {
        ".com" => 2.0,
        ".io" | ".ai" => 1.5,
        ".app" | ".dev" | ".co" => 1.0,
        ".net" | ".org" => 0.5,
        _ => 0.0,
    }
}

fn relevance(base: &str, keywords: &[String]) -> Relevance {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    if keywords.iter().any(|k| k == base) {
        Relevance::Exact
    } else if keywords
        .iter()
        .any(|k| !k.is_empty() && (base.contains(k.as_str()) || k.contains(base)))
    {
        Relevance::Partial
    } else {
        Relevance::None
    }
}

/// Vowel ratio within [0.2, 0.6] with at least one consonant
fn is_pronounceable(base: &str) -> bool {
    let len = base.chars().count();
    if len == 0 {
        return false;
    }
    let vowels = base.chars().filter(|c| VOWELS.contains(c)).count();
    let consonants = base
        .chars()
        .filter(|c| c.is_ascii_alphabetic() && !VOWELS.contains(c))
        .count();
    let ratio = vowels as f64 / len as f64;
    (0.2..=0.6).contains(&ratio) && consonants > 0
}

fn has_long_run(base: &str, run: usize) -> bool {
    let mut count = 0;
    let mut previous = None;
    for c in base.chars() {
        if Some(c) == previous {
            count += 1;
        } else {
            previous = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }
    false
}

fn round_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}
