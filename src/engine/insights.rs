//! Human-readable summaries of a search or exploration

use crate::tld::{TldCatalog, TldCategory};
use crate::types::{base_label, ExplorationStandout, ExplorationStats, ScoredResult, Strategy};
use std::collections::HashMap;

/// Mean creativity points of the strategies, one decimal; 0 for no results
pub fn creativity_score<I>(strategies: I) -> f64
where
    I: IntoIterator<Item = Strategy>,
{
    let (sum, count) = strategies
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), s| (sum + s.creativity_points(), count + 1));
    if count == 0 {
        return 0.0;
    }
    (sum / count as f64 * 10.0).round() / 10.0
}

/// Distinct strategies in order of first appearance
pub fn strategies_used<'a, I>(results: I) -> Vec<Strategy>
where
    I: IntoIterator<Item = &'a ScoredResult>,
{
    let mut used = Vec::new();
    for result in results {
        if !used.contains(&result.strategy) {
            used.push(result.strategy);
        }
    }
    used
}

/// Most frequent strategy; ties go to the one seen first
fn top_strategy<'a, I>(results: I) -> Option<(Strategy, usize)>
where
    I: IntoIterator<Item = &'a ScoredResult>,
{
    let results: Vec<&ScoredResult> = results.into_iter().collect();
    let mut counts: HashMap<Strategy, usize> = HashMap::new();
    for r in &results {
        *counts.entry(r.strategy).or_default() += 1;
    }
    strategies_used(results.iter().copied())
        .into_iter()
        .map(|s| (s, counts[&s]))
        .fold(None, |best, (s, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((s, n)),
        })
}

/// Narrative for a `suggest` result. Lists are expected sorted by score.
pub fn suggestion_insights(
    available: &[ScoredResult],
    taken: &[ScoredResult],
    premium: &[ScoredResult],
    availability_checked: bool,
) -> Vec<String> {
    let mut insights = Vec::new();
    let total = available.len() + taken.len() + premium.len();

    if total == 0 {
        insights.push("No valid domain candidates could be generated; try a more descriptive prompt".to_string());
        return insights;
    }

    if availability_checked {
        match available.first() {
            Some(best) => insights.push(format!(
                "Top available pick: {} (score {:.1})",
                best.domain, best.score
            )),
            None => insights.push("None of the checked candidates are available right now".to_string()),
        }
        insights.push(format!(
            "{} of {} candidates are available ({:.0}%)",
            available.len(),
            total,
            available.len() as f64 / total as f64 * 100.0
        ));
        if !premium.is_empty() {
            let priced: Vec<String> = premium
                .iter()
                .filter_map(|r| r.premium_price.map(|p| format!("{} (${:.2})", r.domain, p)))
                .take(3)
                .collect();
            if priced.is_empty() {
                insights.push(format!("{} premium domains are registrable at a higher price", premium.len()));
            } else {
                insights.push(format!("Premium options: {}", priced.join(", ")));
            }
        }
    } else {
        insights.push("Availability was not checked; run checkAvailability on your favorites".to_string());
    }

    let all = available.iter().chain(premium).chain(taken);
    if let Some((strategy, count)) = top_strategy(all) {
        insights.push(format!("Most productive strategy: {} ({} names)", strategy, count));
    }

    let short: Vec<&str> = available
        .iter()
        .chain(premium)
        .filter(|r| base_label(&r.domain).len() <= 6)
        .map(|r| r.domain.as_str())
        .take(3)
        .collect();
    if !short.is_empty() {
        insights.push(format!("Short names worth a look: {}", short.join(", ")));
    }

    let com_open = available.iter().filter(|r| r.tld == ".com").count();
    if availability_checked && com_open == 0 {
        insights.push("No .com is open; consider .io, .ai or .co alternatives".to_string());
    } else if com_open > 0 {
        insights.push(format!("{} .com domains are still open", com_open));
    }

    insights
}

/// Narrative for an exploration run
pub fn exploration_insights(
    catalog: &TldCatalog,
    standouts: &[ExplorationStandout],
    available: Option<&[ScoredResult]>,
    stats: &ExplorationStats,
) -> Vec<String> {
    let mut insights = vec![format!(
        "Explored {} of {} TLDs in {} batches of up to {}",
        stats.tlds_explored, stats.total_tlds, stats.batches_processed, stats.batch_size_used
    )];

    let Some(best) = standouts.first() else {
        insights.push("No combination cleared the standout threshold".to_string());
        return insights;
    };
    insights.push(format!("Strongest find: {} (score {:.1})", best.domain, best.score));

    let mut spread: Vec<(TldCategory, usize)> = [
        TldCategory::Tech,
        TldCategory::Fun,
        TldCategory::Country,
        TldCategory::Brand,
    ]
    .into_iter()
    .map(|category| {
        let n = standouts
            .iter()
            .filter(|s| catalog.categories_of(&s.tld).contains(&category))
            .count();
        (category, n)
    })
    .filter(|(_, n)| *n > 0)
    .collect();
    spread.sort_by(|a, b| b.1.cmp(&a.1));
    if !spread.is_empty() {
        let parts: Vec<String> = spread.iter().map(|(c, n)| format!("{} {}", n, c)).collect();
        insights.push(format!("Standouts by TLD category: {}", parts.join(", ")));
    }

    let hacks = standouts
        .iter()
        .filter(|s| s.strategy == Strategy::WordSlicing)
        .count();
    if hacks > 0 {
        insights.push(format!("{} standouts are domain hacks where the TLD completes the word", hacks));
    }

    if let Some(available) = available {
        insights.push(format!(
            "{} of {} standouts are available to register",
            available.len(),
            standouts.len()
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Candidate, CreativityLevel};

    fn result(domain: &str, strategy: Strategy, available: bool, score: f64) -> ScoredResult {
        let mut r = ScoredResult::new(&Candidate::new(domain, strategy), score, None);
        r.available = available;
        r
    }

    #[test]
    fn test_creativity_score() {
        assert_eq!(creativity_score(Vec::new()), 0.0);
        assert_eq!(creativity_score([Strategy::WordSlicing, Strategy::DirectKeyword]), 5.5);
    }

    #[test]
    fn test_strategies_used_order() {
        let results = vec![
            result("a1.io", Strategy::Portmanteau, true, 7.0),
            result("a2.io", Strategy::LlmCreative, true, 7.0),
            result("a3.io", Strategy::Portmanteau, true, 7.0),
        ];
        assert_eq!(
            strategies_used(&results),
            vec![Strategy::Portmanteau, Strategy::LlmCreative]
        );
        assert_eq!(top_strategy(&results), Some((Strategy::Portmanteau, 2)));
    }

    #[test]
    fn test_suggestion_insights() {
        let available = vec![result("brine.com", Strategy::LlmCreative, true, 9.0)];
        let taken = vec![result("pickle.com", Strategy::DirectKeyword, false, 10.0)];
        let insights = suggestion_insights(&available, &taken, &[], true);

        assert!(insights[0].contains("brine.com"));
        assert!(insights[1].contains("1 of 2"));
        assert!(insights.iter().any(|i| i.contains(".com domains are still open")));
    }

    #[test]
    fn test_unchecked_and_empty() {
        let insights = suggestion_insights(&[], &[result("pickle.io", Strategy::DirectKeyword, false, 9.0)], &[], false);
        assert!(insights[0].contains("not checked"));
        assert_eq!(suggestion_insights(&[], &[], &[], true).len(), 1);
    }

    #[test]
    fn test_exploration_insights() {
        let catalog = TldCatalog::embedded();
        let standouts = vec![ExplorationStandout {
            domain: "artisan.al".to_string(),
            score: 8.0,
            strategy: Strategy::WordSlicing,
            tld: ".al".to_string(),
            reason: String::new(),
        }];
        let stats = ExplorationStats {
            total_combinations: 10,
            batches_processed: 1,
            standout_count: 1,
            tlds_explored: 10,
            total_tlds: 10,
            coverage_percent: 100.0,
            creativity_level: CreativityLevel::Moderate,
            batch_size_used: 10,
            availability_checking: false,
        };

        let insights = exploration_insights(&catalog, &standouts, None, &stats);
        assert!(insights[0].contains("10 of 10"));
        assert!(insights.iter().any(|i| i.contains("1 country")));
        assert!(insights.iter().any(|i| i.contains("domain hacks")));
    }
}
