//! Prompt construction and line-oriented response parsing

use crate::domain::DomainValidator;
use crate::error::{Result, ScoutError};
use regex::Regex;

/// Inputs for a brainstorming prompt
#[derive(Debug, Clone)]
pub struct BrainstormPrompt<'a> {
    pub description: &'a str,
    pub keywords: &'a [String],
    /// Offered TLDs, each with a leading dot
    pub tlds: &'a [String],
    pub count: usize,
    pub inspiration: &'a [&'static str],
    /// Ask the model to pair names with the best-fitting TLD from the list
    pub match_tlds: bool,
}

/// Build domain brainstorming prompt
pub fn build_brainstorm_prompt(prompt: &BrainstormPrompt<'_>) -> String {
    let focus = if prompt.match_tlds {
        "Pick, for every name, the TLD from the list whose meaning fits it best. \
         Prefer names where the TLD completes a word (like artisan.al or brew.ery)."
    } else {
        "Favor short, brandable, pronounceable names."
    };

    format!(
        "Generate {} creative domain names for: {}

Keywords: {}
Allowed TLDs (use ONLY these): {}
Inspiration words: {}

{}

Return ONLY the domains, one per line, with no numbering, explanations or extra text.",
        prompt.count,
        prompt.description,
        prompt.keywords.join(", "),
        prompt.tlds.join(", "),
        prompt.inspiration.join(", "),
        focus
    )
}

/// Extract domain names from free-form model output.
///
/// Lines containing `:` or starting with `-` are commentary and are skipped.
/// Enumeration prefixes, bullets, quotes and backticks are stripped; only the
/// first token of a line is considered. Names that fail `validator` are
/// dropped. Order follows the text.
pub fn parse_domain_lines(text: &str, validator: &DomainValidator) -> Result<Vec<String>> {
    let enumeration = Regex::new(r"^\d+[.)]\s*")
        .map_err(|e| ScoutError::internal(format!("Invalid enumeration pattern: {}", e)))?;

    let mut domains = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.contains(':') || line.starts_with('-') {
            continue;
        }

        let line = enumeration.replace(line, "");
        let line = line.trim_start_matches(|c: char| c == '*' || c == '•' || c.is_whitespace());
        let cleaned: String = line
            .chars()
            .filter(|c| !matches!(c, '"' | '\'' | '`'))
            .collect();

        let Some(token) = cleaned.split_whitespace().next() else {
            continue;
        };
        let candidate = token.trim_end_matches(|c| c == '.' || c == ',').to_lowercase();

        match validator.validate(&candidate) {
            Ok(validated) => domains.push(validated.full_domain),
            Err(e) => tracing::debug!(line = %candidate, error = %e, "Discarded model output line"),
        }
    }

    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_decoration() {
        let text = "Here are some ideas:\n\
                    1. pickle.io\n\
                    2) `brine.ai`\n\
                    * \"jarworks.co\" - crunchy\n\
                    • artisan.al,\n\
                    - not-a-domain.com\n\
                    \n\
                    Factory.App.";
        let domains = parse_domain_lines(text, &DomainValidator::new()).unwrap();
        assert_eq!(
            domains,
            vec!["pickle.io", "brine.ai", "jarworks.co", "artisan.al", "factory.app"]
        );
    }

    #[test]
    fn test_parse_respects_tld_whitelist() {
        let validator = DomainValidator::new().with_tld_whitelist([".io"]);
        let domains = parse_domain_lines("pickle.io\npickle.xyz\nnodot", &validator).unwrap();
        assert_eq!(domains, vec!["pickle.io"]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_domain_lines("", &DomainValidator::new()).unwrap().is_empty());
    }

    #[test]
    fn test_prompt_lists_inputs() {
        let keywords = vec!["pickle".to_string(), "factory".to_string()];
        let tlds = vec![".io".to_string(), ".al".to_string()];
        let prompt = build_brainstorm_prompt(&BrainstormPrompt {
            description: "artisanal pickle factory",
            keywords: &keywords,
            tlds: &tlds,
            count: 12,
            inspiration: &["hub", "ly"],
            match_tlds: true,
        });

        assert!(prompt.starts_with("Generate 12 creative domain names for: artisanal pickle factory"));
        assert!(prompt.contains("pickle, factory"));
        assert!(prompt.contains(".io, .al"));
        assert!(prompt.contains("hub, ly"));
        assert!(prompt.contains("fits it best"));
    }
}
