//! Domain name syntax validation

use crate::error::{Result, ScoutError};
use crate::tld::normalize_tld;
use std::collections::HashSet;

/// Domain name validator
#[derive(Debug, Clone, Default)]
pub struct DomainValidator {
    tld_whitelist: Option<HashSet<String>>,
}

impl DomainValidator {
    /// Create a new domain validator
    pub fn new() -> Self {
        Self { tld_whitelist: None }
    }

    /// Only accept domains whose final label is one of `tlds` (dot optional)
    pub fn with_tld_whitelist<I, S>(mut self, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tld_whitelist = Some(
            tlds.into_iter()
                .filter_map(|t| normalize_tld(t.as_ref()))
                .collect(),
        );
        self
    }

    /// Validate a domain name
    pub fn validate(&self, domain: &str) -> Result<ValidatedDomain> {
        let domain = domain.trim().to_lowercase();

        self.validate_format(&domain)?;

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return Err(ScoutError::validation(format!(
                "'{}' must contain at least one dot",
                domain
            )));
        }

        for label in &labels {
            self.validate_label(label)?;
        }

        let name = labels[0];
        if name.len() < 2 {
            return Err(ScoutError::validation(format!(
                "Base label '{}' too short (min 2 characters)",
                name
            )));
        }

        let tld = labels[labels.len() - 1];
        self.validate_tld(tld)?;

        Ok(ValidatedDomain {
            name: name.to_string(),
            tld: format!(".{}", tld),
            full_domain: domain.clone(),
        })
    }

    /// Non-failing form of [`validate`](Self::validate)
    pub fn is_valid(&self, domain: &str) -> bool {
        self.validate(domain).is_ok()
    }

    /// Validate overall shape and character set
    fn validate_format(&self, domain: &str) -> Result<()> {
        if domain.is_empty() {
            return Err(ScoutError::validation("Domain name cannot be empty"));
        }

        if domain.len() > 253 {
            return Err(ScoutError::validation("Domain name too long (max 253 characters)"));
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-')
        {
            return Err(ScoutError::validation(format!(
                "'{}' contains invalid characters",
                domain
            )));
        }

        Ok(())
    }

    /// Validate one dot-separated label
    fn validate_label(&self, label: &str) -> Result<()> {
        if label.is_empty() {
            return Err(ScoutError::validation("Domain label cannot be empty"));
        }

        if label.len() > 63 {
            return Err(ScoutError::validation("Domain label too long (max 63 characters)"));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(ScoutError::validation(format!(
                "Label '{}' cannot start or end with hyphen",
                label
            )));
        }

        if label.contains("--") {
            return Err(ScoutError::validation(format!(
                "Label '{}' cannot contain consecutive hyphens",
                label
            )));
        }

        Ok(())
    }

    /// Validate the final label
    fn validate_tld(&self, tld: &str) -> Result<()> {
        if tld.len() < 2 {
            return Err(ScoutError::validation("TLD too short (min 2 characters)"));
        }

        if !tld.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ScoutError::validation(format!("Invalid TLD format: .{}", tld)));
        }

        if let Some(whitelist) = &self.tld_whitelist {
            let dotted = format!(".{}", tld);
            if !whitelist.contains(&dotted) {
                return Err(ScoutError::validation(format!(
                    "TLD '{}' not in the offered set",
                    dotted
                )));
            }
        }

        Ok(())
    }
}

/// Domain that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDomain {
    /// Base label (before the first dot)
    pub name: String,
    /// Final label with leading dot
    pub tld: String,
    pub full_domain: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_validation() {
        let validator = DomainValidator::new();

        assert!(validator.validate("example.com").is_ok());
        assert!(validator.validate("sub.example.com").is_ok());
        assert!(validator.validate("test-domain.org").is_ok());
        assert!(validator.validate("ab.io").is_ok());
        assert!(validator.validate("pick2.ai").is_ok());

        assert!(validator.validate("").is_err());
        assert!(validator.validate("invalid").is_err());
        assert!(validator.validate("-invalid.com").is_err());
        assert!(validator.validate("invalid-.com").is_err());
        assert!(validator.validate("dou--ble.com").is_err());
        assert!(validator.validate("a.com").is_err());
        assert!(validator.validate("example.c").is_err());
        assert!(validator.validate("example.c0m").is_err());
        assert!(validator.validate("exa mple.com").is_err());
        assert!(validator.validate("example..com").is_err());
    }

    #[test]
    fn test_label_length_bounds() {
        let validator = DomainValidator::new();
        let longest = format!("{}.com", "a".repeat(63));
        let too_long = format!("{}.com", "a".repeat(64));

        assert!(validator.validate(&longest).is_ok());
        assert!(validator.validate(&too_long).is_err());
    }

    #[test]
    fn test_tld_whitelist() {
        let validator = DomainValidator::new().with_tld_whitelist([".com", "org"]);

        assert!(validator.validate("example.com").is_ok());
        assert!(validator.validate("example.org").is_ok());
        assert!(validator.validate("example.net").is_err());
    }

    #[test]
    fn test_parts_and_normalization() {
        let validated = DomainValidator::new().validate("  Artisan.AL ").unwrap();

        assert_eq!(validated.name, "artisan");
        assert_eq!(validated.tld, ".al");
        assert_eq!(validated.full_domain, "artisan.al");
    }
}
