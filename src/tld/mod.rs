//! TLD catalog and category indices
//!
//! The catalog is loaded once per service and shared read-only. Category
//! slices are computed at construction so later lookups never rescan.

pub mod select;

pub use select::{industry_tlds, mode_base_tlds, select_tlds, MAX_SELECTED_TLDS};

use crate::error::{Result, ScoutError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Flat list shipped with the crate
const EMBEDDED_TLDS: &str = include_str!("tlds.txt");

/// Developer and startup oriented extensions
pub const TECH_TLDS: &[&str] = &[
    ".io", ".ai", ".tech", ".dev", ".app", ".software", ".cloud", ".digital", ".systems",
    ".technology", ".computer", ".network", ".codes", ".host", ".hosting", ".online", ".site",
    ".website", ".email", ".page",
];

/// Playful extensions
pub const FUN_TLDS: &[&str] = &[
    ".fun", ".lol", ".wtf", ".ninja", ".rocks", ".cool", ".party", ".guru", ".pizza", ".fail",
    ".buzz", ".fyi", ".moe", ".pink", ".dance", ".game", ".games", ".love", ".wiki", ".ooo",
    ".life", ".live",
];

/// Extensions commonly used as brand names
pub const BRAND_TLDS: &[&str] = &[
    ".co", ".io", ".ly", ".me", ".xyz", ".club", ".studio", ".design", ".agency", ".media",
    ".world", ".one", ".plus", ".global", ".group", ".works", ".zone", ".space", ".store",
    ".shop", ".vip", ".top",
];

/// Named TLD category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TldCategory {
    Tech,
    Fun,
    Country,
    Brand,
}

impl std::fmt::Display for TldCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TldCategory::Tech => write!(f, "tech"),
            TldCategory::Fun => write!(f, "fun"),
            TldCategory::Country => write!(f, "country"),
            TldCategory::Brand => write!(f, "brand"),
        }
    }
}

/// Ordered, immutable set of TLDs with precomputed categories
#[derive(Debug, Clone)]
pub struct TldCatalog {
    tlds: Vec<String>,
    index: HashSet<String>,
    tech: Vec<String>,
    fun: Vec<String>,
    country: Vec<String>,
    brand: Vec<String>,
}

impl TldCatalog {
    /// Build a catalog from raw entries.
    ///
    /// Entries are trimmed, lowercased and given a leading dot. Malformed
    /// entries are skipped, duplicates keep their first position.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tlds = Vec::new();
        let mut index = HashSet::new();

        for entry in entries {
            let Some(tld) = normalize_tld(entry.as_ref()) else {
                tracing::debug!(entry = %entry.as_ref(), "Skipping malformed TLD entry");
                continue;
            };
            if index.insert(tld.clone()) {
                tlds.push(tld);
            }
        }

        if tlds.is_empty() {
            return Err(ScoutError::config("TLD catalog is empty"));
        }

        let pick = |list: &[&str]| -> Vec<String> {
            tlds.iter()
                .filter(|t| list.contains(&t.as_str()))
                .cloned()
                .collect()
        };
        let tech = pick(TECH_TLDS);
        let fun = pick(FUN_TLDS);
        let brand = pick(BRAND_TLDS);
        let country = tlds.iter().filter(|t| t.len() == 3).cloned().collect();

        Ok(Self {
            tlds,
            index,
            tech,
            fun,
            country,
            brand,
        })
    }

    /// Parse a flat list: one TLD per line, `#` comments and blank lines ignored
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Catalog shipped with the crate
    pub fn embedded() -> Self {
        match Self::parse(EMBEDDED_TLDS) {
            Ok(catalog) => catalog,
            // The embedded list is non-empty, so this arm only guards edits to it.
            Err(_) => Self::fallback(),
        }
    }

    /// Load a flat list from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ScoutError::config(format!("Cannot read TLD list {}: {}", path.display(), e))
        })?;
        let catalog = Self::parse(&text)?;
        tracing::info!(path = %path.display(), tlds = catalog.len(), "Loaded TLD catalog");
        Ok(catalog)
    }

    fn fallback() -> Self {
        let tlds: Vec<String> = [".com", ".net", ".org", ".io", ".ai", ".co"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        Self {
            index: tlds.iter().cloned().collect(),
            tech: vec![".io".to_string(), ".ai".to_string()],
            fun: Vec::new(),
            country: vec![".io".to_string(), ".ai".to_string(), ".co".to_string()],
            brand: vec![".co".to_string(), ".io".to_string()],
            tlds,
        }
    }

    /// Every TLD in catalog order
    pub fn all(&self) -> &[String] {
        &self.tlds
    }

    pub fn len(&self) -> usize {
        self.tlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tlds.is_empty()
    }

    /// Membership test; accepts the TLD with or without its leading dot
    pub fn contains(&self, tld: &str) -> bool {
        normalize_tld(tld).map_or(false, |t| self.index.contains(&t))
    }

    pub fn tech(&self) -> &[String] {
        &self.tech
    }

    pub fn fun(&self) -> &[String] {
        &self.fun
    }

    pub fn country(&self) -> &[String] {
        &self.country
    }

    pub fn brand(&self) -> &[String] {
        &self.brand
    }

    /// TLDs of one category
    pub fn category(&self, category: TldCategory) -> &[String] {
        match category {
            TldCategory::Tech => &self.tech,
            TldCategory::Fun => &self.fun,
            TldCategory::Country => &self.country,
            TldCategory::Brand => &self.brand,
        }
    }

    /// Every category a TLD belongs to (categories overlap)
    pub fn categories_of(&self, tld: &str) -> Vec<TldCategory> {
        let Some(tld) = normalize_tld(tld) else {
            return Vec::new();
        };
        [
            TldCategory::Tech,
            TldCategory::Fun,
            TldCategory::Country,
            TldCategory::Brand,
        ]
        .into_iter()
        .filter(|c| self.category(*c).contains(&tld))
        .collect()
    }
}

impl Default for TldCatalog {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Lowercase a TLD and give it a leading dot; `None` when it is not 2-63 letters
pub fn normalize_tld(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('.').to_lowercase();
    let valid = (2..=63).contains(&trimmed.len()) && trimmed.chars().all(|c| c.is_ascii_lowercase());
    valid.then(|| format!(".{}", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = TldCatalog::embedded();
        assert!(catalog.len() > 500);
        assert!(catalog.contains(".com"));
        assert!(catalog.contains("io"));
        assert!(catalog.all().iter().all(|t| t.starts_with('.')));
    }

    #[test]
    fn test_parse_skips_comments_and_duplicates() {
        let catalog = TldCatalog::parse("# header\n.com\n\nIO\n.com\nnot valid\n.x\n").unwrap();
        assert_eq!(catalog.all(), &[".com".to_string(), ".io".to_string()]);
    }

    #[test]
    fn test_empty_catalog_is_config_error() {
        assert!(TldCatalog::parse("# nothing\n").is_err());
    }

    #[test]
    fn test_categories_overlap() {
        let catalog = TldCatalog::parse(".com\n.io\n.fun\n.de\n.studio\n").unwrap();
        assert_eq!(catalog.country(), &[".io".to_string(), ".de".to_string()]);
        assert_eq!(catalog.tech(), &[".io".to_string()]);
        assert_eq!(catalog.fun(), &[".fun".to_string()]);
        assert_eq!(
            catalog.categories_of(".io"),
            vec![TldCategory::Tech, TldCategory::Country, TldCategory::Brand]
        );
        assert!(catalog.categories_of(".com").is_empty());
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ".dev\n.app\n# comment\n.ai").unwrap();
        let catalog = TldCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(TldCatalog::from_file("/definitely/missing/tlds.txt").is_err());
    }
}
