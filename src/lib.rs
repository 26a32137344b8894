//! Domain Scout - domain name suggestions with scoring and availability checks
//!
//! Extracts keywords from a business description, generates candidates with
//! several naming strategies plus a text generator, scores them, and checks
//! availability through a registrar or status API.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod keywords;
pub mod llm;
pub mod service;
pub mod tld;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use config::ScoutConfig;
pub use error::{Result, ScoutError};
pub use types::{
    Candidate, CreativityLevel, DeepTldResult, DomainStatus, ExplorationStandout, ScoredResult,
    SearchMode, SearchResult, Strategy,
};

// Re-export main functionality
pub use domain::{AvailabilityChecker, AvailabilityProvider};
pub use llm::{LlmRouter, TextGenerator};
pub use service::{CheckAvailabilityRequest, DomainScout, ExploreDeepRequest, SuggestRequest};
pub use tld::TldCatalog;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
