//! Suggestion engine: candidate generation, scoring, exploration and insights

pub mod explorer;
pub mod generator;
pub mod insights;
pub mod scorer;
pub mod strategies;

pub use explorer::{plan_batches, BatchPlan, Exploration, ExploreRequest, Explorer};
pub use generator::{Budget, CandidateGenerator, GenerationRequest};
pub use insights::{creativity_score, exploration_insights, strategies_used, suggestion_insights};
pub use scorer::score;
