pub mod classifiers;
pub mod config;
pub mod engine;
pub mod filters;
pub mod period;
pub mod taxonomy;
pub mod validation;

pub use config::*;
pub use engine::{score_curriculum, score_document, ScoreResult, Tally};
pub use period::EvaluationPeriod;
pub use taxonomy::{Category, Taxonomy};
pub use validation::{validate_period, validate_scoring};
