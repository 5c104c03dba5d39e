//! Productivity scoring for Lattes curricula.
//!
//! A curriculum is walked section by section; each eligible item inside the
//! evaluation period is classified into one leaf of a fixed [`Taxonomy`],
//! and the leaves are summed into five category totals.
//!
//! ```no_run
//! use score_lattes::curriculum::CurriculumDocument;
//! use score_lattes::scoring::{score_document, EvaluationPeriod, ScoringConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let document = CurriculumDocument::open("curriculo.xml".as_ref())?;
//! let period = EvaluationPeriod::new(Some(2013), 2017)?;
//! let result = score_document(&document, period, &ScoringConfig::default())?;
//! println!("{} articles", result.articles());
//! # Ok(())
//! # }
//! ```
//!
//! [`Taxonomy`]: scoring::Taxonomy

pub mod config;
pub mod curriculum;
pub mod error;
pub mod output;
pub mod scoring;
pub mod telemetry;

pub use error::ScoreError;
