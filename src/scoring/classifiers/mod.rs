//! One classifier per curriculum section.
//!
//! Each classifier takes the section node (or `None` when the record lacks
//! it) and returns the taxonomy fragment it owns. No classifier sees another
//! one's counters.

pub mod bibliographic;
pub mod education;
pub mod other;
pub mod projects;
pub mod technical;

use crate::curriculum::{CurriculumNode, Owner};

use super::config::ScoringConfig;
use super::filters::dated_in_period;
use super::period::EvaluationPeriod;

/// Inputs shared by every classifier for one scoring run.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub period: EvaluationPeriod,
    pub owner: &'a Owner,
    pub config: &'a ScoringConfig,
}

/// Number of `item_tag` children of `parent` whose `data_tag@year_attr`
/// falls inside the period.
fn count_dated<N: CurriculumNode>(
    period: &EvaluationPeriod,
    parent: &N,
    item_tag: &str,
    data_tag: &str,
    year_attr: &str,
) -> u32 {
    parent
        .children(item_tag)
        .iter()
        .filter(|item| dated_in_period(period, *item, data_tag, year_attr))
        .count() as u32
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::curriculum::Owner;
    use crate::scoring::config::ScoringConfig;
    use crate::scoring::period::EvaluationPeriod;

    use super::ScoringContext;

    pub fn owner() -> Owner {
        Owner {
            identifier: "0000000000000001".to_string(),
            full_name: "Ana Souza".to_string(),
        }
    }

    pub fn context<'a>(owner: &'a Owner, config: &'a ScoringConfig) -> ScoringContext<'a> {
        ScoringContext {
            period: EvaluationPeriod::new(Some(2013), 2017).unwrap(),
            owner,
            config,
        }
    }
}
