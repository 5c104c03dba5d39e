use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub period: PeriodConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Default evaluation period; command-line flags take precedence.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PeriodConfig {
    /// First year counted (unbounded when absent)
    #[serde(default)]
    pub since: Option<i32>,
    /// Last year counted (current year when absent)
    #[serde(default)]
    pub until: Option<i32>,
}
