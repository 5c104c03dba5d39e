use serde::{Deserialize, Serialize};

/// Point rubric and exclusion rules.
///
/// Every field is optional in YAML; missing fields fall back to the
/// institutional rubric in [`ScoringConfig::default`].
///
/// Example YAML:
/// ```yaml
/// scoring:
///   degree_points:
///     doctorate: 7
///     masters: 3
///   project_points: 2
///   project_max: 8
///   internal_funders: ["JI7500000002", "001500000997", "008900000002"]
///   min_pages: 50
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct ScoringConfig {
    /// Points granted per concluded degree
    pub degree_points: DegreePoints,

    /// Points added per qualifying project, per nature
    pub project_points: u32,

    /// A project counter only grows while `counter + project_points <= project_max`
    pub project_max: u32,

    /// Institution codes treated as the researcher's own institutions.
    /// Projects funded only by these (or by an empty code) do not count.
    pub internal_funders: Vec<String>,

    /// Minimum page count for books and translations
    pub min_pages: u32,

    /// Count visual artworks under artistic production
    pub count_visual_arts: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            degree_points: DegreePoints::default(),
            project_points: 2,
            project_max: 8,
            internal_funders: vec![
                "JI7500000002".to_string(),
                "001500000997".to_string(),
                "008900000002".to_string(),
            ],
            min_pages: 50,
            count_visual_arts: false,
        }
    }
}

impl ScoringConfig {
    /// An empty code is always internal.
    pub fn is_internal_funder(&self, code: &str) -> bool {
        let code = code.trim();
        code.is_empty() || self.internal_funders.iter().any(|c| c.trim() == code)
    }
}

/// Points per highest-concluded degree.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct DegreePoints {
    pub post_doctorate: u32,
    pub habilitation: u32,
    pub doctorate: u32,
    pub masters: u32,
}

impl Default for DegreePoints {
    fn default() -> Self {
        Self {
            post_doctorate: 10,
            habilitation: 8,
            doctorate: 7,
            masters: 3,
        }
    }
}
