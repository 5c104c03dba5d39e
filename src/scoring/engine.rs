use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::classifiers::{bibliographic, education, other, projects, technical, ScoringContext};
use super::config::ScoringConfig;
use super::period::EvaluationPeriod;
use super::taxonomy::{Category, Taxonomy};
use crate::curriculum::{tags, CurriculumDocument, CurriculumNode, Owner, XmlNode};
use crate::error::ScoreError;

/// Category totals, computed once from a fully classified taxonomy.
///
/// Published articles stay out of `bibliographic`; they are reported on
/// their own through [`ScoreResult::articles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub academic_titles: u32,
    pub projects: u32,
    pub bibliographic: u32,
    pub technical: u32,
    pub other: u32,
}

impl Tally {
    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Self {
        Self {
            academic_titles: taxonomy.education.total(),
            projects: taxonomy.projects.total(),
            bibliographic: {
                let b = &taxonomy.bibliographic;
                b.conference_papers.total() + b.books_and_chapters.total() + b.other_types.total()
            },
            technical: taxonomy.technical.total(),
            other: taxonomy.other.total(),
        }
    }

    /// `(name, total)` for each category, in rubric order.
    pub fn entries(&self) -> [(&'static str, u32); 5] {
        [
            ("academic_titles", self.academic_titles),
            ("projects", self.projects),
            ("bibliographic", self.bibliographic),
            ("technical", self.technical),
            ("other", self.other),
        ]
    }
}

/// Outcome of scoring one curriculum. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    owner: Owner,
    period: EvaluationPeriod,
    tally: Tally,
    articles: u32,
    taxonomy: Taxonomy,
}

impl ScoreResult {
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn period(&self) -> EvaluationPeriod {
        self.period
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Published articles in the period, across all strata.
    pub fn articles(&self) -> u32 {
        self.articles
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Every leaf counter keyed by dotted path.
    pub fn leaf_counts(&self) -> Vec<(String, u32)> {
        self.taxonomy.leaf_counts()
    }
}

/// Score a curriculum record over `period`.
///
/// Fails only when the record lacks its identifier or owner name. Missing
/// sections and unusable item attributes contribute zero.
pub fn score_curriculum<N: CurriculumNode>(
    record: &N,
    period: EvaluationPeriod,
    config: &ScoringConfig,
) -> Result<ScoreResult, ScoreError> {
    let owner = Owner::from_record(record)?;
    let ctx = ScoringContext {
        period,
        owner: &owner,
        config,
    };

    let general = record.child(tags::GENERAL_DATA);
    let education_section = general.as_ref().and_then(|g| g.child(tags::EDUCATION));
    let roles_section = general.as_ref().and_then(|g| g.child(tags::PROFESSIONAL_ROLES));
    let bibliographic_section = record.child(tags::BIBLIOGRAPHIC);
    let technical_section = record.child(tags::TECHNICAL);
    let other_section = record.child(tags::OTHER_PRODUCTION);

    let taxonomy = Taxonomy {
        education: education::classify(education_section.as_ref(), &config.degree_points),
        projects: projects::classify(roles_section.as_ref(), &ctx),
        bibliographic: bibliographic::classify(bibliographic_section.as_ref(), &ctx),
        technical: technical::classify(technical_section.as_ref(), &ctx),
        other: other::classify(other_section.as_ref(), &ctx),
    };
    let tally = Tally::from_taxonomy(&taxonomy);
    let articles = taxonomy.bibliographic.articles.total();

    info!(
        identifier = owner.identifier.as_str(),
        period = %period,
        academic_titles = tally.academic_titles,
        projects = tally.projects,
        bibliographic = tally.bibliographic,
        technical = tally.technical,
        other = tally.other,
        "scored curriculum"
    );

    Ok(ScoreResult {
        owner,
        period,
        tally,
        articles,
        taxonomy,
    })
}

/// Parse a loaded curriculum export and score it.
pub fn score_document(
    document: &CurriculumDocument,
    period: EvaluationPeriod,
    config: &ScoringConfig,
) -> Result<ScoreResult> {
    let tree = document.parse()?;
    let root = XmlNode::new(tree.root_element());
    Ok(score_curriculum(&root, period, config)?)
}
