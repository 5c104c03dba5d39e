//! Eligibility predicates.
//!
//! None of these fail: an absent, empty or malformed attribute simply makes
//! the item ineligible.

use crate::curriculum::{tags, CurriculumNode, Owner};

use super::config::ScoringConfig;
use super::period::{parse_year, EvaluationPeriod};

/// Year attribute present, numeric and inside the period.
pub fn in_period(period: &EvaluationPeriod, year: Option<&str>) -> bool {
    year.and_then(parse_year)
        .is_some_and(|year| period.contains(year))
}

/// Period check for items whose year lives on a data child, e.g.
/// `SOFTWARE/DADOS-BASICOS-DO-SOFTWARE@ANO`.
pub fn dated_in_period<N: CurriculumNode>(
    period: &EvaluationPeriod,
    item: &N,
    data_tag: &str,
    year_attr: &str,
) -> bool {
    item.child(data_tag)
        .is_some_and(|data| in_period(period, data.attr(year_attr)))
}

/// Period check for a project: its own start year when filled in, otherwise
/// the start year of the enclosing participation.
pub fn project_in_period(
    period: &EvaluationPeriod,
    project_year: Option<&str>,
    participation_year: Option<&str>,
) -> bool {
    match project_year.map(str::trim).filter(|y| !y.is_empty()) {
        Some(year) => in_period(period, Some(year)),
        None => in_period(period, participation_year),
    }
}

/// The owner's team entry must carry the responsible-party flag.
///
/// The owner's entry is matched by CNPq id, then by full name, and falls back
/// to the first listed member when neither matches.
pub fn owner_is_responsible<N: CurriculumNode>(project: &N, owner: &Owner) -> bool {
    let Some(team) = project.child(tags::PROJECT_TEAM) else {
        return false;
    };
    let members = team.children(tags::TEAM_MEMBER);

    let by_id = members.iter().find(|m| {
        m.attr(tags::MEMBER_ID)
            .is_some_and(|id| id.trim() == owner.identifier)
    });
    let owner_name = owner.full_name.to_lowercase();
    let by_name = || {
        members.iter().find(|m| {
            m.attr(tags::FULL_NAME)
                .is_some_and(|name| name.trim().to_lowercase() == owner_name)
        })
    };

    by_id
        .or_else(by_name)
        .or_else(|| members.first())
        .and_then(|member| member.attr(tags::RESPONSIBLE_FLAG))
        .is_some_and(|flag| flag.trim() == tags::YES)
}

/// At least one listed funder must be outside the internal institutions.
/// A project without a funding list never qualifies.
pub fn has_external_funding<N: CurriculumNode>(project: &N, config: &ScoringConfig) -> bool {
    let Some(funding) = project.child(tags::PROJECT_FUNDERS) else {
        return false;
    };
    funding.children(tags::PROJECT_FUNDER).iter().any(|funder| {
        !config.is_internal_funder(funder.attr(tags::INSTITUTION_CODE).unwrap_or(""))
    })
}

/// Declared page count must reach `min_pages`. Empty counts are excluded.
pub fn meets_min_pages(pages: Option<&str>, min_pages: u32) -> bool {
    let Some(raw) = pages.map(str::trim).filter(|p| !p.is_empty()) else {
        return false;
    };
    match raw.parse::<u32>() {
        Ok(count) => count >= min_pages,
        Err(_) => {
            tracing::warn!(value = raw, "ignoring malformed page count");
            false
        }
    }
}
