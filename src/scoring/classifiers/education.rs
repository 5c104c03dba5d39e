use crate::curriculum::{tags, CurriculumNode};
use crate::scoring::config::DegreePoints;
use crate::scoring::taxonomy::Education;

/// Score academic titles from `DADOS-GERAIS/FORMACAO-ACADEMICA-TITULACAO`.
///
/// Each degree type fills its own slot, so a doctorate and a master's both
/// count. Titles are not restricted to the evaluation period. Habilitation
/// has no course status and counts whenever it is listed.
pub fn classify<N: CurriculumNode>(education: Option<&N>, points: &DegreePoints) -> Education {
    let Some(education) = education else {
        return Education::default();
    };

    let concluded = |tag: &str| {
        education.children(tag).iter().any(|degree| {
            degree
                .attr(tags::COURSE_STATUS)
                .is_some_and(|status| status.trim() == tags::CONCLUDED)
        })
    };
    let award = |earned: bool, value: u32| if earned { value } else { 0 };

    Education {
        post_doctorate: award(concluded(tags::POST_DOCTORATE), points.post_doctorate),
        habilitation: award(education.child(tags::HABILITATION).is_some(), points.habilitation),
        doctorate: award(concluded(tags::DOCTORATE), points.doctorate),
        masters: award(concluded(tags::MASTERS), points.masters),
    }
}
