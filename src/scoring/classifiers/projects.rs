use tracing::debug;

use super::ScoringContext;
use crate::curriculum::{tags, CurriculumNode};
use crate::scoring::filters::{has_external_funding, owner_is_responsible, project_in_period};
use crate::scoring::taxonomy::Projects;

/// Score projects listed under `DADOS-GERAIS/ATUACOES-PROFISSIONAIS`.
///
/// A project counts when it started inside the period, the owner coordinated
/// it, and at least one funder is external. Each nature earns
/// `project_points` per project while the counter stays within `project_max`.
pub fn classify<N: CurriculumNode>(roles: Option<&N>, ctx: &ScoringContext<'_>) -> Projects {
    let mut projects = Projects::default();
    let Some(roles) = roles else {
        return projects;
    };

    for role in roles.children(tags::PROFESSIONAL_ROLE) {
        let Some(activities) = role.child(tags::PROJECT_ACTIVITIES) else {
            continue;
        };
        for participation in activities.children(tags::PROJECT_PARTICIPATION) {
            let participation_year = participation.attr(tags::START_YEAR);
            for project in participation.children(tags::RESEARCH_PROJECT) {
                if !qualifies(&project, participation_year, ctx) {
                    continue;
                }
                let counter = match project.attr(tags::NATURE).map(str::trim) {
                    Some(tags::NATURE_RESEARCH) => &mut projects.research,
                    Some(tags::NATURE_DEVELOPMENT) => &mut projects.development,
                    other => {
                        debug!(nature = ?other, "skipping project of unscored nature");
                        continue;
                    }
                };
                award_capped(counter, ctx.config.project_points, ctx.config.project_max);
            }
        }
    }

    projects
}

fn qualifies<N: CurriculumNode>(
    project: &N,
    participation_year: Option<&str>,
    ctx: &ScoringContext<'_>,
) -> bool {
    if !project_in_period(&ctx.period, project.attr(tags::START_YEAR), participation_year) {
        debug!("skipping project outside the evaluation period");
        return false;
    }
    if !owner_is_responsible(project, ctx.owner) {
        debug!("skipping project not coordinated by the owner");
        return false;
    }
    if !has_external_funding(project, ctx.config) {
        debug!("skipping project without external funding");
        return false;
    }
    true
}

/// Add `points` unless that would push the counter past `max`.
fn award_capped(counter: &mut u32, points: u32, max: u32) {
    if counter.saturating_add(points) <= max {
        *counter += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::XmlNode;
    use crate::scoring::classifiers::fixtures;
    use crate::scoring::config::ScoringConfig;
    use proptest::prelude::*;

    fn project(nature: &str, year: &str, flag: &str, funder: Option<&str>) -> String {
        let funding = funder
            .map(|code| {
                format!(
                    r#"<FINANCIADORES-DO-PROJETO><FINANCIADOR-DO-PROJETO CODIGO-INSTITUICAO="{}"/></FINANCIADORES-DO-PROJETO>"#,
                    code
                )
            })
            .unwrap_or_default();
        format!(
            r#"<PROJETO-DE-PESQUISA ANO-INICIO="{}" NATUREZA="{}">
                 <EQUIPE-DO-PROJETO>
                   <INTEGRANTES-DO-PROJETO NOME-COMPLETO="Ana Souza" FLAG-RESPONSAVEL="{}" NRO-ID-CNPQ="0000000000000001"/>
                 </EQUIPE-DO-PROJETO>
                 {}
               </PROJETO-DE-PESQUISA>"#,
            year, nature, flag, funding
        )
    }

    fn eligible(nature: &str) -> String {
        project(nature, "2015", "SIM", Some("002200000000"))
    }

    fn roles(participation_year: &str, projects: &[String]) -> String {
        format!(
            r#"<ATUACOES-PROFISSIONAIS><ATUACAO-PROFISSIONAL>
                 <ATIVIDADES-DE-PARTICIPACAO-EM-PROJETO>
                   <PARTICIPACAO-EM-PROJETO ANO-INICIO="{}">{}</PARTICIPACAO-EM-PROJETO>
                 </ATIVIDADES-DE-PARTICIPACAO-EM-PROJETO>
               </ATUACAO-PROFISSIONAL></ATUACOES-PROFISSIONAIS>"#,
            participation_year,
            projects.concat()
        )
    }

    fn classify_xml(xml: &str) -> Projects {
        let owner = fixtures::owner();
        let config = ScoringConfig::default();
        let ctx = fixtures::context(&owner, &config);
        let doc = roxmltree::Document::parse(xml).unwrap();
        classify(Some(&XmlNode::new(doc.root_element())), &ctx)
    }

    #[test]
    fn test_missing_section_scores_zero() {
        let owner = fixtures::owner();
        let config = ScoringConfig::default();
        let ctx = fixtures::context(&owner, &config);
        assert_eq!(classify::<XmlNode>(None, &ctx), Projects::default());
    }

    #[test]
    fn test_two_research_projects() {
        let result = classify_xml(&roles("2014", &[eligible("PESQUISA"), eligible("PESQUISA")]));
        assert_eq!(result.research, 4);
        assert_eq!(result.development, 0);
    }

    #[test]
    fn test_research_cap() {
        let three = vec![eligible("PESQUISA"); 3];
        assert_eq!(classify_xml(&roles("2014", &three)).research, 6);

        let four = vec![eligible("PESQUISA"); 4];
        assert_eq!(classify_xml(&roles("2014", &four)).research, 8);

        let five = vec![eligible("PESQUISA"); 5];
        assert_eq!(classify_xml(&roles("2014", &five)).research, 8);
    }

    #[test]
    fn test_natures_capped_independently() {
        let mut items = vec![eligible("PESQUISA"); 5];
        items.push(eligible("DESENVOLVIMENTO"));
        items.push(eligible("OUTRA"));
        let result = classify_xml(&roles("2014", &items));
        assert_eq!(result.research, 8);
        assert_eq!(result.development, 2);
    }

    #[test]
    fn test_unfunded_project_excluded() {
        let result = classify_xml(&roles("2014", &[project("PESQUISA", "2015", "SIM", None)]));
        assert_eq!(result.research, 0);
    }

    #[test]
    fn test_internally_funded_project_excluded() {
        let result = classify_xml(&roles(
            "2014",
            &[project("PESQUISA", "2015", "SIM", Some("JI7500000002"))],
        ));
        assert_eq!(result.research, 0);
    }

    #[test]
    fn test_non_coordinator_excluded() {
        let result = classify_xml(&roles(
            "2014",
            &[project("PESQUISA", "2015", "NAO", Some("002200000000"))],
        ));
        assert_eq!(result.research, 0);
    }

    #[test]
    fn test_project_year_outside_period() {
        let result = classify_xml(&roles(
            "2014",
            &[project("PESQUISA", "2012", "SIM", Some("002200000000"))],
        ));
        assert_eq!(result.research, 0);
    }

    #[test]
    fn test_participation_year_used_when_project_year_empty() {
        let inside = classify_xml(&roles(
            "2016",
            &[project("DESENVOLVIMENTO", "", "SIM", Some("002200000000"))],
        ));
        assert_eq!(inside.development, 2);

        let outside = classify_xml(&roles(
            "2009",
            &[project("DESENVOLVIMENTO", "", "SIM", Some("002200000000"))],
        ));
        assert_eq!(outside.development, 0);
    }

    #[test]
    fn test_empty_participation_year_does_not_block_dated_project() {
        let result = classify_xml(&roles("", &[eligible("PESQUISA")]));
        assert_eq!(result.research, 2);
    }

    proptest! {
        #[test]
        fn prop_counter_never_exceeds_max(n in 0usize..20) {
            let mut counter = 0;
            for _ in 0..n {
                award_capped(&mut counter, 2, 8);
            }
            prop_assert!(counter <= 8);
            prop_assert_eq!(counter, (2 * n as u32).min(8));
        }
    }
}
