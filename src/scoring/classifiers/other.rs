use tracing::warn;

use super::{count_dated, ScoringContext};
use crate::curriculum::{tags, CurriculumNode};
use crate::scoring::filters::in_period;
use crate::scoring::taxonomy::{Advising, Artistic, OtherAdvising, OtherProduction};

/// Score `OUTRA-PRODUCAO`: artistic work and completed supervisions.
pub fn classify<N: CurriculumNode>(production: Option<&N>, ctx: &ScoringContext<'_>) -> OtherProduction {
    let Some(production) = production else {
        return OtherProduction::default();
    };
    OtherProduction {
        artistic: production
            .child(tags::ARTISTIC)
            .map(|works| artistic(&works, ctx))
            .unwrap_or_default(),
        advising: production
            .child(tags::ADVISING)
            .map(|advising| completed_advising(&advising, ctx))
            .unwrap_or_default(),
    }
}

fn artistic<N: CurriculumNode>(works: &N, ctx: &ScoringContext<'_>) -> Artistic {
    let period = &ctx.period;
    Artistic {
        presentations: count_dated(period, works, tags::PRESENTATION, tags::PRESENTATION_DATA, tags::YEAR),
        musical_compositions: count_dated(
            period,
            works,
            tags::COMPOSITION,
            tags::COMPOSITION_DATA,
            tags::YEAR,
        ),
        visual_arts: if ctx.config.count_visual_arts {
            count_dated(period, works, tags::VISUAL_ART, tags::VISUAL_ART_DATA, tags::YEAR)
        } else {
            0
        },
    }
}

fn completed_advising<N: CurriculumNode>(advising: &N, ctx: &ScoringContext<'_>) -> Advising {
    let period = &ctx.period;
    Advising {
        post_doctorate: count_dated(
            period,
            advising,
            tags::ADVISING_POST_DOCTORATE,
            tags::ADVISING_POST_DOCTORATE_DATA,
            tags::YEAR,
        ),
        doctorate: count_dated(
            period,
            advising,
            tags::ADVISING_DOCTORATE,
            tags::ADVISING_DOCTORATE_DATA,
            tags::YEAR,
        ),
        masters: count_dated(
            period,
            advising,
            tags::ADVISING_MASTERS,
            tags::ADVISING_MASTERS_DATA,
            tags::YEAR,
        ),
        other: other_advising(advising, ctx),
    }
}

fn other_advising<N: CurriculumNode>(advising: &N, ctx: &ScoringContext<'_>) -> OtherAdvising {
    let mut result = OtherAdvising::default();
    for student in advising.children(tags::ADVISING_OTHER) {
        let Some(data) = student.child(tags::ADVISING_OTHER_DATA) else {
            continue;
        };
        if !in_period(&ctx.period, data.attr(tags::YEAR)) {
            continue;
        }
        match data.attr(tags::NATURE).map(str::trim) {
            Some("MONOGRAFIA_DE_CONCLUSAO_DE_CURSO_APERFEICOAMENTO_E_ESPECIALIZACAO") => {
                result.specialization += 1
            }
            Some("TRABALHO_DE_CONCLUSAO_DE_CURSO_GRADUACAO") => result.undergraduate_thesis += 1,
            Some("INICIACAO_CIENTIFICA") => result.undergraduate_research += 1,
            Some("ORIENTACAO-DE-OUTRA-NATUREZA") => result.other_nature += 1,
            other => warn!(nature = ?other, "skipping supervision of unknown nature"),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::XmlNode;
    use crate::scoring::classifiers::fixtures;
    use crate::scoring::config::ScoringConfig;
    use crate::scoring::taxonomy::Category;

    const ARTISTIC: &str = r#"<OUTRA-PRODUCAO><PRODUCAO-ARTISTICA-CULTURAL>
        <APRESENTACAO-DE-OBRA-ARTISTICA><DADOS-BASICOS-DA-APRESENTACAO-DE-OBRA-ARTISTICA ANO="2014"/></APRESENTACAO-DE-OBRA-ARTISTICA>
        <APRESENTACAO-DE-OBRA-ARTISTICA><DADOS-BASICOS-DA-APRESENTACAO-DE-OBRA-ARTISTICA ANO="2000"/></APRESENTACAO-DE-OBRA-ARTISTICA>
        <COMPOSICAO-MUSICAL><DADOS-BASICOS-DA-COMPOSICAO-MUSICAL ANO="2015"/></COMPOSICAO-MUSICAL>
        <OBRA-DE-ARTES-VISUAIS><DADOS-BASICOS-DA-OBRA-DE-ARTES-VISUAIS ANO="2016"/></OBRA-DE-ARTES-VISUAIS>
    </PRODUCAO-ARTISTICA-CULTURAL></OUTRA-PRODUCAO>"#;

    fn classify_with(xml: &str, config: &ScoringConfig) -> OtherProduction {
        let owner = fixtures::owner();
        let ctx = fixtures::context(&owner, config);
        let doc = roxmltree::Document::parse(xml).unwrap();
        classify(Some(&XmlNode::new(doc.root_element())), &ctx)
    }

    #[test]
    fn test_missing_section_scores_zero() {
        let owner = fixtures::owner();
        let config = ScoringConfig::default();
        let ctx = fixtures::context(&owner, &config);
        assert_eq!(classify::<XmlNode>(None, &ctx), OtherProduction::default());
    }

    #[test]
    fn test_artistic_production() {
        let result = classify_with(ARTISTIC, &ScoringConfig::default());
        assert_eq!(result.artistic.presentations, 1);
        assert_eq!(result.artistic.musical_compositions, 1);
        assert_eq!(result.artistic.visual_arts, 0);
    }

    #[test]
    fn test_visual_arts_when_enabled() {
        let config = ScoringConfig {
            count_visual_arts: true,
            ..ScoringConfig::default()
        };
        let result = classify_with(ARTISTIC, &config);
        assert_eq!(result.artistic.visual_arts, 1);
        assert_eq!(result.artistic.total(), 3);
    }

    #[test]
    fn test_completed_advising() {
        let result = classify_with(
            r#"<OUTRA-PRODUCAO><ORIENTACOES-CONCLUIDAS>
                 <ORIENTACOES-CONCLUIDAS-PARA-POS-DOUTORADO><DADOS-BASICOS-DE-ORIENTACOES-CONCLUIDAS-PARA-POS-DOUTORADO ANO="2016"/></ORIENTACOES-CONCLUIDAS-PARA-POS-DOUTORADO>
                 <ORIENTACOES-CONCLUIDAS-PARA-DOUTORADO><DADOS-BASICOS-DE-ORIENTACOES-CONCLUIDAS-PARA-DOUTORADO ANO="2013"/></ORIENTACOES-CONCLUIDAS-PARA-DOUTORADO>
                 <ORIENTACOES-CONCLUIDAS-PARA-MESTRADO><DADOS-BASICOS-DE-ORIENTACOES-CONCLUIDAS-PARA-MESTRADO ANO="2017"/></ORIENTACOES-CONCLUIDAS-PARA-MESTRADO>
                 <ORIENTACOES-CONCLUIDAS-PARA-MESTRADO><DADOS-BASICOS-DE-ORIENTACOES-CONCLUIDAS-PARA-MESTRADO ANO=""/></ORIENTACOES-CONCLUIDAS-PARA-MESTRADO>
                 <OUTRAS-ORIENTACOES-CONCLUIDAS><DADOS-BASICOS-DE-OUTRAS-ORIENTACOES-CONCLUIDAS NATUREZA="INICIACAO_CIENTIFICA" ANO="2014"/></OUTRAS-ORIENTACOES-CONCLUIDAS>
                 <OUTRAS-ORIENTACOES-CONCLUIDAS><DADOS-BASICOS-DE-OUTRAS-ORIENTACOES-CONCLUIDAS NATUREZA="INICIACAO_CIENTIFICA" ANO="2015"/></OUTRAS-ORIENTACOES-CONCLUIDAS>
                 <OUTRAS-ORIENTACOES-CONCLUIDAS><DADOS-BASICOS-DE-OUTRAS-ORIENTACOES-CONCLUIDAS NATUREZA="TRABALHO_DE_CONCLUSAO_DE_CURSO_GRADUACAO" ANO="2015"/></OUTRAS-ORIENTACOES-CONCLUIDAS>
                 <OUTRAS-ORIENTACOES-CONCLUIDAS><DADOS-BASICOS-DE-OUTRAS-ORIENTACOES-CONCLUIDAS NATUREZA="MONOGRAFIA_DE_CONCLUSAO_DE_CURSO_APERFEICOAMENTO_E_ESPECIALIZACAO" ANO="2012"/></OUTRAS-ORIENTACOES-CONCLUIDAS>
                 <OUTRAS-ORIENTACOES-CONCLUIDAS><DADOS-BASICOS-DE-OUTRAS-ORIENTACOES-CONCLUIDAS NATUREZA="ORIENTACAO-DE-OUTRA-NATUREZA" ANO="2013"/></OUTRAS-ORIENTACOES-CONCLUIDAS>
                 <OUTRAS-ORIENTACOES-CONCLUIDAS><DADOS-BASICOS-DE-OUTRAS-ORIENTACOES-CONCLUIDAS NATUREZA="DESCONHECIDA" ANO="2013"/></OUTRAS-ORIENTACOES-CONCLUIDAS>
               </ORIENTACOES-CONCLUIDAS></OUTRA-PRODUCAO>"#,
            &ScoringConfig::default(),
        );
        let advising = result.advising;
        assert_eq!(advising.post_doctorate, 1);
        assert_eq!(advising.doctorate, 1);
        assert_eq!(advising.masters, 1);
        assert_eq!(advising.other.undergraduate_research, 2);
        assert_eq!(advising.other.undergraduate_thesis, 1);
        assert_eq!(advising.other.specialization, 0);
        assert_eq!(advising.other.other_nature, 1);
        assert_eq!(advising.total(), 7);
    }
}
