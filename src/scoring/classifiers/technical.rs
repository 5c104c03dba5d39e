use super::{count_dated, ScoringContext};
use crate::curriculum::{tags, CurriculumNode};
use crate::scoring::period::parse_date_year;
use crate::scoring::taxonomy::{Patents, Technical};

/// Score `PRODUCAO-TECNICA`.
pub fn classify<N: CurriculumNode>(production: Option<&N>, ctx: &ScoringContext<'_>) -> Technical {
    let Some(production) = production else {
        return Technical::default();
    };
    let period = &ctx.period;

    Technical {
        software: count_dated(period, production, tags::SOFTWARE, tags::SOFTWARE_DATA, tags::YEAR),
        patents: patents(production, ctx),
        technological_products: count_dated(
            period,
            production,
            tags::TECH_PRODUCT,
            tags::TECH_PRODUCT_DATA,
            tags::YEAR,
        ),
        processes_or_techniques: count_dated(
            period,
            production,
            tags::PROCESS,
            tags::PROCESS_DATA,
            tags::YEAR,
        ),
        technical_reports: count_dated(
            period,
            production,
            tags::TECH_REPORT,
            tags::TECH_REPORT_DATA,
            tags::YEAR,
        ),
    }
}

/// Which registry date decides a patent's year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatentStage {
    Granted(Option<i32>),
    Filed(Option<i32>),
}

/// A filled-in grant date wins over the filing date. An empty stage yields
/// `None`; a filled-in but malformed date yields a stage with no year.
pub fn patent_stage(filing_date: Option<&str>, grant_date: Option<&str>) -> Option<PatentStage> {
    fn filled(date: Option<&str>) -> Option<&str> {
        date.map(str::trim).filter(|d| !d.is_empty())
    }

    if let Some(granted) = filled(grant_date) {
        Some(PatentStage::Granted(parse_date_year(granted)))
    } else {
        filled(filing_date).map(|filed| PatentStage::Filed(parse_date_year(filed)))
    }
}

fn patents<N: CurriculumNode>(production: &N, ctx: &ScoringContext<'_>) -> Patents {
    let mut result = Patents::default();
    for patent in production.children(tags::PATENT) {
        let Some(registry) = patent
            .child(tags::PATENT_DETAIL)
            .and_then(|detail| detail.child(tags::PATENT_REGISTRY))
        else {
            continue;
        };
        let stage = patent_stage(
            registry.attr(tags::FILING_DATE),
            registry.attr(tags::GRANT_DATE),
        );
        let in_period = |year: Option<i32>| year.is_some_and(|y| ctx.period.contains(y));
        match stage {
            Some(PatentStage::Granted(year)) if in_period(year) => result.granted += 1,
            Some(PatentStage::Filed(year)) if in_period(year) => result.filed += 1,
            _ => {}
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

    fn classify_xml(xml: &str) -> Technical {
        let owner = fixtures::owner();
        let config = ScoringConfig::default();
        let ctx = fixtures::context(&owner, &config);
        let doc = roxmltree::Document::parse(xml).unwrap();
        classify(Some(&XmlNode::new(doc.root_element())), &ctx)
    }

    fn patent(filed: &str, granted: &str) -> String {
        format!(
            r#"<PATENTE><DETALHAMENTO-DA-PATENTE>
                 <REGISTRO-OU-PATENTE DATA-PEDIDO-DE-DEPOSITO="{}" DATA-DE-CONCESSAO="{}"/>
               </DETALHAMENTO-DA-PATENTE></PATENTE>"#,
            filed, granted
        )
    }

    #[test]
    fn test_missing_section_scores_zero() {
        let owner = fixtures::owner();
        let config = ScoringConfig::default();
        let ctx = fixtures::context(&owner, &config);
        assert_eq!(classify::<XmlNode>(None, &ctx), Technical::default());
    }

    #[test]
    fn test_independent_counters() {
        let result = classify_xml(
            r#"<PRODUCAO-TECNICA>
                 <SOFTWARE><DADOS-BASICOS-DO-SOFTWARE ANO="2014"/></SOFTWARE>
                 <SOFTWARE><DADOS-BASICOS-DO-SOFTWARE ANO=""/></SOFTWARE>
                 <PRODUTO-TECNOLOGICO><DADOS-BASICOS-DO-PRODUTO-TECNOLOGICO ANO="2015"/></PRODUTO-TECNOLOGICO>
                 <PROCESSOS-OU-TECNICAS><DADOS-BASICOS-DO-PROCESSOS-OU-TECNICAS ANO="2016"/></PROCESSOS-OU-TECNICAS>
                 <PROCESSOS-OU-TECNICAS><DADOS-BASICOS-DO-PROCESSOS-OU-TECNICAS ANO="2019"/></PROCESSOS-OU-TECNICAS>
                 <TRABALHO-TECNICO><DADOS-BASICOS-DO-TRABALHO-TECNICO ANO="2017"/></TRABALHO-TECNICO>
                 <TRABALHO-TECNICO><DADOS-BASICOS-DO-TRABALHO-TECNICO ANO="2013"/></TRABALHO-TECNICO>
               </PRODUCAO-TECNICA>"#,
        );
        assert_eq!(result.software, 1);
        assert_eq!(result.technological_products, 1);
        assert_eq!(result.processes_or_techniques, 1);
        assert_eq!(result.technical_reports, 2);
        assert_eq!(result.total(), 5);
    }

    #[test]
    fn test_patent_grant_preferred() {
        let xml = format!(
            "<PRODUCAO-TECNICA>{}{}{}{}</PRODUCAO-TECNICA>",
            patent("01022010", "15062016"),
            patent("01022014", ""),
            patent("", ""),
            // granted outside the period: filing date is not consulted
            patent("01022014", "01012019"),
        );
        let result = classify_xml(&xml);
        assert_eq!(result.patents.granted, 1);
        assert_eq!(result.patents.filed, 1);
    }

    #[test]
    fn test_patent_stage() {
        assert_eq!(
            patent_stage(Some("01022014"), Some("")),
            Some(PatentStage::Filed(Some(2014)))
        );
        assert_eq!(
            patent_stage(Some("01022014"), Some("02032016")),
            Some(PatentStage::Granted(Some(2016)))
        );
        assert_eq!(patent_stage(Some(""), None), None);
        assert_eq!(
            patent_stage(None, Some("2016-03-02")),
            Some(PatentStage::Granted(None))
        );
    }

    #[test]
    fn test_blank_grant_date_falls_back_to_filing() {
        assert_eq!(
            patent_stage(Some(" 01022015 "), Some("   ")),
            Some(PatentStage::Filed(Some(2015)))
        );
        assert_eq!(patent_stage(Some("  "), Some("  ")), None);
    }
}
