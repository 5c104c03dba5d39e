use tracing::{debug, warn};

use super::{count_dated, ScoringContext};
use crate::curriculum::{tags, CurriculumNode};
use crate::scoring::filters::{dated_in_period, in_period, meets_min_pages};
use crate::scoring::taxonomy::{Bibliographic, Books, ConferencePapers, PaperKinds};

/// Score `PRODUCAO-BIBLIOGRAFICA`: articles, conference papers, books,
/// chapters and translations.
pub fn classify<N: CurriculumNode>(production: Option<&N>, ctx: &ScoringContext<'_>) -> Bibliographic {
    let mut result = Bibliographic::default();
    let Some(production) = production else {
        return result;
    };

    if let Some(articles) = production.child(tags::ARTICLES) {
        // Qualis strata are not looked up; every article is unclassified.
        result.articles.unclassified = count_dated(
            &ctx.period,
            &articles,
            tags::ARTICLE,
            tags::ARTICLE_DATA,
            tags::ARTICLE_YEAR,
        );
    }

    if let Some(papers) = production.child(tags::EVENT_PAPERS) {
        result.conference_papers = conference_papers(&papers, ctx);
    }

    if let Some(items) = production.child(tags::BOOKS_AND_CHAPTERS) {
        if let Some(books) = items.child(tags::BOOKS) {
            result.books_and_chapters.books = books_by_type(&books, ctx);
        }
        // Chapters have no page minimum.
        if let Some(chapters) = items.child(tags::CHAPTERS) {
            result.books_and_chapters.chapters = count_dated(
                &ctx.period,
                &chapters,
                tags::CHAPTER,
                tags::CHAPTER_DATA,
                tags::YEAR,
            );
        }
    }

    if let Some(others) = production.child(tags::OTHER_BIBLIOGRAPHIC) {
        result.other_types.translations = others
            .children(tags::TRANSLATION)
            .iter()
            .filter(|t| {
                dated_in_period(&ctx.period, *t, tags::TRANSLATION_DATA, tags::YEAR)
                    && long_enough(*t, tags::TRANSLATION_DETAIL, ctx)
            })
            .count() as u32;
    }

    result
}

/// Geographic scope of the event a paper was presented at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventScope {
    International,
    National,
    Regional,
    Local,
    Unspecified,
}

impl EventScope {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "INTERNACIONAL" => Some(EventScope::International),
            "NACIONAL" => Some(EventScope::National),
            "REGIONAL" => Some(EventScope::Regional),
            "LOCAL" => Some(EventScope::Local),
            "NAO_INFORMADO" => Some(EventScope::Unspecified),
            _ => None,
        }
    }
}

/// How much of the paper was published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperKind {
    FullPaper,
    ExpandedAbstract,
    Abstract,
}

impl PaperKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "COMPLETO" => Some(PaperKind::FullPaper),
            "RESUMO_EXPANDIDO" => Some(PaperKind::ExpandedAbstract),
            "RESUMO" => Some(PaperKind::Abstract),
            _ => None,
        }
    }
}

impl ConferencePapers {
    pub fn slot_mut(&mut self, scope: EventScope, kind: PaperKind) -> &mut u32 {
        let kinds = match scope {
            EventScope::International => &mut self.international,
            EventScope::National => &mut self.national,
            EventScope::Regional => &mut self.regional,
            EventScope::Local => &mut self.local,
            EventScope::Unspecified => &mut self.unspecified,
        };
        kinds.slot_mut(kind)
    }
}

impl PaperKinds {
    pub fn slot_mut(&mut self, kind: PaperKind) -> &mut u32 {
        match kind {
            PaperKind::FullPaper => &mut self.full_paper,
            PaperKind::ExpandedAbstract => &mut self.expanded_abstract,
            PaperKind::Abstract => &mut self.abstract_only,
        }
    }
}

fn conference_papers<N: CurriculumNode>(papers: &N, ctx: &ScoringContext<'_>) -> ConferencePapers {
    let mut result = ConferencePapers::default();
    for paper in papers.children(tags::EVENT_PAPER) {
        let Some(data) = paper.child(tags::EVENT_PAPER_DATA) else {
            continue;
        };
        if !in_period(&ctx.period, data.attr(tags::EVENT_PAPER_YEAR)) {
            continue;
        }
        let scope_code = paper
            .child(tags::EVENT_PAPER_DETAIL)
            .and_then(|detail| detail.attr(tags::EVENT_SCOPE).map(str::to_string))
            .unwrap_or_default();
        let kind_code = data.attr(tags::NATURE).unwrap_or("");

        match (EventScope::from_code(&scope_code), PaperKind::from_code(kind_code)) {
            (Some(scope), Some(kind)) => *result.slot_mut(scope, kind) += 1,
            _ => warn!(
                scope = scope_code.as_str(),
                nature = kind_code,
                "skipping conference paper with unknown classification"
            ),
        }
    }
    result
}

fn books_by_type<N: CurriculumNode>(books: &N, ctx: &ScoringContext<'_>) -> Books {
    let mut result = Books::default();
    for book in books.children(tags::BOOK) {
        if !dated_in_period(&ctx.period, &book, tags::BOOK_DATA, tags::YEAR) {
            continue;
        }
        if !long_enough(&book, tags::BOOK_DETAIL, ctx) {
            debug!("skipping book below the page minimum");
            continue;
        }
        let Some(data) = book.child(tags::BOOK_DATA) else {
            continue;
        };
        match data.attr(tags::BOOK_TYPE).map(str::trim) {
            Some("LIVRO_PUBLICADO") => result.published += 1,
            Some("LIVRO_ORGANIZADO_OU_EDICAO") => result.organized += 1,
            Some("NAO_INFORMADO") => result.unspecified += 1,
            other => warn!(book_type = ?other, "skipping book of unknown type"),
        }
    }
    result
}

fn long_enough<N: CurriculumNode>(item: &N, detail_tag: &str, ctx: &ScoringContext<'_>) -> bool {
    item.child(detail_tag)
        .is_some_and(|detail| meets_min_pages(detail.attr(tags::PAGE_COUNT), ctx.config.min_pages))
}
