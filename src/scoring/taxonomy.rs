//! Fixed category tree that eligible production is classified into.
//!
//! Every leaf is a plain counter. Inner nodes are typed structs so a
//! misspelled leaf is a compile error rather than a silently missing key.
//! [`Category`] gives every node a recursive `total` and a way to list its
//! leaves by dotted path (`bibliographic.conference_papers.local.full_paper`).

use serde::Serialize;

/// A node of the taxonomy: either a counter or a group of nodes.
pub trait Category {
    /// Sum of every leaf below this node.
    fn total(&self) -> u32;

    /// Push `(path, count)` for every leaf below this node, in declaration order.
    fn collect_leaves(&self, path: &str, out: &mut Vec<(String, u32)>);
}

impl Category for u32 {
    fn total(&self) -> u32 {
        *self
    }

    fn collect_leaves(&self, path: &str, out: &mut Vec<(String, u32)>) {
        out.push((path.to_string(), *self));
    }
}

fn join(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

macro_rules! category {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl Category for $ty {
            fn total(&self) -> u32 {
                0 $(+ self.$field.total())+
            }

            fn collect_leaves(&self, path: &str, out: &mut Vec<(String, u32)>) {
                $(self.$field.collect_leaves(&join(path, stringify!($field)), out);)+
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    pub education: Education,
    pub projects: Projects,
    pub bibliographic: Bibliographic,
    pub technical: Technical,
    pub other: OtherProduction,
}

impl Taxonomy {
    /// Every leaf counter keyed by its dotted path.
    pub fn leaf_counts(&self) -> Vec<(String, u32)> {
        let mut out = Vec::new();
        self.collect_leaves("", &mut out);
        out
    }
}

/// Points for concluded academic titles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Education {
    pub post_doctorate: u32,
    pub habilitation: u32,
    pub doctorate: u32,
    pub masters: u32,
}

/// Points for coordinated, externally funded projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Projects {
    pub research: u32,
    pub development: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bibliographic {
    pub articles: Articles,
    pub conference_papers: ConferencePapers,
    pub books_and_chapters: BooksAndChapters,
    pub other_types: OtherBibliographic,
}

/// Published articles by Qualis stratum.
///
/// No ranking table is consulted, so only `unclassified` is ever counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Articles {
    pub a1: u32,
    pub a2: u32,
    pub b1: u32,
    pub b2: u32,
    pub b3: u32,
    pub b4: u32,
    pub b5: u32,
    pub c: u32,
    pub unclassified: u32,
}

/// Conference papers by geographic scope of the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConferencePapers {
    pub international: PaperKinds,
    pub national: PaperKinds,
    pub regional: PaperKinds,
    pub local: PaperKinds,
    pub unspecified: PaperKinds,
}

/// Conference papers by completeness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaperKinds {
    pub full_paper: u32,
    pub expanded_abstract: u32,
    pub abstract_only: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BooksAndChapters {
    pub books: Books,
    pub chapters: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Books {
    pub published: u32,
    pub organized: u32,
    pub unspecified: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OtherBibliographic {
    pub translations: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Technical {
    pub software: u32,
    pub patents: Patents,
    pub technological_products: u32,
    pub processes_or_techniques: u32,
    pub technical_reports: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Patents {
    pub filed: u32,
    pub granted: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OtherProduction {
    pub artistic: Artistic,
    pub advising: Advising,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Artistic {
    pub presentations: u32,
    pub musical_compositions: u32,
    pub visual_arts: u32,
}

/// Completed supervisions by degree level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Advising {
    pub post_doctorate: u32,
    pub doctorate: u32,
    pub masters: u32,
    pub other: OtherAdvising,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OtherAdvising {
    pub specialization: u32,
    pub undergraduate_thesis: u32,
    pub undergraduate_research: u32,
    pub other_nature: u32,
}

category!(Taxonomy { education, projects, bibliographic, technical, other });
category!(Education { post_doctorate, habilitation, doctorate, masters });
category!(Projects { research, development });
category!(Bibliographic { articles, conference_papers, books_and_chapters, other_types });
category!(Articles { a1, a2, b1, b2, b3, b4, b5, c, unclassified });
category!(ConferencePapers { international, national, regional, local, unspecified });
category!(PaperKinds { full_paper, expanded_abstract, abstract_only });
category!(BooksAndChapters { books, chapters });
category!(Books { published, organized, unspecified });
category!(OtherBibliographic { translations });
category!(Technical { software, patents, technological_products, processes_or_techniques, technical_reports });
category!(Patents { filed, granted });
category!(OtherProduction { artistic, advising });
category!(Artistic { presentations, musical_compositions, visual_arts });
category!(Advising { post_doctorate, doctorate, masters, other });
category!(OtherAdvising { specialization, undergraduate_thesis, undergraduate_research, other_nature });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let taxonomy = Taxonomy::default();
        assert_eq!(taxonomy.total(), 0);
        assert!(taxonomy.leaf_counts().iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_nested_totals_sum_recursively() {
        let mut bibliographic = Bibliographic::default();
        bibliographic.articles.unclassified = 3;
        bibliographic.conference_papers.national.full_paper = 2;
        bibliographic.conference_papers.local.abstract_only = 1;
        bibliographic.books_and_chapters.books.published = 1;
        bibliographic.books_and_chapters.chapters = 4;
        bibliographic.other_types.translations = 1;

        assert_eq!(bibliographic.articles.total(), 3);
        assert_eq!(bibliographic.conference_papers.total(), 3);
        assert_eq!(bibliographic.books_and_chapters.total(), 5);
        assert_eq!(bibliographic.total(), 12);
    }

    #[test]
    fn test_leaf_paths() {
        let mut taxonomy = Taxonomy::default();
        taxonomy.bibliographic.conference_papers.international.full_paper = 1;
        taxonomy.other.advising.other.undergraduate_research = 2;

        let leaves = taxonomy.leaf_counts();
        assert!(leaves.contains(&(
            "bibliographic.conference_papers.international.full_paper".to_string(),
            1
        )));
        assert!(leaves.contains(&("other.advising.other.undergraduate_research".to_string(), 2)));
        assert_eq!(leaves[0].0, "education.post_doctorate");
    }

    #[test]
    fn test_leaf_count() {
        // 4 + 2 + (9 + 15 + 4 + 1) + (4 + 2) + (3 + 7)
        assert_eq!(Taxonomy::default().leaf_counts().len(), 51);
    }
}
