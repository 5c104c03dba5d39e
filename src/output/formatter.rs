use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::scoring::ScoreResult;

const LABEL_WIDTH: usize = 38;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Human-labelled category totals, in rubric order.
fn total_rows(result: &ScoreResult) -> [(&'static str, u32); 6] {
    let tally = result.tally();
    [
        ("Academic titles", tally.academic_titles),
        ("Research and development projects", tally.projects),
        ("Bibliographic production", tally.bibliographic),
        ("Technical production", tally.technical),
        ("Other production", tally.other),
        ("Published articles", result.articles()),
    ]
}

/// Human-labelled leaf counts, in the order evaluators read them.
pub fn summary_rows(result: &ScoreResult) -> Vec<(&'static str, u32)> {
    let t = result.taxonomy();
    let papers = &t.bibliographic.conference_papers;
    let books = &t.bibliographic.books_and_chapters;
    let advising = &t.other.advising;

    vec![
        ("Full papers, international events", papers.international.full_paper),
        ("Full papers, national events", papers.national.full_paper),
        ("Full papers, regional events", papers.regional.full_paper),
        ("Full papers, local events", papers.local.full_paper),
        ("Full papers, unspecified events", papers.unspecified.full_paper),
        ("Expanded abstracts, international", papers.international.expanded_abstract),
        ("Expanded abstracts, national", papers.national.expanded_abstract),
        ("Expanded abstracts, regional", papers.regional.expanded_abstract),
        ("Expanded abstracts, local", papers.local.expanded_abstract),
        ("Expanded abstracts, unspecified", papers.unspecified.expanded_abstract),
        ("Abstracts, international", papers.international.abstract_only),
        ("Abstracts, national", papers.national.abstract_only),
        ("Abstracts, regional", papers.regional.abstract_only),
        ("Abstracts, local", papers.local.abstract_only),
        ("Abstracts, unspecified", papers.unspecified.abstract_only),
        ("Books published", books.books.published),
        ("Books organized or edited", books.books.organized),
        ("Books of unspecified type", books.books.unspecified),
        ("Book chapters", books.chapters),
        ("Translations", t.bibliographic.other_types.translations),
        ("Software", t.technical.software),
        ("Patents filed", t.technical.patents.filed),
        ("Patents granted", t.technical.patents.granted),
        ("Technological products", t.technical.technological_products),
        ("Processes or techniques", t.technical.processes_or_techniques),
        ("Technical reports", t.technical.technical_reports),
        ("Artistic presentations", t.other.artistic.presentations),
        ("Musical compositions", t.other.artistic.musical_compositions),
        ("Visual artworks", t.other.artistic.visual_arts),
        ("Post-doctorate supervisions", advising.post_doctorate),
        ("Doctorate supervisions", advising.doctorate),
        ("Master's supervisions", advising.masters),
        ("Specialization supervisions", advising.other.specialization),
        ("Undergraduate thesis supervisions", advising.other.undergraduate_thesis),
        ("Undergraduate research supervisions", advising.other.undergraduate_research),
        ("Other supervisions", advising.other.other_nature),
    ]
}

fn format_row(label: &str, value: u32) -> String {
    format!("{:<width$}{:>5}", format!("{}:", label), value, width = LABEL_WIDTH)
}

/// Format one result as a multi-line report: owner, period, category totals,
/// then every counted item type.
pub fn format_summary(result: &ScoreResult, use_colors: bool) -> String {
    let owner = result.owner();
    let period = format!("Period: {}", result.period());
    let mut lines = Vec::new();

    if use_colors {
        lines.push(owner.full_name.bold().to_string());
        lines.push(owner.identifier.cyan().to_string());
        lines.push(period.dimmed().to_string());
    } else {
        lines.push(owner.full_name.clone());
        lines.push(owner.identifier.clone());
        lines.push(period);
    }
    lines.push(String::new());

    for (label, value) in total_rows(result) {
        let row = format_row(label, value);
        if use_colors {
            lines.push(row.bold().to_string());
        } else {
            lines.push(row);
        }
    }
    lines.push(String::new());

    for (label, value) in summary_rows(result) {
        let row = format_row(label, value);
        if use_colors && value == 0 {
            lines.push(row.dimmed().to_string());
        } else {
            lines.push(row);
        }
    }

    lines.join("\n")
}

/// Format one result as `key\tvalue` lines for scripting (no colors).
/// Leaf counts use their dotted taxonomy paths.
pub fn format_tsv(result: &ScoreResult) -> String {
    let owner = result.owner();
    let mut lines = vec![
        format!("identifier\t{}", owner.identifier),
        format!("full_name\t{}", owner.full_name),
        format!("period\t{}", result.period()),
    ];
    lines.extend(
        result
            .tally()
            .entries()
            .iter()
            .map(|(name, total)| format!("total.{}\t{}", name, total)),
    );
    lines.push(format!("articles\t{}", result.articles()));
    lines.extend(
        result
            .leaf_counts()
            .iter()
            .map(|(path, count)| format!("{}\t{}", path, count)),
    );
    lines.join("\n")
}

/// Format results as a pretty-printed JSON array.
pub fn format_json(results: &[ScoreResult]) -> Result<String> {
    serde_json::to_string_pretty(results).context("Failed to serialize scores")
}
