pub mod formatter;

pub use formatter::{format_json, format_summary, format_tsv, should_use_colors, summary_rows};
