use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use score_lattes::config::Config;
use score_lattes::curriculum::CurriculumDocument;
use score_lattes::scoring::{score_document, EvaluationPeriod, ScoreResult};

const EXIT_SUCCESS: i32 = 0;
const EXIT_SCORING: i32 = 1;
const EXIT_CONFIG: i32 = 2;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Aligned human-readable report
    Text,
    /// key<TAB>value lines
    Tsv,
    /// JSON array, one object per curriculum
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "score-lattes")]
#[command(about = "Computes productivity scores from Lattes curricula", long_about = None)]
#[command(version)]
struct Cli {
    /// XML files containing Lattes curricula
    #[arg(value_name = "FILE", required_unless_present = "print_config")]
    files: Vec<PathBuf>,

    /// Consider academic productivity since year YYYY
    #[arg(short, long = "since-year", value_name = "YYYY")]
    since: Option<i32>,

    /// Consider academic productivity until year YYYY (defaults to the current year)
    #[arg(short, long = "until-year", value_name = "YYYY")]
    until: Option<i32>,

    /// Path to config file (defaults to ~/.config/score-lattes/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Explain what is being done
    #[arg(short, long)]
    verbose: bool,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    let cli = Cli::parse();
    score_lattes::telemetry::init_tracing(cli.verbose);
    let start_time = Instant::now();

    // Load config
    let config = match score_lattes::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = score_lattes::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.print_config {
        match serde_saphyr::to_string(&config) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Failed to serialize config: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
        std::process::exit(EXIT_SUCCESS);
    }

    let period = match resolve_period(&cli, &config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid period: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    tracing::debug!(%period, files = cli.files.len(), "scoring curricula");

    // Score every file; a failure on one does not stop the others
    let mut results: Vec<ScoreResult> = Vec::new();
    let mut any_failed = false;

    for path in &cli.files {
        let scored = CurriculumDocument::open(path)
            .and_then(|document| score_document(&document, period, &config.scoring));
        match scored {
            Ok(result) => results.push(result),
            Err(e) => {
                eprintln!("Failed to score {}: {:#}", path.display(), e);
                any_failed = true;
            }
        }
    }

    match cli.format {
        OutputFormat::Text => {
            let use_colors = score_lattes::output::should_use_colors();
            let reports: Vec<String> = results
                .iter()
                .map(|r| score_lattes::output::format_summary(r, use_colors))
                .collect();
            if !reports.is_empty() {
                println!("{}", reports.join("\n\n"));
            }
        }
        OutputFormat::Tsv => {
            let reports: Vec<String> = results.iter().map(score_lattes::output::format_tsv).collect();
            if !reports.is_empty() {
                println!("{}", reports.join("\n\n"));
            }
        }
        OutputFormat::Json => match score_lattes::output::format_json(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{:#}", e);
                std::process::exit(EXIT_SCORING);
            }
        },
    }

    tracing::debug!(
        scored = results.len(),
        elapsed = ?start_time.elapsed(),
        "done"
    );

    if any_failed {
        std::process::exit(EXIT_SCORING);
    }
    std::process::exit(EXIT_SUCCESS);
}

/// Command-line flags win over the config file; `until` falls back to the
/// current year and `since` to unbounded.
fn resolve_period(cli: &Cli, config: &Config) -> Result<EvaluationPeriod, score_lattes::ScoreError> {
    let since = cli.since.or(config.period.since);
    match cli.until.or(config.period.until) {
        Some(until) => EvaluationPeriod::new(since, until),
        None => EvaluationPeriod::until_current_year(since),
    }
}
