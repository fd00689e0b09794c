//! Quillprint - word-frequency authorship attribution.
//!
//! The main entry point for qp, handling:
//! - Corpus discovery and frequency-model training
//! - Naive Bayes log-score attribution of query documents
//! - Report rendering (human or JSON)

use clap::{Args, Parser, Subcommand};
use qp_common::error::{format_error_human, ErrorCategory};
use qp_common::{Error, OutputFormat, StructuredError, SCHEMA_VERSION};
use qp_config::{resolve_config, ConfigOptions, ResolvedConfig};
use qp_core::exit_codes::ExitCode;
use qp_core::logging::{init_logging, LogConfig};
use qp_core::run::{execute_run, train_model};
use serde::Serialize;
use std::path::PathBuf;

/// Quillprint - which candidate author most likely wrote this text?
#[derive(Parser)]
#[command(name = "qp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Path to config.json (falls back to QUILLPRINT_CONFIG, then XDG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "human")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Golden path: train on the corpus, score every query document
    Run(RunArgs),

    /// Validate configuration and corpus layout without scoring
    Check(CheckArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Corpus directory override
    #[arg(long)]
    corpus_dir: Option<PathBuf>,

    /// Candidate author (repeatable; replaces the configured set)
    #[arg(long = "author")]
    authors: Vec<String>,

    /// Query documents to score (replaces the configured list)
    #[arg(value_name = "QUERY_FILE")]
    query_files: Vec<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct CheckArgs {
    /// Corpus directory override
    #[arg(long)]
    corpus_dir: Option<PathBuf>,

    /// Candidate author (repeatable; replaces the configured set)
    #[arg(long = "author")]
    authors: Vec<String>,
}

/// Summary payload for `qp check`.
#[derive(Debug, Serialize)]
struct CheckReport {
    schema_version: &'static str,
    config_source: String,
    config_path: Option<PathBuf>,
    authors: Vec<String>,
    reference_documents: f64,
    vocabulary_words: usize,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_flags(
        cli.global.verbose,
        cli.global.quiet,
        cli.global.no_color,
    ));

    let exit = dispatch(cli);
    std::process::exit(exit.as_i32());
}

fn dispatch(cli: Cli) -> ExitCode {
    match cli
        .command
        .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    {
        Commands::Run(args) => cmd_run(&cli.global, &args),
        Commands::Check(args) => cmd_check(&cli.global, &args),
        Commands::Version => {
            println!("qp {}", env!("CARGO_PKG_VERSION"));
            ExitCode::Clean
        }
    }
}

fn report_error(global: &GlobalOpts, err: &Error) {
    match global.format {
        OutputFormat::Human => eprintln!("{}", format_error_human(err, !global.no_color)),
        OutputFormat::Json => eprintln!("{}", StructuredError::from(err).to_json()),
    }
}

fn resolve(
    global: &GlobalOpts,
    corpus_dir: Option<PathBuf>,
    authors: Vec<String>,
    query_files: Vec<PathBuf>,
) -> Result<ResolvedConfig, Error> {
    resolve_config(&ConfigOptions {
        config_path: global.config.clone(),
        corpus_dir,
        authors,
        query_files,
    })
    .map_err(Error::from)
}

fn cmd_run(global: &GlobalOpts, args: &RunArgs) -> ExitCode {
    let config = match resolve(
        global,
        args.corpus_dir.clone(),
        args.authors.clone(),
        args.query_files.clone(),
    ) {
        Ok(config) => config,
        Err(err) => {
            report_error(global, &err);
            return ExitCode::ConfigError;
        }
    };

    let report = match execute_run(&config) {
        Ok(report) => report,
        Err(err) => {
            report_error(global, &err);
            return match err.category() {
                ErrorCategory::Config => ExitCode::ConfigError,
                _ => ExitCode::TrainingError,
            };
        }
    };

    match global.format {
        OutputFormat::Human => {
            print!("{}", report.render_human());
            for failure in &report.results.failed {
                eprintln!("✗ {}: {}", failure.item_id, failure.error.message);
            }
        }
        OutputFormat::Json => {
            let payload = report
                .to_json()
                .unwrap_or_else(|err| StructuredError::from(&err).to_json());
            println!("{payload}");
        }
    }

    report.exit_code()
}

fn cmd_check(global: &GlobalOpts, args: &CheckArgs) -> ExitCode {
    let config = match resolve(
        global,
        args.corpus_dir.clone(),
        args.authors.clone(),
        Vec::new(),
    ) {
        Ok(config) => config,
        Err(err) => {
            report_error(global, &err);
            return ExitCode::ConfigError;
        }
    };

    let model = match train_model(&config) {
        Ok(model) => model,
        Err(err) => {
            report_error(global, &err);
            return ExitCode::TrainingError;
        }
    };

    let check = CheckReport {
        schema_version: SCHEMA_VERSION,
        config_source: config.source.to_string(),
        config_path: config.path.clone(),
        authors: config.authors.iter().map(|a| a.to_string()).collect(),
        reference_documents: model.total_documents(),
        vocabulary_words: model.vocabulary().len(),
    };

    match global.format {
        OutputFormat::Human => {
            println!(
                "Configuration OK: {} authors, {} reference works, {} vocabulary words",
                check.authors.len(),
                check.reference_documents,
                check.vocabulary_words
            );
            println!("Config source: {}", check.config_source);
            if let Some(path) = &check.config_path {
                println!("Config file: {}", path.display());
            }
        }
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(&check)
                .unwrap_or_else(|err| StructuredError::from(&Error::from(err)).to_json());
            println!("{payload}");
        }
    }

    ExitCode::Clean
}
