//! class-differ - grade a candidate set of classes against a reference set
//! by the shape of their fields and methods.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, Context};
use clap::{Parser, ValueEnum};
use log::{info, warn, error};

use class_differ::class::scanner::ProgressTracker;
use class_differ::class::ClassScanResult;
use class_differ::diff::{render_json, render_text};
use class_differ::{file_utils, ClassProcessor, Comparator, DiffConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Compare class structure between a reference and a candidate.
///
/// Each side is any mix of source files and directories. Classes are pooled
/// by name per side; members are compared by modifier and types only.
#[derive(Debug, Parser)]
#[command(name = "class-differ", author, version)]
struct Cli {
    /// Reference files or directories (the expected schema)
    #[arg(short, long, required = true, num_args = 1..)]
    reference: Vec<PathBuf>,

    /// Candidate files or directories (graded against the reference)
    #[arg(short, long, required = true, num_args = 1..)]
    candidate: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name used for the reference side in messages
    #[arg(long)]
    reference_label: Option<String>,

    /// Name used for the candidate side in messages
    #[arg(long)]
    candidate_label: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum number of files per side
    #[arg(long)]
    max_files: Option<usize>,

    /// Number of parsing threads
    #[arg(long)]
    threads: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn resolve_config(&self) -> Result<DiffConfig> {
        let mut config = match &self.config {
            Some(path) => DiffConfig::load(path)?,
            None => DiffConfig::default(),
        };

        if let Some(label) = &self.reference_label {
            config.labels.reference = label.clone();
        }
        if let Some(label) = &self.candidate_label {
            config.labels.candidate = label.clone();
        }
        if self.max_files.is_some() {
            config.scan.max_files = self.max_files;
        }
        if self.threads.is_some() {
            config.scan.parallel_threads = self.threads;
        }
        if self.verbose > 0 {
            config.scan.verbose_errors = true;
        }

        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn scan_side(processor: &ClassProcessor, label: &str, paths: &[PathBuf]) -> Result<ClassScanResult> {
    let result = processor
        .scan_paths(paths)
        .with_context(|| format!("Failed to scan {} inputs", label))?;

    if !result.errors.is_empty() {
        warn!("{}: {} advisory errors (run with -v to list them)", label, result.errors.len());
    }
    info!(
        "{}: {} classes from {} files ({} skipped, {:.0}% with classes)",
        label,
        result.classes.len(),
        result.stats.total_files,
        result.stats.skipped_files(),
        result.stats.success_rate()
    );

    Ok(result)
}

fn run(cli: &Cli) -> Result<bool> {
    let config = cli.resolve_config()?;
    let progress = if cli.no_progress {
        ProgressTracker::hidden()
    } else {
        ProgressTracker::new()
    };

    let processor = ClassProcessor::new(config.scan.clone()).with_progress(progress);
    let reference = scan_side(&processor, &config.labels.reference, &cli.reference)?;
    let candidate = scan_side(&processor, &config.labels.candidate, &cli.candidate)?;

    let mut totals = reference.stats.clone();
    totals.merge(&candidate.stats);
    info!(
        "Parsed {} files in total, {:.1} classes per file with classes",
        totals.total_files,
        totals.avg_classes_per_file()
    );

    let comparator = Comparator::new(config.labels);
    let report = comparator.compare_report(&reference.classes, &candidate.classes);

    let rendered = match cli.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)? + "\n",
    };

    match &cli.output {
        Some(path) => file_utils::write_string_to_file(path, &rendered)?,
        None => print!("{}", rendered),
    }

    Ok(report.is_match())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}
