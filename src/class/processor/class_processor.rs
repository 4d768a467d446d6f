use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, Context};
use log::{warn, info, debug};

use crate::class::scanner::{ClassParser, FileCollector, ProgressTracker};
use crate::class::types::{ClassRecord, ClassScanOptions, ClassScanResult, ParseOutcome};
use super::stats::ProcessingStats;

/// Pool classes from many units into one side, keyed by name.
///
/// Classes keep the position of the first declaration of their name; a later
/// declaration of the same name replaces the record.
pub fn pool_classes(classes: impl IntoIterator<Item = ClassRecord>) -> Vec<ClassRecord> {
    let mut pooled: Vec<ClassRecord> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for class in classes {
        match positions.get(&class.name) {
            Some(&pos) => {
                warn!("Class {} declared more than once; keeping the later declaration", class.name);
                pooled[pos] = class;
            }
            None => {
                positions.insert(class.name.clone(), pooled.len());
                pooled.push(class);
            }
        }
    }

    pooled
}

/// Class processor that turns a set of input paths into one side's classes
#[derive(Debug)]
pub struct ClassProcessor {
    /// Configuration options for processing
    options: ClassScanOptions,

    /// Parser for single units
    parser: ClassParser,

    /// File collector for expanding directories
    file_collector: FileCollector,

    /// Progress display for large batches
    progress_tracker: ProgressTracker,
}

impl ClassProcessor {
    /// Create a new class processor with the given options
    pub fn new(options: ClassScanOptions) -> Self {
        Self {
            parser: ClassParser::new(options.clone()),
            file_collector: FileCollector::with_extensions(options.extensions.clone()),
            progress_tracker: ProgressTracker::new(),
            options,
        }
    }

    /// Create a new class processor with default options
    pub fn with_defaults() -> Self {
        Self::new(ClassScanOptions::default())
    }

    /// Replace the progress tracker, e.g. with `ProgressTracker::hidden()`
    pub fn with_progress(mut self, progress_tracker: ProgressTracker) -> Self {
        self.progress_tracker = progress_tracker;
        self
    }

    fn thread_count(&self) -> usize {
        self.options.parallel_threads.unwrap_or_else(|| {
            let available = num_cpus::get();
            let used = std::cmp::max(1, available.saturating_sub(1));
            debug!("Using {} threads for parallel processing (available: {})", used, available);
            used
        })
    }

    fn parse_unit(&self, file: &Path) -> (ParseOutcome, bool) {
        match self.parser.parse_file(file) {
            Ok(outcome) => (outcome, true),
            Err(e) => {
                warn!("Failed to read {}: {:#}", file.display(), e);
                (ParseOutcome::failed(format!("{:#}", e)), false)
            }
        }
    }

    /// Parse every file and pool the results.
    ///
    /// All units are parsed (in parallel) before any pooling happens.
    pub fn process_files(&self, files: &[PathBuf]) -> Result<ClassScanResult> {
        let files_to_process = match self.options.max_files {
            Some(max_files) if files.len() > max_files => {
                warn!("Limiting to {} files out of {}", max_files, files.len());
                &files[..max_files]
            }
            _ => files,
        };
        info!("Processing {} files", files_to_process.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.thread_count())
            .build()
            .context("Failed to build thread pool")?;

        let results = pool.install(|| {
            self.progress_tracker
                .track_parallel_progress(files_to_process, |file| self.parse_unit(file))
        });

        let mut stats = ProcessingStats::new();
        let mut all_classes = Vec::new();
        let mut errors = Vec::new();
        stats.total_files = results.len();

        for (file, (outcome, readable)) in files_to_process.iter().zip(results) {
            if !readable {
                stats.error_files += 1;
                stats.error_file_paths.push(file.clone());
            } else if outcome.classes.is_empty() {
                stats.empty_files += 1;
            } else {
                stats.files_with_classes += 1;
                stats.total_classes += outcome.classes.len();
            }

            stats.advisory_errors += outcome.errors.len();
            errors.extend(
                outcome.errors
                    .into_iter()
                    .map(|error| format!("{}: {}", file.display(), error)),
            );
            all_classes.extend(outcome.classes);
        }

        info!("Processed {} files, found {} classes", stats.total_files, stats.total_classes);

        Ok(ClassScanResult {
            classes: pool_classes(all_classes),
            errors,
            stats,
            files: files_to_process.to_vec(),
        })
    }

    /// Expand files and directories, then process every unit found
    pub fn scan_paths(&self, paths: &[PathBuf]) -> Result<ClassScanResult> {
        let files = self.file_collector.collect_paths(paths)?;
        info!("Found {} files to process", files.len());

        self.process_files(&files)
    }

    /// Scan a directory recursively for source units
    pub fn scan_directory(&self, input_dir: impl AsRef<Path>) -> Result<ClassScanResult> {
        let input_dir = input_dir.as_ref();
        info!("Scanning directory: {}", input_dir.display());

        let files = self.file_collector.collect_files(input_dir)?;
        self.process_files(&files)
    }
}
