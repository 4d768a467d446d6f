use std::sync::atomic::{AtomicUsize, Ordering};

use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;

/// Batches smaller than this run without a progress bar
const PROGRESS_THRESHOLD: usize = 10;

/// Progress tracker for displaying progress during scanning
#[derive(Debug, Default)]
pub struct ProgressTracker {
    /// Never draw a bar, whatever the batch size
    hidden: bool,
}

impl ProgressTracker {
    /// Create a new progress tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker that never draws
    pub fn hidden() -> Self {
        Self { hidden: true }
    }

    fn progress_bar(&self, len: usize) -> Option<ProgressBar> {
        if self.hidden || len <= PROGRESS_THRESHOLD {
            return None;
        }

        let pb = ProgressBar::new(len as u64);
        match ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} units ({eta}) {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("#>-")),
            Err(e) => warn!("Invalid progress template: {}", e),
        }
        Some(pb)
    }

    /// Map `operation` over `items` in parallel, keeping input order.
    ///
    /// Every item's result is collected before this returns.
    pub fn track_parallel_progress<T, F, R>(&self, items: &[T], operation: F) -> Vec<R>
    where
        T: Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        let progress_bar = self.progress_bar(items.len());
        let processed_count = AtomicUsize::new(0);

        let results: Vec<R> = items
            .par_iter()
            .map(|item| {
                let result = operation(item);

                let current = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
                if let Some(pb) = &progress_bar {
                    pb.set_position(current as u64);
                }

                result
            })
            .collect();

        if let Some(pb) = progress_bar {
            pb.finish_with_message("done");
        }

        results
    }
}
