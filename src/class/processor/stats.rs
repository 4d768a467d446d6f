use std::path::PathBuf;
use serde::Serialize;

/// Statistics for one side's scan
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ProcessingStats {
    /// Total number of units processed
    pub total_files: usize,

    /// Total number of classes found, before pooling by name
    pub total_classes: usize,

    /// Number of units without any class declaration
    pub empty_files: usize,

    /// Number of units containing classes
    pub files_with_classes: usize,

    /// Number of units that could not be read
    pub error_files: usize,

    /// Paths to units that could not be read
    pub error_file_paths: Vec<PathBuf>,

    /// Advisory errors reported across all units
    pub advisory_errors: usize,
}

impl ProcessingStats {
    /// Create a new processing stats instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another stats instance into this one
    pub fn merge(&mut self, other: &Self) {
        self.total_files += other.total_files;
        self.total_classes += other.total_classes;
        self.empty_files += other.empty_files;
        self.files_with_classes += other.files_with_classes;
        self.error_files += other.error_files;
        self.error_file_paths.extend(other.error_file_paths.iter().cloned());
        self.advisory_errors += other.advisory_errors;
    }

    /// Units that yielded no classes (empty + unreadable)
    pub fn skipped_files(&self) -> usize {
        self.empty_files + self.error_files
    }

    /// Percentage of units that yielded at least one class
    pub fn success_rate(&self) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }

        (self.files_with_classes as f64 / self.total_files as f64) * 100.0
    }

    /// Average number of classes per unit that had any
    pub fn avg_classes_per_file(&self) -> f64 {
        if self.files_with_classes == 0 {
            return 0.0;
        }

        self.total_classes as f64 / self.files_with_classes as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_adds_counts_and_paths() {
        let mut a = ProcessingStats {
            total_files: 2,
            total_classes: 3,
            files_with_classes: 2,
            ..ProcessingStats::default()
        };
        let b = ProcessingStats {
            total_files: 2,
            empty_files: 1,
            error_files: 1,
            error_file_paths: vec![PathBuf::from("x.java")],
            ..ProcessingStats::default()
        };

        a.merge(&b);

        assert_eq!(a.total_files, 4);
        assert_eq!(a.skipped_files(), 2);
        assert_eq!(a.success_rate(), 50.0);
        assert_eq!(a.avg_classes_per_file(), 1.5);
        assert_eq!(a.error_file_paths, vec![PathBuf::from("x.java")]);
    }
}
