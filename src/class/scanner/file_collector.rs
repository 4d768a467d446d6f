use std::path::{Path, PathBuf};
use anyhow::{Result, bail};
use log::{debug, trace};
use walkdir::WalkDir;

/// File collector for finding source units
#[derive(Debug, Default, Clone)]
pub struct FileCollector {
    /// Valid file extensions to collect
    valid_extensions: Vec<String>,
}

impl FileCollector {
    /// Create a new file collector for the given extensions
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self {
            valid_extensions: extensions,
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.valid_extensions.iter().any(|valid| ext.eq_ignore_ascii_case(valid)))
    }

    /// Collect all files with valid extensions below `input_dir`, sorted by path
    pub fn collect_files(&self, input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let input_dir = input_dir.as_ref();
        debug!("Collecting files from directory: {}", input_dir.display());

        let mut files = Vec::new();

        for entry in WalkDir::new(input_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if self.accepts(entry.path()) {
                trace!("Found file: {}", entry.path().display());
                files.push(entry.path().to_owned());
            }
        }

        debug!("Collected {} files from {}", files.len(), input_dir.display());
        Ok(files)
    }

    /// Expand a mix of files and directories into the units to parse.
    ///
    /// Files named directly are kept whatever their extension; directories
    /// are walked for matching files. Order follows the input.
    pub fn collect_paths(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for path in paths {
            if path.is_dir() {
                files.extend(self.collect_files(path)?);
            } else if path.is_file() {
                files.push(path.clone());
            } else {
                bail!("Input path does not exist: {}", path.display());
            }
        }

        Ok(files)
    }
}
