use std::path::Path;

use anyhow::{Result, Context};
use log::{debug, info};
use serde::{Serialize, Deserialize};

use crate::class::types::ClassScanOptions;
use crate::diff::types::SideLabels;
use crate::utils::file_utils;

/// Run configuration, loadable from a TOML file.
///
/// ```toml
/// [scan]
/// extensions = ["java"]
/// parallel_threads = 4
///
/// [labels]
/// reference = "solution"
/// candidate = "submission"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    pub scan: ClassScanOptions,
    pub labels: SideLabels,
}

impl DiffConfig {
    /// Parse configuration text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let text = file_utils::read_file_to_string(path)?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
