use std::fmt;
use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use super::processor::ProcessingStats;

/// Access modifier of a member declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Private,
    Protected,
    /// No explicit modifier token was present
    Default,
}

impl Modifier {
    /// Map a source token to an explicit modifier, if it is one
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "protected" => Some(Self::Protected),
            _ => None,
        }
    }

    /// Keyword spelling; `default` for package-private members
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field declaration found in a class body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRecord {
    pub modifier: Modifier,

    /// Declared type, e.g. `int`, `List<String>` or `byte[]`
    #[serde(rename = "type")]
    pub type_name: String,

    /// Field name; kept for display, never compared
    pub name: String,
}

/// One entry of a method's parameter list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
}

/// A method declaration found in a class body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub modifier: Modifier,
    pub return_type: String,

    /// Method name; kept for display, never compared
    pub method_name: String,

    /// Parameters in declaration order
    pub parameters: Vec<ParameterRecord>,
}

/// A class extracted from one source unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Name of the class, unique within one parse unit
    pub name: String,

    /// Superclass name, if the header carried an `extends` clause
    pub extends: Option<String>,

    /// Field declarations in source order
    pub attributes: Vec<AttributeRecord>,

    /// Method declarations in source order
    pub methods: Vec<MethodRecord>,
}

/// Result of parsing one source unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Classes found in the unit
    pub classes: Vec<ClassRecord>,

    /// Advisory errors; never fatal to the caller
    pub errors: Vec<String>,
}

impl ParseOutcome {
    /// An outcome with no classes and a single advisory error
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            classes: Vec::new(),
            errors: vec![error.into()],
        }
    }
}

/// Configuration options for class scanning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassScanOptions {
    /// Whether to log every advisory error as it is found
    pub verbose_errors: bool,

    /// Maximum number of files to process per side
    pub max_files: Option<usize>,

    /// Number of parallel threads to use for scanning
    pub parallel_threads: Option<usize>,

    /// File extensions collected when a directory is scanned
    pub extensions: Vec<String>,
}

impl Default for ClassScanOptions {
    fn default() -> Self {
        Self {
            verbose_errors: false,
            max_files: None,
            parallel_threads: None,
            extensions: vec!["java".to_string()],
        }
    }
}

/// Result of scanning every unit of one side
#[derive(Debug, Clone)]
pub struct ClassScanResult {
    /// Classes pooled by name across all units, in first-seen order
    pub classes: Vec<ClassRecord>,

    /// Advisory errors, each prefixed with the unit it came from
    pub errors: Vec<String>,

    /// Statistics about the scanning process
    pub stats: ProcessingStats,

    /// Units that were scanned, in the order they were given
    pub files: Vec<PathBuf>,
}
