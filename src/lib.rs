pub mod class;
pub mod config;
pub mod diff;
pub mod utils;

// Re-export main types and functions for easier access
pub use class::types::{
    AttributeRecord, ClassRecord, ClassScanOptions, ClassScanResult, MethodRecord, Modifier,
    ParameterRecord, ParseOutcome,
};
pub use class::{parse, ClassParser, ClassProcessor, ParseError, ProcessingStats};
pub use config::DiffConfig;
pub use diff::{compare, Comparator, DiffEntry, DiffNode, DiffReport, Severity, SideLabels};

// Re-export utility functions
pub use utils::file_utils;
