pub mod error;
pub mod types;
pub mod scanner;
pub mod processor;

// Re-export the main API for easier access
pub use error::ParseError;
pub use types::{
    AttributeRecord, ClassRecord, ClassScanOptions, ClassScanResult, MethodRecord, Modifier,
    ParameterRecord, ParseOutcome,
};
pub use scanner::{parse, ClassParser};
pub use processor::{ClassProcessor, ProcessingStats};
