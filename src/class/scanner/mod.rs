//! Structural scanning of source units: comment removal, class body
//! extraction and member parsing.

pub mod attribute_parser;
pub mod body_extractor;
pub mod comments;
pub mod lexer;
pub mod method_parser;
mod file_collector;
mod parser;
mod progress;

pub use file_collector::FileCollector;
pub use parser::{parse, ClassParser};
pub use progress::ProgressTracker;
