mod class_processor;
mod stats;

// Re-export from submodules
pub use class_processor::{pool_classes, ClassProcessor};
pub use stats::ProcessingStats;
