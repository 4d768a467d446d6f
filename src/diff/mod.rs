//! Signature-level comparison of two parsed class sets.
//!
//! Members are reduced to name-free signatures and counted; each reference
//! class is then graded against the candidate class of the same name.

pub mod comparator;
pub mod report;
pub mod signature;
pub mod types;

pub use comparator::{compare, Comparator};
pub use report::{render_json, render_text};
pub use signature::{reduce, AttributeSignature, MethodSignature, SignatureCounts, Signed};
pub use types::{
    ColorClass, DiffEntry, DiffNode, DiffReport, InheritanceNote, Severity, SeverityCounts,
    SideLabels,
};
