use std::fmt;
use serde::{Serialize, Deserialize};

/// Names used for the two sides in every message the comparator writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideLabels {
    /// The side that defines the expected schema
    pub reference: String,

    /// The side graded against the reference
    pub candidate: String,
}

impl SideLabels {
    /// Labels for the reference and candidate sides
    pub fn new(reference: impl Into<String>, candidate: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            candidate: candidate.into(),
        }
    }
}

impl Default for SideLabels {
    fn default() -> Self {
        Self::new("reference", "candidate")
    }
}

/// Classification of one diff entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// Present in the reference; the candidate has no such class at all
    Added,
    /// Present in the reference, absent from the candidate's class
    Removed,
    /// The candidate has more occurrences than the reference
    CountMismatchHigh,
    /// The reference has more occurrences than the candidate
    CountMismatchLow,
    Ok,
}

impl Severity {
    /// True only for `Ok`
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Short tag used by the text renderer
    pub fn label(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::CountMismatchHigh => "count-high",
            Self::CountMismatchLow => "count-low",
            Self::Ok => "ok",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall colouring of a class node or a whole report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorClass {
    Match,
    Mismatch,
    Partial,
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Match => "match",
            Self::Mismatch => "mismatch",
            Self::Partial => "partial",
        })
    }
}

/// One compared signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    /// Wire form of the signature, e.g. `public|int`
    pub signature: String,
    pub message: String,
    pub severity: Severity,

    /// Occurrences on the reference side, when meaningful for the severity
    pub count: Option<usize>,

    /// Occurrences on the candidate side, set for count mismatches
    pub candidate_count: Option<usize>,
}

/// Difference between the two sides' `extends` clauses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritanceNote {
    pub message: String,
    pub severity: Severity,
}

/// Comparison result for one reference class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffNode {
    pub class_name: String,
    pub color_class: ColorClass,

    /// The reference class's superclass
    pub extends_name: Option<String>,
    pub inheritance_note: Option<InheritanceNote>,
    pub attribute_diffs: Vec<DiffEntry>,
    pub method_diffs: Vec<DiffEntry>,

    /// Nested nodes; always `None` for the class-level comparator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DiffNode>>,
}

impl DiffNode {
    /// Attribute and method entries together
    pub fn entries(&self) -> impl Iterator<Item = &DiffEntry> {
        self.attribute_diffs.iter().chain(self.method_diffs.iter())
    }

    /// True when the class matched on every point
    pub fn is_match(&self) -> bool {
        self.color_class == ColorClass::Match
    }
}

/// Number of entries per severity across a report
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityCounts {
    pub added: usize,
    pub removed: usize,
    pub count_mismatch_high: usize,
    pub count_mismatch_low: usize,
    pub ok: usize,
}

impl SeverityCounts {
    /// Count one entry of `severity`
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Added => self.added += 1,
            Severity::Removed => self.removed += 1,
            Severity::CountMismatchHigh => self.count_mismatch_high += 1,
            Severity::CountMismatchLow => self.count_mismatch_low += 1,
            Severity::Ok => self.ok += 1,
        }
    }
}

/// Full comparison of two class sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffReport {
    pub reference_label: String,
    pub candidate_label: String,

    /// One node per distinct reference class, in reference order
    pub nodes: Vec<DiffNode>,

    /// Distinct class names on each side
    pub reference_class_count: usize,
    pub candidate_class_count: usize,

    /// Set when the two sides hold a different number of classes
    pub class_count_note: Option<DiffEntry>,
}

impl DiffReport {
    /// `Match` when everything agrees, `Mismatch` when no class matches,
    /// `Partial` in between
    pub fn overall(&self) -> ColorClass {
        let matched = self.nodes.iter().filter(|n| n.is_match()).count();

        if matched == self.nodes.len() && self.class_count_note.is_none() {
            ColorClass::Match
        } else if matched == 0 {
            ColorClass::Mismatch
        } else {
            ColorClass::Partial
        }
    }

    /// True when the overall result is `Match`
    pub fn is_match(&self) -> bool {
        self.overall() == ColorClass::Match
    }

    /// Tally of member entries, plus inheritance notes
    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();

        for node in &self.nodes {
            for entry in node.entries() {
                counts.record(entry.severity);
            }
            if let Some(note) = &node.inheritance_note {
                counts.record(note.severity);
            }
        }

        counts
    }
}
