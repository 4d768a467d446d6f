//! Class-level structural comparison of a reference set against a candidate.
//!
//! The reference is the schema: only its classes and its signatures are
//! enumerated. Anything that exists only in the candidate goes unreported.

use std::collections::HashMap;

use log::{debug, info};

use crate::class::types::ClassRecord;
use super::signature::{reduce, Signed};
use super::types::{
    ColorClass, DiffEntry, DiffNode, DiffReport, InheritanceNote, Severity, SideLabels,
};

/// Distinct classes in first-seen order; a later record of a name wins.
fn index_by_name(classes: &[ClassRecord]) -> (Vec<&str>, HashMap<&str, &ClassRecord>) {
    let mut order = Vec::new();
    let mut by_name = HashMap::new();

    for class in classes {
        if by_name.insert(class.name.as_str(), class).is_none() {
            order.push(class.name.as_str());
        }
    }

    (order, by_name)
}

/// Compares class sets, naming the sides with its labels
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    labels: SideLabels,
}

impl Comparator {
    /// Create a comparator that names the sides with `labels`
    pub fn new(labels: SideLabels) -> Self {
        Self { labels }
    }

    /// One node per distinct reference class, in reference order.
    pub fn compare(&self, reference: &[ClassRecord], candidate: &[ClassRecord]) -> Vec<DiffNode> {
        let (order, reference_by_name) = index_by_name(reference);
        let (_, candidate_by_name) = index_by_name(candidate);

        order
            .into_iter()
            .map(|name| {
                let class = reference_by_name[name];
                match candidate_by_name.get(name) {
                    Some(counterpart) => self.diff_class(class, counterpart),
                    None => self.missing_class(class),
                }
            })
            .collect()
    }

    /// Per-class nodes plus the unit-level class count advisory.
    pub fn compare_report(&self, reference: &[ClassRecord], candidate: &[ClassRecord]) -> DiffReport {
        let nodes = self.compare(reference, candidate);
        let reference_class_count = index_by_name(reference).0.len();
        let candidate_class_count = index_by_name(candidate).0.len();

        let report = DiffReport {
            reference_label: self.labels.reference.clone(),
            candidate_label: self.labels.candidate.clone(),
            nodes,
            reference_class_count,
            candidate_class_count,
            class_count_note: self.class_count_note(reference_class_count, candidate_class_count),
        };
        info!(
            "Compared {} {} classes against {} {} classes: {}",
            reference_class_count,
            self.labels.reference,
            candidate_class_count,
            self.labels.candidate,
            report.overall()
        );

        report
    }

    fn class_count_note(&self, reference: usize, candidate: usize) -> Option<DiffEntry> {
        if reference == candidate {
            return None;
        }

        Some(DiffEntry {
            signature: "classes".to_string(),
            message: format!(
                "{} has {} classes, {} has {}",
                self.labels.reference, reference, self.labels.candidate, candidate
            ),
            severity: if reference > candidate {
                Severity::CountMismatchLow
            } else {
                Severity::CountMismatchHigh
            },
            count: Some(reference),
            candidate_count: Some(candidate),
        })
    }

    fn missing_class(&self, class: &ClassRecord) -> DiffNode {
        debug!("Class {} not found in {}", class.name, self.labels.candidate);

        DiffNode {
            class_name: class.name.clone(),
            color_class: ColorClass::Mismatch,
            extends_name: class.extends.clone(),
            inheritance_note: None,
            attribute_diffs: self.missing_members(&class.name, &class.attributes),
            method_diffs: self.missing_members(&class.name, &class.methods),
            children: None,
        }
    }

    fn missing_members<T: Signed>(&self, class_name: &str, members: &[T]) -> Vec<DiffEntry> {
        reduce(members)
            .iter()
            .map(|(signature, count)| DiffEntry {
                signature: signature.to_string(),
                message: format!(
                    "{}: {} has {}, {} has no class '{}'",
                    signature, self.labels.reference, count, self.labels.candidate, class_name
                ),
                severity: Severity::Added,
                count: Some(count),
                candidate_count: None,
            })
            .collect()
    }

    fn diff_class(&self, class: &ClassRecord, counterpart: &ClassRecord) -> DiffNode {
        let inheritance_note = self.inheritance_note(class.extends.as_deref(), counterpart.extends.as_deref());
        let attribute_diffs = self.diff_members(&class.attributes, &counterpart.attributes);
        let method_diffs = self.diff_members(&class.methods, &counterpart.methods);

        let differs = inheritance_note.is_some()
            || attribute_diffs.iter().chain(&method_diffs).any(|e| !e.severity.is_ok());

        DiffNode {
            class_name: class.name.clone(),
            color_class: if differs { ColorClass::Mismatch } else { ColorClass::Match },
            extends_name: class.extends.clone(),
            inheritance_note,
            attribute_diffs,
            method_diffs,
            children: None,
        }
    }

    fn inheritance_note(&self, reference: Option<&str>, candidate: Option<&str>) -> Option<InheritanceNote> {
        let (r, c) = (&self.labels.reference, &self.labels.candidate);

        let message = match (reference, candidate) {
            (Some(a), None) => format!("{r} extends '{a}' but {c} didn't extend"),
            (None, Some(b)) => format!("{r} didn't extend but {c} extends '{b}'"),
            (Some(a), Some(b)) if a != b => format!("{r} extends '{a}' but {c} extends '{b}'"),
            _ => return None,
        };

        Some(InheritanceNote {
            message,
            severity: Severity::Removed,
        })
    }

    fn diff_members<T: Signed>(&self, reference: &[T], candidate: &[T]) -> Vec<DiffEntry> {
        let expected = reduce(reference);
        let actual = reduce(candidate);
        let (r, c) = (&self.labels.reference, &self.labels.candidate);

        expected
            .iter()
            .map(|(signature, count)| {
                let (severity, message, candidate_count) = match actual.get(signature) {
                    None => (
                        Severity::Removed,
                        format!("{signature}: missing from {c}"),
                        None,
                    ),
                    Some(found) if found < count => (
                        Severity::CountMismatchLow,
                        format!("{signature}: {r} has {count}, {c} has {found}"),
                        Some(found),
                    ),
                    Some(found) if found > count => (
                        Severity::CountMismatchHigh,
                        format!("{signature}: {r} has {count}, {c} has {found}"),
                        Some(found),
                    ),
                    Some(_) => (
                        Severity::Ok,
                        format!("{signature}: {count} in both"),
                        None,
                    ),
                };

                DiffEntry {
                    signature: signature.to_string(),
                    message,
                    count: (severity != Severity::Removed).then_some(count),
                    severity,
                    candidate_count,
                }
            })
            .collect()
    }
}

/// Compare with the default "reference"/"candidate" labels.
pub fn compare(reference: &[ClassRecord], candidate: &[ClassRecord]) -> Vec<DiffNode> {
    Comparator::default().compare(reference, candidate)
}
