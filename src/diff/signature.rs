//! Structural signatures and their first-occurrence-ordered multiset.
//!
//! A signature ignores member names: two fields `public int a;` and
//! `public int b;` share the signature `public|int`.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::class::types::{AttributeRecord, MethodRecord, Modifier};

/// Shape of a field: modifier and type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeSignature {
    pub modifier: Modifier,
    pub type_name: String,
}

impl fmt::Display for AttributeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.modifier, self.type_name)
    }
}

/// Shape of a method: modifier, return type and ordered parameter types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    pub modifier: Modifier,
    pub return_type: String,
    pub parameter_types: Vec<String>,
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            self.modifier,
            self.return_type,
            self.parameter_types.join(",")
        )
    }
}

/// A record that reduces to a structural signature
pub trait Signed {
    type Signature: Clone + Eq + Hash + fmt::Display;

    fn signature(&self) -> Self::Signature;
}

impl Signed for AttributeRecord {
    type Signature = AttributeSignature;

    fn signature(&self) -> AttributeSignature {
        AttributeSignature {
            modifier: self.modifier,
            type_name: self.type_name.clone(),
        }
    }
}

impl Signed for MethodRecord {
    type Signature = MethodSignature;

    fn signature(&self) -> MethodSignature {
        MethodSignature {
            modifier: self.modifier,
            return_type: self.return_type.clone(),
            parameter_types: self.parameters.iter().map(|p| p.type_name.clone()).collect(),
        }
    }
}

/// Occurrence counts per signature, iterated in first-occurrence order.
///
/// Every stored count is at least 1.
#[derive(Debug, Clone)]
pub struct SignatureCounts<S> {
    entries: Vec<(S, usize)>,
    index: HashMap<S, usize>,
}

impl<S: Clone + Eq + Hash> SignatureCounts<S> {
    /// An empty multiset
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Count one more occurrence of `signature`
    pub fn add(&mut self, signature: S) {
        match self.index.get(&signature) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(signature.clone(), self.entries.len());
                self.entries.push((signature, 1));
            }
        }
    }

    /// Occurrences of `signature`, if it was seen at all
    pub fn get(&self, signature: &S) -> Option<usize> {
        self.index.get(signature).map(|&pos| self.entries[pos].1)
    }

    /// Signatures with their counts, in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> + '_ {
        self.entries.iter().map(|(signature, count)| (signature, *count))
    }

    /// Number of distinct signatures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no signature has been counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Clone + Eq + Hash> Default for SignatureCounts<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash> FromIterator<S> for SignatureCounts<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = Self::new();
        for signature in iter {
            counts.add(signature);
        }
        counts
    }
}

/// Collapse members into signature counts.
pub fn reduce<T: Signed>(members: &[T]) -> SignatureCounts<T::Signature> {
    members.iter().map(Signed::signature).collect()
}
