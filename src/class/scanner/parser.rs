use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use anyhow::Result;
use log::{debug, warn, trace};

use crate::class::error::ParseError;
use crate::class::types::{ClassRecord, ClassScanOptions, ParseOutcome};
use crate::utils::file_utils;
use super::attribute_parser::parse_attributes;
use super::body_extractor::extract_class_bodies;
use super::comments::strip_comments;
use super::method_parser::parse_methods;

/// Parse one source unit into class records and advisory errors.
///
/// Never panics and never fails: any internal fault comes back as an outcome
/// with no classes and a single `ParseError::Unexpected` message.
pub fn parse(source: &str) -> ParseOutcome {
    guarded(|| parse_unit(source))
}

/// Run `work`, turning a panic into a failed outcome
fn guarded(work: impl FnOnce() -> ParseOutcome) -> ParseOutcome {
    match panic::catch_unwind(AssertUnwindSafe(work)) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let reason = panic_reason(payload.as_ref());
            warn!("Parser failed on a unit: {}", reason);
            ParseOutcome::failed(ParseError::Unexpected { reason }.to_string())
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn parse_unit(source: &str) -> ParseOutcome {
    let stripped = strip_comments(source);
    let extracted = extract_class_bodies(&stripped);

    if extracted.is_empty() {
        return ParseOutcome::failed(ParseError::NoClassDeclarations.to_string());
    }

    let mut outcome = ParseOutcome::default();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for result in extracted {
        let body = match result {
            Ok(body) => body,
            Err(e) => {
                outcome.errors.push(e.to_string());
                continue;
            }
        };

        let record = ClassRecord {
            attributes: parse_attributes(body.body),
            methods: parse_methods(body.body),
            name: body.name,
            extends: body.extends_from,
        };
        trace!(
            "Class {} has {} attributes and {} methods",
            record.name,
            record.attributes.len(),
            record.methods.len()
        );

        match positions.get(&record.name) {
            Some(&pos) => {
                outcome.errors.push(
                    ParseError::DuplicateClass { class_name: record.name.clone() }.to_string(),
                );
                outcome.classes[pos] = record;
            }
            None => {
                positions.insert(record.name.clone(), outcome.classes.len());
                outcome.classes.push(record);
            }
        }
    }

    outcome
}

/// Class parser for reading and parsing source files
#[derive(Debug, Clone)]
pub struct ClassParser {
    /// Configuration options for parsing
    options: ClassScanOptions,
}

impl ClassParser {
    /// Create a new class parser with the given options
    pub fn new(options: ClassScanOptions) -> Self {
        Self { options }
    }

    /// Parse in-memory source text
    pub fn parse_content(&self, content: &str, origin: &Path) -> ParseOutcome {
        trace!("{}: {} bytes, starting parse", origin.display(), content.len());

        let outcome = parse(content);

        if outcome.classes.is_empty() {
            debug!("No classes found in {}", origin.display());
        } else {
            debug!("Found {} classes in {}", outcome.classes.len(), origin.display());
        }

        for error in &outcome.errors {
            if self.options.verbose_errors {
                warn!("{}: {}", origin.display(), error);
            } else {
                debug!("{}: {}", origin.display(), error);
            }
        }

        outcome
    }

    /// Read and parse a single file. Only I/O failures are returned as errors.
    pub fn parse_file(&self, file: impl AsRef<Path>) -> Result<ParseOutcome> {
        let file = file.as_ref();
        debug!("Processing file: {}", file.display());

        let content = file_utils::read_file_to_string(file)?;
        Ok(self.parse_content(&content, file))
    }
}
