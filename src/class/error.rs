use thiserror::Error;

/// Advisory errors raised while parsing a source unit.
///
/// None of these stop a run: the orchestrator renders them into
/// `ParseOutcome::errors` and carries on with whatever it could extract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unbalanced braces in class '{class_name}': body never closes")]
    UnbalancedBraces { class_name: String },

    #[error("no class declarations found")]
    NoClassDeclarations,

    #[error("duplicate class '{class_name}': later declaration replaces the earlier one")]
    DuplicateClass { class_name: String },

    #[error("unexpected parser failure: {reason}")]
    Unexpected { reason: String },
}
