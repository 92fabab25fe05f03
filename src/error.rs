//! Error types for sift-sql.

use crate::query::FieldId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiftError {
    /// Operator tag not in the built-in set and unclaimed by any handler.
    #[error("Unknown operator \"{0}\"")]
    UnknownOperator(String),

    /// A `["field", id]` operand has no entry in the field registry.
    #[error("Undefined field \"{0}\"")]
    UndefinedField(FieldId),

    /// A `["macro", name]` node has no entry in the macro table.
    #[error("Undefined macro \"{0}\"")]
    UndefinedMacro(String),

    /// A macro references itself, directly or through other macros.
    /// The chain lists the active expansions followed by the repeated name.
    #[error("Circular macros detected \"{}\"", .chain.join("->"))]
    CircularMacro { chain: Vec<String> },

    /// Wrong operand count for a built-in operator.
    #[error("Operator \"{op}\" expects {expected} operand(s), got {got}")]
    Arity {
        op: String,
        expected: &'static str,
        got: usize,
    },

    /// Operand of the wrong shape (e.g. a nested condition in scalar position).
    #[error("Invalid operand for \"{op}\": {reason}")]
    InvalidOperand { op: String, reason: String },

    /// Failed to parse a JSON-shaped condition tree or query.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SiftError {
    /// Create an arity error for the given operator.
    pub fn arity(op: impl Into<String>, expected: &'static str, got: usize) -> Self {
        Self::Arity {
            op: op.into(),
            expected,
            got,
        }
    }

    /// Create an invalid-operand error for the given operator.
    pub fn invalid_operand(op: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOperand {
            op: op.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for sift-sql operations.
pub type SiftResult<T> = Result<T, SiftError>;
