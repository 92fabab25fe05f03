//! Ergonomic constructors for condition trees.
//!
//! The array shape is convenient over the wire; these helpers are for Rust
//! callers assembling trees in code:
//!
//! ```ignore
//! let cond = Condition::and([
//!     Condition::lt(field(1), val(5)),
//!     Condition::eq(field(2), val("joe")),
//! ]);
//! ```

use crate::ast::{Condition, Operand, Operator, Value};
use crate::query::FieldId;

/// Column reference operand: `["field", id]`.
pub fn field(id: impl Into<FieldId>) -> Operand {
    Operand::Field(id.into())
}

/// Literal operand.
pub fn val(v: impl Into<Value>) -> Operand {
    Operand::Value(v.into())
}

/// SQL NULL literal operand.
pub fn null() -> Operand {
    Operand::Value(Value::Null)
}

impl Condition {
    pub fn and(parts: impl IntoIterator<Item = Condition>) -> Self {
        Condition::new(
            Operator::And,
            parts.into_iter().map(Operand::Condition).collect(),
        )
    }

    pub fn or(parts: impl IntoIterator<Item = Condition>) -> Self {
        Condition::new(
            Operator::Or,
            parts.into_iter().map(Operand::Condition).collect(),
        )
    }

    pub fn not(inner: Condition) -> Self {
        Condition::new(Operator::Not, vec![Operand::Condition(inner)])
    }

    pub fn eq(lhs: Operand, rhs: Operand) -> Self {
        Condition::new(Operator::Eq, vec![lhs, rhs])
    }

    pub fn ne(lhs: Operand, rhs: Operand) -> Self {
        Condition::new(Operator::Ne, vec![lhs, rhs])
    }

    pub fn lt(lhs: Operand, rhs: Operand) -> Self {
        Condition::new(Operator::Lt, vec![lhs, rhs])
    }

    pub fn gt(lhs: Operand, rhs: Operand) -> Self {
        Condition::new(Operator::Gt, vec![lhs, rhs])
    }

    /// `=` with 3+ operands renders as `IN (...)`.
    pub fn eq_any(lhs: Operand, values: impl IntoIterator<Item = Operand>) -> Self {
        let mut args = vec![lhs];
        args.extend(values);
        Condition::new(Operator::Eq, args)
    }

    /// `!=` with 3+ operands renders as `NOT IN (...)`.
    pub fn ne_any(lhs: Operand, values: impl IntoIterator<Item = Operand>) -> Self {
        let mut args = vec![lhs];
        args.extend(values);
        Condition::new(Operator::Ne, args)
    }

    pub fn is_empty(arg: Operand) -> Self {
        Condition::new(Operator::IsEmpty, vec![arg])
    }

    pub fn not_empty(arg: Operand) -> Self {
        Condition::new(Operator::NotEmpty, vec![arg])
    }

    /// Reference a named macro: `["macro", name]`.
    pub fn macro_ref(name: impl Into<String>) -> Self {
        Condition::new(
            Operator::Macro,
            vec![Operand::Value(Value::String(name.into()))],
        )
    }
}
