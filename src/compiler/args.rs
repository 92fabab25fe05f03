//! Argument resolution: one operand in scalar position to one SQL token.

use crate::ast::{Operand, Value};
use crate::compiler::Compiler;
use crate::error::{SiftError, SiftResult};

impl Compiler<'_> {
    /// Resolve an operand to a SQL token: a quoted column for field
    /// references, an inline literal otherwise.
    pub fn argument(&self, arg: &Operand) -> SiftResult<String> {
        match arg {
            Operand::Field(id) => {
                let column = self
                    .fields
                    .column(id)
                    .ok_or_else(|| SiftError::UndefinedField(id.clone()))?;
                Ok(self.dialect.column(column))
            }
            Operand::Value(value) => Ok(self.literal(value)),
            Operand::Condition(cond) => Err(SiftError::invalid_operand(
                cond.op.tag(),
                "nested condition in scalar position",
            )),
        }
    }

    /// Render a literal as inline SQL text. Embedded single quotes in
    /// string literals are doubled.
    fn literal(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => self.dialect.bool_literal(*b).to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::String(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }
}
