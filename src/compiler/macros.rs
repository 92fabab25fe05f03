//! Macro expansion with cycle detection.

use tracing::trace;

use crate::ast::{Condition, Operand, Value};
use crate::compiler::Compiler;
use crate::error::{SiftError, SiftResult};

impl Compiler<'_> {
    /// Expand a `["macro", name]` node against the macro table.
    ///
    /// The active chain is part of this per-call context: a name still on
    /// the chain means the expansion path loops back on itself, while the
    /// same macro in two sibling branches expands cleanly both times
    /// because each branch pops its name on the way out.
    pub(super) fn expand_macro(&mut self, cond: &Condition) -> SiftResult<String> {
        self.expect_arity(cond, "exactly 1", |n| n == 1)?;
        let name = match &cond.args[0] {
            Operand::Value(Value::String(name)) => name.as_str(),
            _ => {
                return Err(SiftError::invalid_operand(
                    "macro",
                    "expected a macro name string",
                ));
            }
        };

        if self.active.iter().any(|active| active == name) {
            let mut chain = self.active.clone();
            chain.push(name.to_string());
            return Err(SiftError::CircularMacro { chain });
        }

        let macros = self.macros;
        let body = macros
            .get(name)
            .ok_or_else(|| SiftError::UndefinedMacro(name.to_string()))?;

        trace!(name, depth = self.active.len(), "expanding macro");
        self.active.push(name.to_string());
        let sql = self.condition(body)?;
        self.active.pop();
        Ok(sql)
    }
}
