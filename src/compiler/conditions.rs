//! Recursive condition compilation: operator dispatch and boolean grouping.

use crate::ast::{Condition, Operand, Operator};
use crate::compiler::Compiler;
use crate::error::{SiftError, SiftResult};

impl Compiler<'_> {
    /// Compile one condition node into a SQL boolean expression.
    ///
    /// Registered handlers get the node first, in registration order; the
    /// built-in table below is the fallback, ending in `UnknownOperator`.
    pub fn condition(&mut self, cond: &Condition) -> SiftResult<String> {
        let handlers = self.handlers;
        for handler in handlers {
            if let Some(sql) = handler.compile(cond.op.tag(), &cond.args, self)? {
                return Ok(sql);
            }
        }

        match &cond.op {
            Operator::IsEmpty => {
                self.expect_arity(cond, "exactly 1", |n| n == 1)?;
                Ok(format!("{} IS NULL", self.argument(&cond.args[0])?))
            }
            Operator::NotEmpty => {
                self.expect_arity(cond, "exactly 1", |n| n == 1)?;
                Ok(format!("{} IS NOT NULL", self.argument(&cond.args[0])?))
            }
            Operator::Lt | Operator::Gt => {
                self.expect_arity(cond, "exactly 2", |n| n == 2)?;
                let lhs = self.argument(&cond.args[0])?;
                let rhs = self.argument(&cond.args[1])?;
                Ok(format!("{} {} {}", lhs, cond.op.tag(), rhs))
            }
            Operator::Eq | Operator::Ne => self.comparison(cond),
            Operator::And | Operator::Or => self.group(cond),
            Operator::Not => {
                self.expect_arity(cond, "exactly 1", |n| n == 1)?;
                let inner = self.nested(&cond.op, &cond.args[0])?;
                Ok(format!("NOT ({inner})"))
            }
            Operator::Macro => self.expand_macro(cond),
            Operator::Custom(tag) => Err(SiftError::UnknownOperator(tag.clone())),
        }
    }

    /// `=` / `!=`: `IN (...)` for 3+ operands, `IS [NOT] NULL` for a null
    /// second operand, a plain comparison otherwise.
    fn comparison(&self, cond: &Condition) -> SiftResult<String> {
        self.expect_arity(cond, "at least 2", |n| n >= 2)?;
        let negated = cond.op == Operator::Ne;
        let lhs = self.argument(&cond.args[0])?;

        if cond.args.len() > 2 {
            let values = cond.args[1..]
                .iter()
                .map(|arg| self.argument(arg))
                .collect::<SiftResult<Vec<_>>>()?;
            let keyword = if negated { "NOT IN" } else { "IN" };
            return Ok(format!("{} {} ({})", lhs, keyword, values.join(", ")));
        }

        if matches!(&cond.args[1], Operand::Value(v) if v.is_null()) {
            let keyword = if negated { "IS NOT NULL" } else { "IS NULL" };
            return Ok(format!("{lhs} {keyword}"));
        }

        let symbol = if negated { "<>" } else { "=" };
        Ok(format!(
            "{} {} {}",
            lhs,
            symbol,
            self.argument(&cond.args[1])?
        ))
    }

    /// `and` / `or`: every child compiled recursively, wrapped in parens,
    /// joined by the uppercase keyword.
    fn group(&mut self, cond: &Condition) -> SiftResult<String> {
        self.expect_arity(cond, "at least 1", |n| n >= 1)?;
        let keyword = if cond.op == Operator::And {
            " AND "
        } else {
            " OR "
        };
        let mut groups = Vec::with_capacity(cond.args.len());
        for arg in &cond.args {
            let sql = self.nested(&cond.op, arg)?;
            groups.push(format!("({sql})"));
        }
        Ok(groups.join(keyword))
    }

    /// Compile an operand that must itself be a condition.
    pub(super) fn nested(&mut self, op: &Operator, arg: &Operand) -> SiftResult<String> {
        match arg {
            Operand::Condition(inner) => self.condition(inner),
            _ => Err(SiftError::invalid_operand(
                op.tag(),
                "expected a nested condition",
            )),
        }
    }

    pub(super) fn expect_arity(
        &self,
        cond: &Condition,
        expected: &'static str,
        ok: impl Fn(usize) -> bool,
    ) -> SiftResult<()> {
        if ok(cond.args.len()) {
            Ok(())
        } else {
            Err(SiftError::arity(cond.op.tag(), expected, cond.args.len()))
        }
    }
}
