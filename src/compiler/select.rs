//! Statement assembly: clause ordering per dialect.

use tracing::trace;

use crate::ast::Condition;
use crate::compiler::{LimitPosition, SqlSelect};
use crate::error::SiftResult;

/// Table used when the query names none.
const DEFAULT_TABLE: &str = "data";

impl SqlSelect {
    /// Build the complete `SELECT ... ;` statement.
    pub fn sql(&self) -> SiftResult<String> {
        trace!(dialect = self.dialect.name(), "compiling select statement");

        let columns = self
            .fields
            .columns()
            .map(|column| self.dialect.column(column))
            .collect::<Vec<_>>()
            .join(", ");
        let from = format!(
            "FROM {}",
            self.query.table.as_deref().unwrap_or(DEFAULT_TABLE)
        );
        let where_clause = match &self.query.where_clause {
            Some(cond) => Some(format!("WHERE {}", self.compile(cond)?)),
            None => None,
        };
        let limit = self.query.limit.map(|n| self.dialect.limit_clause(n));

        let mut tokens: Vec<String> = vec!["SELECT".to_string()];
        match self.dialect.limit_position() {
            LimitPosition::AfterSelect => {
                tokens.extend(limit);
                tokens.push(columns);
                tokens.push(from);
                tokens.extend(where_clause);
            }
            LimitPosition::Trailing => {
                tokens.push(columns);
                tokens.push(from);
                tokens.extend(where_clause);
                tokens.extend(limit);
            }
        }

        let mut statement = tokens
            .iter()
            .filter(|token| !token.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        statement.push(';');
        Ok(statement)
    }

    /// Compile a bare condition into a WHERE-clause fragment, without the
    /// surrounding statement.
    pub fn compile(&self, cond: &Condition) -> SiftResult<String> {
        let mut cx = self.context();
        cx.condition(cond)
    }
}
