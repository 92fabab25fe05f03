//! Dialect policy: identifier quoting and limit-clause placement.

use serde::{Deserialize, Serialize};

use crate::query::Fields;

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Postgres,
    MySql,
    SqlServer,
}

/// Where the limit clause lands in the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitPosition {
    /// `TOP n`, between `SELECT` and the column list.
    AfterSelect,
    /// `LIMIT n`, as the final clause.
    Trailing,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Postgres => "PostgreSQL",
            Dialect::MySql => "MySQL",
            Dialect::SqlServer => "SQL Server",
        }
    }

    /// The identifier quote character: backtick for MySQL, double quote
    /// otherwise.
    pub fn quote_char(&self) -> char {
        match self {
            Dialect::MySql => '`',
            _ => '"',
        }
    }

    /// Wrap an identifier in the dialect quote character, doubling any
    /// embedded quote character.
    pub fn quote_identifier(&self, name: &str) -> String {
        let quote = self.quote_char();
        let mut out = String::with_capacity(name.len() + 2);
        out.push(quote);
        for c in name.chars() {
            if c == quote {
                out.push(quote);
            }
            out.push(c);
        }
        out.push(quote);
        out
    }

    /// Render a column name; the wildcard `*` stays unquoted.
    pub fn column(&self, name: &str) -> String {
        if name == Fields::WILDCARD {
            name.to_string()
        } else {
            self.quote_identifier(name)
        }
    }

    /// Boolean literal: `true`/`false` for Postgres, `1`/`0` elsewhere.
    pub fn bool_literal(&self, val: bool) -> &'static str {
        match self {
            Dialect::Postgres => {
                if val {
                    "true"
                } else {
                    "false"
                }
            }
            _ => {
                if val {
                    "1"
                } else {
                    "0"
                }
            }
        }
    }

    /// The limit clause text for this dialect.
    pub fn limit_clause(&self, n: u64) -> String {
        match self {
            Dialect::SqlServer => format!("TOP {n}"),
            _ => format!("LIMIT {n}"),
        }
    }

    pub fn limit_position(&self) -> LimitPosition {
        match self {
            Dialect::SqlServer => LimitPosition::AfterSelect,
            _ => LimitPosition::Trailing,
        }
    }
}
