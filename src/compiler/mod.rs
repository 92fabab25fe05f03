//! The condition-tree compiler and statement assembler.
//!
//! [`SqlSelect`] holds the immutable inputs; every call to [`SqlSelect::sql`]
//! or [`SqlSelect::compile`] runs with a fresh [`Compiler`] context, so the
//! macro-expansion state of one compile can never leak into another.

pub mod dialect;
pub mod handlers;

mod args;
mod conditions;
mod macros;
mod select;

#[cfg(test)]
mod tests;

pub use dialect::{Dialect, LimitPosition};
pub use handlers::OperatorHandler;

use crate::query::{Fields, Macros, Query};

/// Compiles condition trees into complete `SELECT` statements.
pub struct SqlSelect {
    dialect: Dialect,
    fields: Fields,
    query: Query,
    macros: Macros,
    handlers: Vec<Box<dyn OperatorHandler>>,
}

impl SqlSelect {
    pub fn new(dialect: Dialect, fields: Fields) -> Self {
        Self {
            dialect,
            fields,
            query: Query::default(),
            macros: Macros::default(),
            handlers: Vec::new(),
        }
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn macros(mut self, macros: Macros) -> Self {
        self.macros = macros;
        self
    }

    /// Register a custom operator handler. Handlers run in registration
    /// order, before the built-in operator table.
    pub fn handler(mut self, handler: impl OperatorHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub(crate) fn context(&self) -> Compiler<'_> {
        Compiler {
            dialect: self.dialect,
            fields: &self.fields,
            macros: &self.macros,
            handlers: &self.handlers,
            active: Vec::new(),
        }
    }
}

/// Per-call compile context.
///
/// Carries shared references to the inputs plus the active macro-expansion
/// chain, which is scoped to one top-level compile.
pub struct Compiler<'a> {
    dialect: Dialect,
    fields: &'a Fields,
    macros: &'a Macros,
    handlers: &'a [Box<dyn OperatorHandler>],
    active: Vec<String>,
}

impl Compiler<'_> {
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}
