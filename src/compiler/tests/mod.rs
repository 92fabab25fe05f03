//! Compiler test modules.
//!
//! Tests are organized by category:
//! - `core`: operator rendering and error cases
//! - `dialects`: quoting and limit placement per dialect
//! - `macros`: macro expansion, sibling reuse, cycle detection
//! - `handlers`: custom operator chain

mod handlers;

use crate::prelude::*;

/// The field registry shared across the suite.
fn fields() -> Fields {
    Fields::new()
        .field(1, "id")
        .field(2, "name")
        .field(3, "date_joined")
        .field(4, "age")
        .field(5, "*")
}

/// Parse a JSON where-clause and compile the full statement.
fn to_sql(dialect: Dialect, where_json: &str) -> SiftResult<String> {
    let cond: Condition = where_json.parse()?;
    SqlSelect::new(dialect, fields())
        .query(Query::new().filter(cond))
        .sql()
}

/// Same as [`to_sql`], with a macro table.
fn to_sql_with_macros(
    dialect: Dialect,
    where_json: &str,
    macros: Macros,
) -> SiftResult<String> {
    let cond: Condition = where_json.parse()?;
    SqlSelect::new(dialect, fields())
        .query(Query::new().filter(cond))
        .macros(macros)
        .sql()
}
