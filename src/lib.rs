//! Dialect-aware SQL `SELECT` generation from array-shaped condition trees.
//!
//! Callers supply a field registry, an optional query (filter, limit,
//! table), and an optional macro table; `sift-sql` compiles them into one
//! deterministic SQL string. Values are inlined as literals - there is no
//! planner, no parameter binding, and no execution layer.
//!
//! ```
//! use sift_sql::prelude::*;
//!
//! let fields = Fields::new().field(1, "id").field(2, "name");
//! let query = Query::new()
//!     .filter(Condition::eq(field(2), val("joe")))
//!     .limit(10);
//! let sql = SqlSelect::new(Dialect::Postgres, fields)
//!     .query(query)
//!     .sql()
//!     .unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT \"id\", \"name\" FROM data WHERE \"name\" = 'joe' LIMIT 10;"
//! );
//! ```
//!
//! Condition trees can also be parsed straight from their JSON wire form:
//!
//! ```
//! use sift_sql::prelude::*;
//!
//! let cond: Condition = r#"["=", ["field", 4], 35, 44]"#.parse().unwrap();
//! let select = SqlSelect::new(Dialect::Postgres, Fields::new().field(4, "age"));
//! assert_eq!(select.compile(&cond).unwrap(), "\"age\" IN (35, 44)");
//! ```

pub mod ast;
pub mod compiler;
pub mod error;
pub mod query;

pub use compiler::{Dialect, SqlSelect};

pub mod prelude {
    pub use crate::ast::builders::{field, null, val};
    pub use crate::ast::{Condition, Operand, Operator, Value};
    pub use crate::compiler::{Compiler, Dialect, LimitPosition, OperatorHandler, SqlSelect};
    pub use crate::error::{SiftError, SiftResult};
    pub use crate::query::{FieldId, Fields, Macros, Query};
}
