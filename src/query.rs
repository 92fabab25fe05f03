//! Caller-supplied inputs: the field registry, the query parts, and the
//! macro table.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ast::Condition;
use crate::error::SiftError;

/// Key of a field registry entry. The array DSL allows both numeric and
/// string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldId {
    Num(i64),
    Name(String),
}

impl FieldId {
    /// Build an id from a JSON object key. Numeric-looking keys collate
    /// with numeric `["field", id]` references, as they do in the DSL.
    fn from_key(key: String) -> Self {
        match key.parse::<i64>() {
            Ok(n) => FieldId::Num(n),
            Err(_) => FieldId::Name(key),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::Num(n) => write!(f, "{n}"),
            FieldId::Name(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FieldId {
    fn from(n: i64) -> Self {
        FieldId::Num(n)
    }
}

impl From<i32> for FieldId {
    fn from(n: i32) -> Self {
        FieldId::Num(n as i64)
    }
}

impl From<&str> for FieldId {
    fn from(s: &str) -> Self {
        FieldId::Name(s.to_string())
    }
}

impl From<String> for FieldId {
    fn from(s: String) -> Self {
        FieldId::Name(s)
    }
}

/// Ordered mapping from field id to column name.
///
/// Insertion order defines the output column order. The value `"*"` is the
/// wildcard column and is rendered unquoted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Fields(IndexMap<FieldId, String>);

impl Fields {
    /// The all-columns marker.
    pub const WILDCARD: &'static str = "*";

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, keeping insertion order.
    pub fn field(mut self, id: impl Into<FieldId>, column: impl Into<String>) -> Self {
        self.0.insert(id.into(), column.into());
        self
    }

    /// Column name for a field id, if registered.
    pub fn column(&self, id: &FieldId) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Fields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, String>::deserialize(deserializer)?;
        Ok(Fields(
            raw.into_iter()
                .map(|(key, column)| (FieldId::from_key(key), column))
                .collect(),
        ))
    }
}

/// The optional parts of a SELECT: filter, row limit, source table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// WHERE condition tree.
    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<Condition>,
    /// Row limit; the contract is a positive integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Source table. Defaults to `"data"` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, cond: Condition) -> Self {
        self.where_clause = Some(cond);
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }
}

/// Parse a query from JSON text, e.g.
/// `{"where": ["=", ["field", 2], "joe"], "limit": 10}`.
impl FromStr for Query {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Named, reusable condition subtrees, referenced with `["macro", name]`.
///
/// Read-only for the duration of a compile; bodies are resolved lazily on
/// first reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Macros(IndexMap<String, Condition>);

impl Macros {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a macro definition, keeping insertion order.
    pub fn define(mut self, name: impl Into<String>, body: Condition) -> Self {
        self.0.insert(name.into(), body);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Condition> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{field, val};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fields_keep_insertion_order() {
        let fields = Fields::new()
            .field(2, "name")
            .field(1, "id")
            .field(5, "*");
        let columns: Vec<&str> = fields.columns().collect();
        assert_eq!(columns, vec!["name", "id", "*"]);
    }

    #[test]
    fn test_numeric_json_keys_collate_with_numeric_ids() {
        let fields: Fields = serde_json::from_str(r#"{"1": "id", "tag": "label"}"#).unwrap();
        assert_eq!(fields.column(&FieldId::Num(1)), Some("id"));
        assert_eq!(fields.column(&FieldId::Name("tag".into())), Some("label"));
        assert_eq!(fields.column(&FieldId::Num(2)), None);
    }

    #[test]
    fn test_query_from_json() {
        let query: Query = r#"{"where": ["=", ["field", 2], "joe"], "limit": 10}"#
            .parse()
            .unwrap();
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.table, None);
        assert_eq!(
            query.where_clause,
            Some(Condition::eq(field(2), val("joe")))
        );
    }
}
