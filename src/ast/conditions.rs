use std::fmt;
use std::str::FromStr;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ast::{Operator, Value};
use crate::error::SiftError;
use crate::query::FieldId;

/// A single node of the condition tree: an operator plus its operands.
///
/// The wire form is the array shape of the DSL: `["=", ["field", 4], 35]`,
/// `["and", cond, cond, ...]`, `["macro", "is_joe"]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub op: Operator,
    pub args: Vec<Operand>,
}

impl Condition {
    pub fn new(op: Operator, args: Vec<Operand>) -> Self {
        Self { op, args }
    }
}

/// One operand of a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A literal value.
    Value(Value),
    /// A `["field", id]` column reference.
    Field(FieldId),
    /// A nested condition.
    Condition(Condition),
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

impl From<Condition> for Operand {
    fn from(cond: Condition) -> Self {
        Operand::Condition(cond)
    }
}

/// Parse a condition from JSON text, e.g. `["=", ["field", 4], null]`.
impl FromStr for Condition {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.args.len() + 1))?;
        seq.serialize_element(self.op.tag())?;
        for arg in &self.args {
            seq.serialize_element(arg)?;
        }
        seq.end()
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Operand::Value(value) => value.serialize(serializer),
            Operand::Field(id) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element("field")?;
                seq.serialize_element(id)?;
                seq.end()
            }
            Operand::Condition(cond) => cond.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConditionVisitor;

        impl<'de> Visitor<'de> for ConditionVisitor {
            type Value = Condition;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a condition array [tag, operand, ...]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Condition, A::Error> {
                let tag: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &"an operator tag"))?;
                if tag == "field" {
                    return Err(de::Error::custom("a field reference is not a condition"));
                }
                let mut args = Vec::new();
                while let Some(arg) = seq.next_element::<Operand>()? {
                    args.push(arg);
                }
                Ok(Condition::new(Operator::from_tag(&tag), args))
            }
        }

        deserializer.deserialize_seq(ConditionVisitor)
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OperandVisitor;

        impl<'de> Visitor<'de> for OperandVisitor {
            type Value = Operand;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a literal, [\"field\", id], or a condition array")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Operand, E> {
                Ok(Operand::Value(Value::Bool(v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Operand, E> {
                Ok(Operand::Value(Value::Int(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Operand, E> {
                i64::try_from(v)
                    .map(|n| Operand::Value(Value::Int(n)))
                    .map_err(|_| de::Error::custom("integer literal out of range"))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Operand, E> {
                Ok(Operand::Value(Value::Float(v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Operand, E> {
                Ok(Operand::Value(Value::String(v.to_string())))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Operand, E> {
                Ok(Operand::Value(Value::Null))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Operand, A::Error> {
                let tag: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &"an operator tag"))?;
                if tag == "field" {
                    let id: FieldId = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(1, &"a field id"))?;
                    if seq.next_element::<IgnoredAny>()?.is_some() {
                        return Err(de::Error::custom("a field reference takes exactly one id"));
                    }
                    return Ok(Operand::Field(id));
                }
                let mut args = Vec::new();
                while let Some(arg) = seq.next_element::<Operand>()? {
                    args.push(arg);
                }
                Ok(Operand::Condition(Condition::new(
                    Operator::from_tag(&tag),
                    args,
                )))
            }
        }

        deserializer.deserialize_any(OperandVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_deserialize_array_shape() {
        let cond: Condition = serde_json::from_value(json!(["=", ["field", 4], null])).unwrap();
        assert_eq!(cond.op, Operator::Eq);
        assert_eq!(cond.args[0], Operand::Field(FieldId::Num(4)));
        assert_eq!(cond.args[1], Operand::Value(Value::Null));

        let cond: Condition =
            serde_json::from_value(json!(["and", ["<", ["field", 1], 5], ["macro", "is_joe"]]))
                .unwrap();
        assert_eq!(cond.op, Operator::And);
        let Operand::Condition(lt) = &cond.args[0] else {
            panic!("expected a nested condition");
        };
        assert_eq!(lt.op, Operator::Lt);
        let Operand::Condition(mac) = &cond.args[1] else {
            panic!("expected a macro node");
        };
        assert_eq!(mac.op, Operator::Macro);
        assert_eq!(mac.args[0], Operand::Value(Value::String("is_joe".into())));
    }

    #[test]
    fn test_deserialize_unknown_tag_is_custom() {
        let cond: Condition = serde_json::from_value(json!(["xor", 1, 2])).unwrap();
        assert_eq!(cond.op, Operator::Custom("xor".into()));
        assert_eq!(cond.args.len(), 2);
    }

    #[test]
    fn test_field_reference_is_not_a_condition() {
        let result: Result<Condition, _> = serde_json::from_value(json!(["field", 4]));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let raw = json!(["or", ["!=", ["field", 3], null], [">", ["field", "age"], 2.5]]);
        let cond: Condition = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&cond).unwrap(), raw);
    }

    #[test]
    fn test_from_str() {
        let cond: Condition = r#"["not-empty", ["field", 2]]"#.parse().unwrap();
        assert_eq!(cond.op, Operator::NotEmpty);

        let err = "not json".parse::<Condition>().unwrap_err();
        assert!(matches!(err, SiftError::Parse(_)));
    }
}
