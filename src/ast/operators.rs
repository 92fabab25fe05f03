use serde::{Deserialize, Serialize};

/// A condition operator tag.
///
/// The built-in set is closed; anything else lands in `Custom` and is
/// offered to the registered handler chain before compilation fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Gt,
    And,
    Or,
    Not,
    IsEmpty,
    NotEmpty,
    Macro,
    /// An unrecognized tag, kept verbatim for handler dispatch.
    Custom(String),
}

impl Operator {
    /// Parse a DSL tag. Unknown tags are preserved as `Custom`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "=" => Operator::Eq,
            "!=" => Operator::Ne,
            "<" => Operator::Lt,
            ">" => Operator::Gt,
            "and" => Operator::And,
            "or" => Operator::Or,
            "not" => Operator::Not,
            "is-empty" => Operator::IsEmpty,
            "not-empty" => Operator::NotEmpty,
            "macro" => Operator::Macro,
            other => Operator::Custom(other.to_string()),
        }
    }

    /// The DSL tag for this operator.
    pub fn tag(&self) -> &str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
            Operator::IsEmpty => "is-empty",
            Operator::NotEmpty => "not-empty",
            Operator::Macro => "macro",
            Operator::Custom(tag) => tag,
        }
    }
}

impl From<String> for Operator {
    fn from(tag: String) -> Self {
        Operator::from_tag(&tag)
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.tag().to_string()
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for tag in ["=", "!=", "<", ">", "and", "or", "not", "is-empty", "not-empty", "macro"] {
            assert_eq!(Operator::from_tag(tag).tag(), tag);
        }
        assert_eq!(Operator::from_tag("xor"), Operator::Custom("xor".into()));
        assert_eq!(Operator::from_tag("xor").tag(), "xor");
    }
}
