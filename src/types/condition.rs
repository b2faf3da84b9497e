use std::fmt;

use serde::{Deserialize, Deserializer};

use super::Value;

/// Comparison operators supported in rule conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Gte,
    Lte,
    Gt,
    Lt,
    Eq,
}

impl CompareOp {
    /// Look up an operator by its document symbol. Returns `None` for
    /// anything outside the five supported symbols.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<CompareOp> {
        match symbol {
            ">=" => Some(CompareOp::Gte),
            "<=" => Some(CompareOp::Lte),
            ">" => Some(CompareOp::Gt),
            "<" => Some(CompareOp::Lt),
            "==" => Some(CompareOp::Eq),
            _ => None,
        }
    }

    /// The symbol this operator is written as in rule documents.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Eq => "==",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single comparison test within a rule.
///
/// In rule documents a condition is a three-element array
/// `[field, operator, value]`. Anything that does not fit that shape --
/// wrong arity, unknown operator symbol, non-string field, or a
/// non-scalar operand -- deserializes to [`Condition::Unsupported`],
/// which never matches. Malformed conditions disable their rule rather
/// than rejecting the whole document.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Compare {
        field: String,
        op: CompareOp,
        value: Value,
    },
    /// A condition that could not be interpreted, kept verbatim for
    /// display. Evaluates as a static non-match.
    Unsupported(serde_json::Value),
}

impl Condition {
    fn from_raw(raw: serde_json::Value) -> Condition {
        match Condition::interpret(&raw) {
            Some(condition) => condition,
            None => Condition::Unsupported(raw),
        }
    }

    fn interpret(raw: &serde_json::Value) -> Option<Condition> {
        let parts = raw.as_array()?;
        if parts.len() != 3 {
            return None;
        }
        let field = parts[0].as_str()?;
        let op = parts[1].as_str().and_then(CompareOp::from_symbol)?;
        let value = Value::from_scalar(&parts[2])?;
        Some(Condition::Compare {
            field: field.to_owned(),
            op,
            value,
        })
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(Condition::from_raw(raw))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Compare { field, op, value } => {
                write!(f, "({field} {op} {value})")
            }
            Condition::Unsupported(raw) => write!(f, "(unsupported: {raw})"),
        }
    }
}

/// Intermediate builder for condition comparisons.
/// Created by [`field()`]; requires a comparison method to produce a
/// valid [`Condition`].
#[derive(Debug, Clone)]
pub struct FieldCond {
    name: String,
}

impl FieldCond {
    #[must_use]
    pub fn eq(self, value: impl Into<Value>) -> Condition {
        self.compare(CompareOp::Eq, value)
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Value>) -> Condition {
        self.compare(CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte(self, value: impl Into<Value>) -> Condition {
        self.compare(CompareOp::Gte, value)
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Value>) -> Condition {
        self.compare(CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte(self, value: impl Into<Value>) -> Condition {
        self.compare(CompareOp::Lte, value)
    }

    fn compare(self, op: CompareOp, value: impl Into<Value>) -> Condition {
        Condition::Compare {
            field: self.name,
            op,
            value: value.into(),
        }
    }
}

#[must_use]
pub fn field(name: &str) -> FieldCond {
    FieldCond {
        name: name.to_owned(),
    }
}
