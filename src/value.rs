use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// A type-erased value produced by `evaluate_erased`/`evaluate_any`.
///
/// Every declared node output type maps onto exactly one variant, so the
/// erased channel always carries the same underlying value as the typed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Num(f64),
    Str(String),
}

/// The declared type of a node output, used for registry metadata and
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Bool,
    Num,
    Str,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "boolean"),
            ValueKind::Num => write!(f, "number"),
            ValueKind::Str => write!(f, "string"),
        }
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Num(_) => ValueKind::Num,
            Value::Str(_) => ValueKind::Str,
        }
    }

    /// Lenient boolean read-out: `false`, `0`, `NaN` and `""` are falsy.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Num(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
        }
    }

    /// Lenient numeric read-out. Booleans become 0/1, non-numeric strings 0.
    pub fn as_num(&self) -> f64 {
        match self {
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Num(n) => *n,
            Value::Str(s) => s.parse().unwrap_or(0.0),
        }
    }

    /// Lenient string read-out.
    pub fn as_str_lossy(&self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::Num(n) => n.to_string(),
            Value::Str(s) => s.clone(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

/// Strict conversion from the erased currency back to a declared node type.
///
/// Used by typed leaf nodes reading from the provider. A wrong-kind value
/// is a resolution failure, not something to coerce through; the lenient
/// read-out helpers above remain available to embedders that want coercion.
pub trait FromValue: Sized {
    const KIND: ValueKind;

    fn from_value(value: Value, path: &str) -> Result<Self, EvalError>;
}

fn mismatch(path: &str, expected: ValueKind, value: &Value) -> EvalError {
    EvalError::TypeMismatch {
        path: path.to_string(),
        expected,
        found: value.kind(),
    }
}

impl FromValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: Value, path: &str) -> Result<Self, EvalError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch(path, ValueKind::Bool, &other)),
        }
    }
}

impl FromValue for f64 {
    const KIND: ValueKind = ValueKind::Num;

    fn from_value(value: Value, path: &str) -> Result<Self, EvalError> {
        match value {
            Value::Num(n) => Ok(n),
            other => Err(mismatch(path, ValueKind::Num, &other)),
        }
    }
}

impl FromValue for String {
    const KIND: ValueKind = ValueKind::Str;

    fn from_value(value: Value, path: &str) -> Result<Self, EvalError> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(mismatch(path, ValueKind::Str, &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(Value::Bool(true).truthy());
        assert!(!Value::Bool(false).truthy());
        assert!(!Value::Num(0.0).truthy());
        assert!(!Value::Num(f64::NAN).truthy());
        assert!(Value::Num(-1.5).truthy());
        assert!(!Value::Str(String::new()).truthy());
        assert!(Value::Str("x".into()).truthy());
    }

    #[test]
    fn lenient_num() {
        assert_eq!(Value::Bool(true).as_num(), 1.0);
        assert_eq!(Value::Str("10.5".into()).as_num(), 10.5);
        assert_eq!(Value::Str("nope".into()).as_num(), 0.0);
    }
}
