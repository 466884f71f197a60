//! Display strings for every kind.
//!
//! `Display` is the hook used by `+` concatenation and by loggers. Strings
//! render their raw content, numbers their decimal form, and containers
//! render their elements' display strings recursively. Object fields are
//! sorted by key so the output is stable across runs.

use std::fmt;

use crate::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Int32(n) => write!(f, "{n}"),
            Value::Int64(n) => write!(f, "{n}"),
            Value::Real(r) => write_real(*r, f),
            Value::StringLiteral(s) => f.write_str(s),
            Value::String(s) => f.write_str(s),
            Value::Function(_) => f.write_str("[function]"),
            Value::Closure(_) => f.write_str("[closure]"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                let mut fields: Vec<_> = map.iter().collect();
                fields.sort_unstable_by(|a, b| a.0.cmp(b.0));
                f.write_str("{")?;
                for (i, (key, value)) in fields.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Whole numbers print without a fractional part and `-0` prints as `0`.
fn write_real(r: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if r.is_nan() {
        f.write_str("NaN")
    } else if r.is_infinite() {
        f.write_str(if r > 0.0 { "Infinity" } else { "-Infinity" })
    } else if r == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{r}")
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("Undefined"),
            Value::Null => f.write_str("Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Int32(n) => f.debug_tuple("Int32").field(n).finish(),
            Value::Int64(n) => f.debug_tuple("Int64").field(n).finish(),
            Value::Real(r) => f.debug_tuple("Real").field(r).finish(),
            Value::StringLiteral(s) => f.debug_tuple("StringLiteral").field(s).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Function(ptr) => f.debug_tuple("Function").field(ptr).finish(),
            Value::Closure(_) => f.write_str("Closure(..)"),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(map) => f.debug_tuple("Object").field(map).finish(),
        }
    }
}
