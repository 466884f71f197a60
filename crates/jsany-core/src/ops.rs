//! Arithmetic, relational and equality operators.
//!
//! The rules in short:
//!
//! - `+` concatenates display strings as soon as either side is a string kind.
//!   Otherwise both sides must be the same numeric kind.
//! - `-`, `++`, `--` only accept numeric kinds. Integer kinds wrap on overflow.
//! - `<` / `>` compare numerically; string operands are parsed as integers and
//!   fail with a parse error when they are not numeric.
//! - `==` is false across kinds (`Int32(5) != Real(5.0)`) and compares by value
//!   or content within a kind. Callables and containers have no equality.
//!
//! `std::ops::Add` and `Sub` are implemented on `&Value` with
//! `Output = Result<Value>` so that kind errors stay visible at the call site.

use std::cmp::Ordering;
use std::ops::{Add, Sub};

use crate::error::{Result, ValueError};
use crate::value::{parse_int, Value};

/// A value reduced to a number for relational comparison.
#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Real(f64),
}

impl Number {
    fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Int(a), Number::Real(b)) => compare_int_real(a, b),
            (Number::Real(a), Number::Int(b)) => compare_int_real(b, a).map(Ordering::reverse),
            (Number::Real(a), Number::Real(b)) => a.partial_cmp(&b),
        }
    }
}

/// Exact ordering of an integer against a real, without rounding the integer
/// through `f64`.
fn compare_int_real(int: i64, real: f64) -> Option<Ordering> {
    // 2^63 is exactly representable; everything at or above it exceeds i64.
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
    if real.is_nan() {
        return None;
    }
    if real >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if real < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }
    let whole = real.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(real - whole)),
        ord => Some(ord),
    }
}

impl Value {
    fn relational_operand(&self) -> Result<Number> {
        match self {
            Value::Int32(n) => Ok(Number::Int(i64::from(*n))),
            Value::Int64(n) => Ok(Number::Int(*n)),
            Value::Real(r) => Ok(Number::Real(*r)),
            Value::StringLiteral(s) => parse_int(s).map(Number::Int),
            Value::String(s) => parse_int(s).map(Number::Int),
            _ => Err(ValueError::wrong_type()),
        }
    }

    fn concat(&self, other: &dyn std::fmt::Display) -> Value {
        Value::String(format!("{self}{other}"))
    }

    /// `self + other`.
    ///
    /// ```
    /// use jsany_core::Value;
    ///
    /// let joined = Value::from(5).try_add(&Value::from("x")).unwrap();
    /// assert_eq!(joined.as_str(), Some("5x"));
    /// assert!(Value::from(5).try_add(&Value::from(5.0)).is_err());
    /// ```
    pub fn try_add(&self, other: &Value) -> Result<Value> {
        if self.is_string() || other.is_string() {
            return Ok(self.concat(other));
        }
        match (self, other) {
            (Value::Int32(a), Value::Int32(b)) => Ok(Value::Int32(a.wrapping_add(*b))),
            (Value::Int64(a), Value::Int64(b)) => Ok(Value::Int64(a.wrapping_add(*b))),
            (Value::Real(a), Value::Real(b)) => Ok(Value::Real(a + b)),
            _ => Err(ValueError::wrong_type()),
        }
    }

    /// `self - other`. Both sides must be the same numeric kind.
    pub fn try_sub(&self, other: &Value) -> Result<Value> {
        match (self, other) {
            (Value::Int32(a), Value::Int32(b)) => Ok(Value::Int32(a.wrapping_sub(*b))),
            (Value::Int64(a), Value::Int64(b)) => Ok(Value::Int64(a.wrapping_sub(*b))),
            (Value::Real(a), Value::Real(b)) => Ok(Value::Real(a - b)),
            _ => Err(ValueError::wrong_type()),
        }
    }

    /// `self + n` for a host integer. Numeric kinds keep their own kind;
    /// string kinds append the integer's decimal form.
    pub fn add_int(&self, n: i32) -> Result<Value> {
        match self {
            Value::Int32(a) => Ok(Value::Int32(a.wrapping_add(n))),
            Value::Int64(a) => Ok(Value::Int64(a.wrapping_add(i64::from(n)))),
            Value::Real(a) => Ok(Value::Real(a + f64::from(n))),
            Value::StringLiteral(_) | Value::String(_) => Ok(self.concat(&n)),
            _ => Err(ValueError::wrong_type()),
        }
    }

    /// `self - n` for a host integer. Numeric kinds only.
    pub fn sub_int(&self, n: i32) -> Result<Value> {
        match self {
            Value::Int32(a) => Ok(Value::Int32(a.wrapping_sub(n))),
            Value::Int64(a) => Ok(Value::Int64(a.wrapping_sub(i64::from(n)))),
            Value::Real(a) => Ok(Value::Real(a - f64::from(n))),
            _ => Err(ValueError::wrong_type()),
        }
    }

    /// `self + "text"`: a string operand always concatenates.
    pub fn add_str(&self, text: &str) -> Value {
        self.concat(&text)
    }

    /// `self += other`. On error the receiver is left as it was.
    pub fn try_add_assign(&mut self, other: &Value) -> Result<&mut Self> {
        *self = self.try_add(other)?;
        Ok(self)
    }

    /// Prefix `++`: increment in place.
    pub fn increment(&mut self) -> Result<&mut Self> {
        match self {
            Value::Int32(n) => *n = n.wrapping_add(1),
            Value::Int64(n) => *n = n.wrapping_add(1),
            Value::Real(r) => *r += 1.0,
            _ => return Err(ValueError::wrong_type()),
        }
        Ok(self)
    }

    /// Prefix `--`: decrement in place.
    pub fn decrement(&mut self) -> Result<&mut Self> {
        match self {
            Value::Int32(n) => *n = n.wrapping_sub(1),
            Value::Int64(n) => *n = n.wrapping_sub(1),
            Value::Real(r) => *r -= 1.0,
            _ => return Err(ValueError::wrong_type()),
        }
        Ok(self)
    }

    /// Postfix `++`: increment in place, returning the previous value.
    pub fn post_increment(&mut self) -> Result<Value> {
        let before = self.clone();
        self.increment()?;
        Ok(before)
    }

    /// Postfix `--`: decrement in place, returning the previous value.
    pub fn post_decrement(&mut self) -> Result<Value> {
        let before = self.clone();
        self.decrement()?;
        Ok(before)
    }

    /// `self < other`.
    pub fn less_than(&self, other: &Value) -> Result<bool> {
        let ord = self.relational_operand()?.compare(other.relational_operand()?);
        Ok(ord == Some(Ordering::Less))
    }

    /// `self > other`.
    pub fn greater_than(&self, other: &Value) -> Result<bool> {
        let ord = self.relational_operand()?.compare(other.relational_operand()?);
        Ok(ord == Some(Ordering::Greater))
    }

    /// `self < n` for a host integer.
    pub fn less_than_int(&self, n: i64) -> Result<bool> {
        let ord = self.relational_operand()?.compare(Number::Int(n));
        Ok(ord == Some(Ordering::Less))
    }

    /// `self > n` for a host integer.
    pub fn greater_than_int(&self, n: i64) -> Result<bool> {
        let ord = self.relational_operand()?.compare(Number::Int(n));
        Ok(ord == Some(Ordering::Greater))
    }

    /// `self == n` for a host integer. Strings are parsed before comparing.
    pub fn equals_int(&self, n: i64) -> Result<bool> {
        let ord = self.relational_operand()?.compare(Number::Int(n));
        Ok(ord == Some(Ordering::Equal))
    }

    /// `self == other`.
    ///
    /// Values of different kinds are never equal. Within a kind, primitives
    /// compare by value and strings by content. Functions, closures, arrays
    /// and objects have no defined equality and fail instead.
    pub fn equals(&self, other: &Value) -> Result<bool> {
        if self.kind() != other.kind() {
            return Ok(false);
        }
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => Ok(true),
            (Value::Boolean(a), Value::Boolean(b)) => Ok(a == b),
            (Value::Int32(a), Value::Int32(b)) => Ok(a == b),
            (Value::Int64(a), Value::Int64(b)) => Ok(a == b),
            (Value::Real(a), Value::Real(b)) => Ok(a == b),
            (Value::StringLiteral(a), Value::StringLiteral(b)) => Ok(a == b),
            (Value::String(a), Value::String(b)) => Ok(a == b),
            _ => Err(ValueError::InvalidOperation(format!(
                "no equality for {}",
                self.kind()
            ))),
        }
    }
}

/// `n + value`: the host integer comes first in a concatenation.
pub fn int_add(n: i32, value: &Value) -> Result<Value> {
    match value {
        Value::StringLiteral(_) | Value::String(_) => Ok(Value::String(format!("{n}{value}"))),
        _ => value.add_int(n),
    }
}

/// `"text" + value`: always a concatenation.
pub fn str_add(text: &str, value: &Value) -> Value {
    Value::String(format!("{text}{value}"))
}

impl Add<&Value> for &Value {
    type Output = Result<Value>;

    fn add(self, rhs: &Value) -> Result<Value> {
        self.try_add(rhs)
    }
}

impl Add<i32> for &Value {
    type Output = Result<Value>;

    fn add(self, rhs: i32) -> Result<Value> {
        self.add_int(rhs)
    }
}

impl Add<&str> for &Value {
    type Output = Value;

    fn add(self, rhs: &str) -> Value {
        self.add_str(rhs)
    }
}

impl Add<&Value> for i32 {
    type Output = Result<Value>;

    fn add(self, rhs: &Value) -> Result<Value> {
        int_add(self, rhs)
    }
}

impl Add<&Value> for &str {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        str_add(self, rhs)
    }
}

impl Sub<&Value> for &Value {
    type Output = Result<Value>;

    fn sub(self, rhs: &Value) -> Result<Value> {
        self.try_sub(rhs)
    }
}

impl Sub<i32> for &Value {
    type Output = Result<Value>;

    fn sub(self, rhs: i32) -> Result<Value> {
        self.sub_int(rhs)
    }
}
