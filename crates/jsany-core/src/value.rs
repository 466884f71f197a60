//! The dynamic value type and its kind tag.
//!
//! A [`Value`] is a closed tagged union: the enum discriminant is the kind, the
//! variant fields are the payload. Heap-backed kinds (owned strings, arrays,
//! objects) are owned by exactly one `Value`, and `Clone` deep-copies them, so two
//! values never silently alias the same backing store. Closures are the one
//! exception: they are immutable callables behind an `Rc`, and a cloned closure
//! value calls the same function object.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{Result, ValueError};
use crate::index::AsIndex;

/// Discriminates how a [`Value`]'s payload is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Int32,
    Int64,
    Real,
    /// Borrowed `'static` string, typically a source literal.
    StringLiteral,
    /// Heap-allocated string produced at runtime (concatenation, JSON, keys).
    String,
    Function,
    Closure,
    Array,
    Object,
}

impl Kind {
    /// Lower-case kind name used in error messages and `Debug` output.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Real => "real",
            Kind::StringLiteral => "string literal",
            Kind::String => "string",
            Kind::Function => "function",
            Kind::Closure => "closure",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically-typed value with JS-like semantics.
///
/// Missing reads produce [`Value::Undefined`], mutable indexing creates missing
/// array slots and object keys, and operators coerce between kinds following the
/// rules documented on each method.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Real(f64),
    StringLiteral(&'static str),
    String(String),
    Function(fn()),
    Closure(Rc<dyn Fn()>),
    Array(Vec<Value>),
    /// String-keyed fields. Iteration order is unspecified.
    Object(HashMap<String, Value>),
}

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::Real(_) => Kind::Real,
            Value::StringLiteral(_) => Kind::StringLiteral,
            Value::String(_) => Kind::String,
            Value::Function(_) => Kind::Function,
            Value::Closure(_) => Kind::Closure,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Create an empty container of the requested kind.
    ///
    /// Only [`Kind::Array`] and [`Kind::Object`] can be requested this way;
    /// every other kind is a type error.
    pub fn with_kind(kind: Kind) -> Result<Value> {
        match kind {
            Kind::Array => Ok(Value::Array(Vec::new())),
            Kind::Object => Ok(Value::Object(HashMap::new())),
            _ => Err(ValueError::wrong_type()),
        }
    }

    /// An empty array.
    pub fn array() -> Value {
        Value::Array(Vec::new())
    }

    /// An empty object.
    pub fn new_object() -> Value {
        Value::Object(HashMap::new())
    }

    /// Build an object literal from key/value pairs. Integer keys are stored
    /// under their decimal string form. Later duplicates overwrite earlier ones.
    pub fn object<K, V, I>(pairs: I) -> Value
    where
        K: ObjectKey,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into_object_key(), value.into()))
                .collect(),
        )
    }

    /// Build an object literal from dynamically-typed keys.
    ///
    /// Keys must be integer or string kinds; anything else is rejected with
    /// `InvalidOperation("unsupported index type")`.
    pub fn try_object<I>(pairs: I) -> Result<Value>
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        let mut map = HashMap::new();
        for (key, value) in pairs {
            let key = (&key).as_index()?.to_key().into_owned();
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }

    /// Wrap a closure as a callable value.
    pub fn closure(f: impl Fn() + 'static) -> Value {
        Value::Closure(Rc::new(f))
    }

    /// Wrap a plain function pointer as a callable value.
    pub fn function(f: fn()) -> Value {
        Value::Function(f)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for both string kinds (literal and owned).
    pub fn is_string(&self) -> bool {
        matches!(self, Value::StringLiteral(_) | Value::String(_))
    }

    /// True for Int32, Int64 and Real.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int32(_) | Value::Int64(_) | Value::Real(_))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Closure(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int32(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// String content of either string kind.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::StringLiteral(s) => Some(s),
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Number of elements or fields, or `None` for non-containers.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            Value::Object(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Truthiness coercion.
    ///
    /// A string literal is truthy iff its first byte is non-zero, so `""` and
    /// literals starting with NUL are falsy. Reals are always truthy.
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Int32(n) => *n != 0,
            Value::Int64(n) => *n != 0,
            Value::StringLiteral(s) => s.as_bytes().first().is_some_and(|b| *b != 0),
            Value::String(s) => !s.is_empty(),
            Value::Real(_)
            | Value::Function(_)
            | Value::Closure(_)
            | Value::Array(_)
            | Value::Object(_) => true,
        }
    }

    /// Integer coercion.
    ///
    /// Reals truncate toward zero (saturating at the `i64` range). Strings are
    /// parsed as a leading decimal integer and fail with
    /// [`ValueError::Parse`] when no digits are found. Callables and containers
    /// have no integer form.
    pub fn to_int(&self) -> Result<i64> {
        match self {
            Value::Undefined | Value::Null => Ok(0),
            Value::Boolean(b) => Ok(i64::from(*b)),
            Value::Int32(n) => Ok(i64::from(*n)),
            Value::Int64(n) => Ok(*n),
            Value::Real(r) => Ok(*r as i64),
            Value::StringLiteral(s) => parse_int(s),
            Value::String(s) => parse_int(s),
            Value::Function(_) | Value::Closure(_) | Value::Array(_) | Value::Object(_) => {
                Err(ValueError::wrong_type())
            }
        }
    }

    /// Invoke a stored function or closure with no arguments.
    pub fn call(&self) -> Result<()> {
        match self {
            Value::Function(f) => {
                f();
                Ok(())
            }
            Value::Closure(f) => {
                f();
                Ok(())
            }
            _ => Err(ValueError::invalid("not callable")),
        }
    }
}

/// Parse a string the way integer coercion does: optional leading whitespace,
/// an optional sign, then one or more decimal digits. Anything after the digits
/// is ignored.
pub(crate) fn parse_int(input: &str) -> Result<i64> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return Err(ValueError::Parse {
            input: input.to_string(),
        });
    }
    trimmed[..end].parse().map_err(|_| ValueError::Parse {
        input: input.to_string(),
    })
}

/// Types usable as keys in an object literal.
pub trait ObjectKey {
    fn into_object_key(self) -> String;
}

impl ObjectKey for &str {
    fn into_object_key(self) -> String {
        self.to_string()
    }
}

impl ObjectKey for String {
    fn into_object_key(self) -> String {
        self
    }
}

impl ObjectKey for &String {
    fn into_object_key(self) -> String {
        self.clone()
    }
}

impl ObjectKey for i32 {
    fn into_object_key(self) -> String {
        self.to_string()
    }
}

impl ObjectKey for i64 {
    fn into_object_key(self) -> String {
        self.to_string()
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<&'static str> for Value {
    fn from(s: &'static str) -> Self {
        Value::StringLiteral(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<fn()> for Value {
    fn from(f: fn()) -> Self {
        Value::Function(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(map: HashMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}
