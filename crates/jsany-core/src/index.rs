//! Indexing with soft-fail reads and auto-vivifying writes.
//!
//! Reads ([`Value::get`], [`Value::lookup`]) never fail for a missing element:
//! an out-of-range position or absent key reads as `Undefined` and leaves the
//! container untouched. Writes ([`Value::get_mut`], [`Value::set`]) create the
//! missing slot first: arrays are padded with `Undefined` up to the target
//! position, objects receive the key bound to `Undefined`.
//!
//! ```
//! use jsany_core::Value;
//!
//! let mut list = Value::array();
//! list.set(2, "c").unwrap();
//! assert_eq!(list.len(), Some(3));
//! assert!(list.get(0).unwrap().is_undefined());
//! assert!(list.get(100).unwrap().is_undefined());
//! ```

use std::borrow::Cow;

use tracing::trace;

use crate::error::{Result, ValueError};
use crate::value::Value;

/// A resolved index: an array position or an object key.
///
/// Positions applied to an object are looked up under their decimal string
/// form; keys applied to an array are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index<'a> {
    Position(i64),
    Key(&'a str),
}

impl<'a> Index<'a> {
    /// The object key this index addresses.
    pub fn to_key(self) -> Cow<'a, str> {
        match self {
            Index::Position(pos) => Cow::Owned(pos.to_string()),
            Index::Key(key) => Cow::Borrowed(key),
        }
    }
}

/// Anything that can index into a [`Value`].
///
/// Host integers and strings always resolve. A `&Value` resolves when it is an
/// Int32/Int64 (position) or either string kind (key); other kinds fail with
/// `InvalidOperation("unsupported index type")`.
pub trait AsIndex {
    fn as_index(&self) -> Result<Index<'_>>;
}

impl AsIndex for i32 {
    fn as_index(&self) -> Result<Index<'_>> {
        Ok(Index::Position(i64::from(*self)))
    }
}

impl AsIndex for i64 {
    fn as_index(&self) -> Result<Index<'_>> {
        Ok(Index::Position(*self))
    }
}

impl AsIndex for usize {
    fn as_index(&self) -> Result<Index<'_>> {
        i64::try_from(*self)
            .map(Index::Position)
            .map_err(|_| unsupported_index())
    }
}

impl AsIndex for &str {
    fn as_index(&self) -> Result<Index<'_>> {
        Ok(Index::Key(self))
    }
}

impl AsIndex for String {
    fn as_index(&self) -> Result<Index<'_>> {
        Ok(Index::Key(self.as_str()))
    }
}

impl AsIndex for &String {
    fn as_index(&self) -> Result<Index<'_>> {
        Ok(Index::Key(self.as_str()))
    }
}

impl AsIndex for &Value {
    fn as_index(&self) -> Result<Index<'_>> {
        match self {
            Value::Int32(n) => Ok(Index::Position(i64::from(*n))),
            Value::Int64(n) => Ok(Index::Position(*n)),
            Value::StringLiteral(s) => Ok(Index::Key(s)),
            Value::String(s) => Ok(Index::Key(s.as_str())),
            _ => Err(unsupported_index()),
        }
    }
}

/// Largest position an array write may create, matching the JS array length
/// limit of 2^32 - 1 elements.
pub const MAX_ARRAY_INDEX: i64 = u32::MAX as i64 - 1;

fn unsupported_index() -> ValueError {
    ValueError::invalid("unsupported index type")
}

fn not_a_container() -> ValueError {
    ValueError::invalid("not an array or object")
}

impl Value {
    /// Borrow the element or field at `index`, or `None` if it is absent.
    pub fn lookup(&self, index: impl AsIndex) -> Result<Option<&Value>> {
        let index = index.as_index()?;
        match self {
            Value::Array(items) => match index {
                Index::Position(pos) => Ok(usize::try_from(pos).ok().and_then(|i| items.get(i))),
                Index::Key(_) => Err(unsupported_index()),
            },
            Value::Object(map) => Ok(map.get(&*index.to_key())),
            _ => Err(not_a_container()),
        }
    }

    /// Read the element or field at `index`. Missing entries read as
    /// `Undefined`; the container is never modified.
    pub fn get(&self, index: impl AsIndex) -> Result<Value> {
        Ok(self.lookup(index)?.cloned().unwrap_or_default())
    }

    /// Whether `index` currently addresses an existing element or field.
    pub fn contains(&self, index: impl AsIndex) -> Result<bool> {
        Ok(self.lookup(index)?.is_some())
    }

    /// Mutable access to the slot at `index`, creating it when missing.
    ///
    /// Writing past the end of an array pads it with `Undefined`; writing a
    /// missing object key inserts it as `Undefined`. Negative array positions
    /// are rejected, as are positions above [`MAX_ARRAY_INDEX`] or growth the
    /// allocator refuses.
    pub fn get_mut(&mut self, index: impl AsIndex) -> Result<&mut Value> {
        let index = index.as_index()?;
        match self {
            Value::Array(items) => {
                let pos = match index {
                    Index::Position(pos) => pos,
                    Index::Key(_) => return Err(unsupported_index()),
                };
                if pos > MAX_ARRAY_INDEX {
                    return Err(ValueError::invalid("array index out of range"));
                }
                let slot = usize::try_from(pos)
                    .map_err(|_| ValueError::invalid("negative array index"))?;
                if slot >= items.len() {
                    items.try_reserve(slot + 1 - items.len()).map_err(|err| {
                        ValueError::InvalidOperation(format!(
                            "cannot grow array to {} elements: {err}",
                            slot + 1
                        ))
                    })?;
                    trace!(from = items.len(), to = slot + 1, "extending array");
                    items.resize_with(slot + 1, Value::default);
                }
                items.get_mut(slot).ok_or_else(|| {
                    ValueError::Invariant(format!("array slot {slot} missing after extension"))
                })
            }
            Value::Object(map) => {
                let key = index.to_key();
                if !map.contains_key(&*key) {
                    trace!(key = %key, "inserting missing key");
                    map.insert(key.clone().into_owned(), Value::Undefined);
                }
                map.get_mut(&*key).ok_or_else(|| {
                    ValueError::Invariant(format!("key {key:?} missing after insertion"))
                })
            }
            _ => Err(not_a_container()),
        }
    }

    /// Assign `value` at `index`, creating the slot when missing.
    pub fn set(&mut self, index: impl AsIndex, value: impl Into<Value>) -> Result<()> {
        *self.get_mut(index)? = value.into();
        Ok(())
    }

    /// Remove a key from an object. Absent keys are ignored.
    ///
    /// Only objects support deletion; any other receiver is a type error.
    pub fn delete(&mut self, key: impl AsIndex) -> Result<()> {
        let Value::Object(map) = self else {
            return Err(ValueError::wrong_type());
        };
        let key = key.as_index()?.to_key();
        if map.remove(&*key).is_some() {
            trace!(key = %key, "deleted key");
        }
        Ok(())
    }
}
