//! Forward-only iteration over array and object containers.
//!
//! All iteration goes through a single enum-tagged [`Cursor`], which exposes
//! `has_next` / `advance` / `current`. The [`Keys`], [`Values`] and [`Entries`]
//! adapters wrap a cursor as a standard [`Iterator`].
//!
//! A cursor borrows the container it walks, so it is bounded by the container's
//! size at creation and cannot observe later mutation. Cursors are single-pass:
//! iterate again by asking the value for a new one.
//!
//! - Array keys are the positions `0..len` in ascending order, as Int32 values.
//! - Object keys are owned strings in the map's (unspecified) order.
//! - Values come in the same order as the keys they pair with.

use std::collections::hash_map;

use crate::error::{Result, ValueError};
use crate::value::Value;

/// What a cursor walks and what it yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    ArrayKeys,
    ArrayValues,
    ObjectKeys,
    ObjectValues,
}

impl CursorMode {
    pub fn yields_keys(self) -> bool {
        matches!(self, CursorMode::ArrayKeys | CursorMode::ObjectKeys)
    }
}

/// The item under a cursor, shaped by its mode.
#[derive(Debug, Clone)]
pub enum CursorItem<'a> {
    Key(Value),
    Value(&'a Value),
}

enum Position<'a> {
    Array {
        items: &'a [Value],
        next: usize,
    },
    Object {
        entries: hash_map::Iter<'a, String, Value>,
        current: Option<(&'a String, &'a Value)>,
    },
}

/// A forward-only position over an array or object.
pub struct Cursor<'a> {
    mode: CursorMode,
    position: Position<'a>,
}

impl<'a> Cursor<'a> {
    /// Start a cursor over `value`'s keys (`keys == true`) or values.
    pub fn new(value: &'a Value, keys: bool) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Cursor {
                mode: if keys {
                    CursorMode::ArrayKeys
                } else {
                    CursorMode::ArrayValues
                },
                position: Position::Array { items, next: 0 },
            }),
            Value::Object(map) => {
                let mut entries = map.iter();
                let current = entries.next();
                Ok(Cursor {
                    mode: if keys {
                        CursorMode::ObjectKeys
                    } else {
                        CursorMode::ObjectValues
                    },
                    position: Position::Object { entries, current },
                })
            }
            _ => Err(ValueError::invalid("can't iterate")),
        }
    }

    pub fn mode(&self) -> CursorMode {
        self.mode
    }

    /// False once the cursor has reached the end marker.
    pub fn has_next(&self) -> bool {
        match &self.position {
            Position::Array { items, next } => *next < items.len(),
            Position::Object { current, .. } => current.is_some(),
        }
    }

    /// Move to the next element. Advancing an exhausted cursor does nothing.
    pub fn advance(&mut self) {
        match &mut self.position {
            Position::Array { items, next } => {
                if *next < items.len() {
                    *next += 1;
                }
            }
            Position::Object { entries, current } => {
                if current.is_some() {
                    *current = entries.next();
                }
            }
        }
    }

    /// The key under the cursor, regardless of mode.
    pub fn current_key(&self) -> Option<Value> {
        match &self.position {
            Position::Array { items, next } => (*next < items.len()).then(|| position_key(*next)),
            Position::Object { current, .. } => {
                current.map(|(key, _)| Value::String(key.clone()))
            }
        }
    }

    /// The element or field value under the cursor, regardless of mode.
    pub fn current_value(&self) -> Option<&'a Value> {
        match &self.position {
            Position::Array { items, next } => items.get(*next),
            Position::Object { current, .. } => current.map(|(_, value)| value),
        }
    }

    /// The item under the cursor as selected by its mode.
    pub fn current(&self) -> Option<CursorItem<'a>> {
        if self.mode.yields_keys() {
            self.current_key().map(CursorItem::Key)
        } else {
            self.current_value().map(CursorItem::Value)
        }
    }

    /// Items left, including the current one.
    pub fn remaining(&self) -> usize {
        match &self.position {
            Position::Array { items, next } => items.len() - next,
            Position::Object { entries, current } => {
                usize::from(current.is_some()) + entries.len()
            }
        }
    }
}

fn position_key(pos: usize) -> Value {
    match i32::try_from(pos) {
        Ok(n) => Value::Int32(n),
        Err(_) => Value::Int64(pos as i64),
    }
}

/// Iterator over a container's keys.
pub struct Keys<'a> {
    cursor: Cursor<'a>,
}

impl Iterator for Keys<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let key = self.cursor.current_key()?;
        self.cursor.advance();
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cursor.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Keys<'_> {}

/// Iterator over a container's element or field values.
pub struct Values<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        let value = self.cursor.current_value()?;
        self.cursor.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cursor.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Values<'_> {}

/// Iterator over `(key, value)` pairs.
pub struct Entries<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Value, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor.current_key()?;
        let value = self.cursor.current_value()?;
        self.cursor.advance();
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cursor.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl Value {
    /// Keys of an array (positions) or object (field names).
    ///
    /// ```
    /// use jsany_core::{array, Value};
    ///
    /// let list = array!["a", "b"];
    /// let keys: Vec<i64> = list.keys().unwrap().map(|k| k.to_int().unwrap()).collect();
    /// assert_eq!(keys, vec![0, 1]);
    /// ```
    pub fn keys(&self) -> Result<Keys<'_>> {
        Ok(Keys {
            cursor: Cursor::new(self, true)?,
        })
    }

    /// Element values of an array, or field values of an object.
    pub fn values(&self) -> Result<Values<'_>> {
        Ok(Values {
            cursor: Cursor::new(self, false)?,
        })
    }

    /// Key/value pairs of an array or object.
    pub fn entries(&self) -> Result<Entries<'_>> {
        Ok(Entries {
            cursor: Cursor::new(self, false)?,
        })
    }
}
