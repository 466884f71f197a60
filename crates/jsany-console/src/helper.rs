//! A call target that ignores its argument.

use jsany_core::Value;

/// Stateless helper used as a call target by client code.
#[derive(Debug, Clone, Copy, Default)]
pub struct Helper;

impl Helper {
    /// Discard `value` and return `Undefined`.
    pub fn void(&self, value: Value) -> Value {
        drop(value);
        Value::Undefined
    }
}
