//! # jsany-core
//!
//! A dynamically-typed value with JavaScript-like semantics for Rust hosts.
//!
//! [`Value`] is a closed tagged union over undefined, null, booleans, 32- and
//! 64-bit integers, reals, borrowed and owned strings, functions, closures,
//! arrays and objects. It supports:
//!
//! - **Soft reads**: indexing a missing element or key reads `Undefined`
//! - **Auto-vivification**: mutable indexing creates missing slots
//! - **Iteration** over array/object keys and values through a single cursor
//! - **Coercion**: truthiness, integer conversion, display strings
//! - **Operators**: string-wins `+`, numeric `-`, `++`/`--`, `<`, `>`, `==`
//!
//! Containers have value semantics: cloning a `Value` deep-copies its strings,
//! arrays and objects.
//!
//! ## Quick start
//!
//! ```rust
//! use jsany_core::{object, Value};
//!
//! let mut state = object! { "name" => String::from("x"), "count" => 0 };
//! for _ in 0..3 {
//!     state.get_mut("count").unwrap().increment().unwrap();
//! }
//!
//! let mut list = Value::array();
//! list.set(2, "c").unwrap();
//! assert_eq!(list.len(), Some(3));
//!
//! let label = state.get("name").unwrap().try_add(&state.get("count").unwrap()).unwrap();
//! assert_eq!(label.to_string(), "x3");
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value`, `Kind`, constructors and coercions
//! - [`index`]: soft-fail reads, auto-vivifying writes, key deletion
//! - [`iter`]: `Cursor`, `Keys`, `Values`, `Entries`
//! - [`ops`]: arithmetic, relational and equality operators
//! - [`json`]: conversion to and from `serde_json`
//! - [`error`]: `ValueError` and the crate `Result` alias

mod display;
pub mod error;
pub mod index;
pub mod iter;
pub mod json;
mod macros;
pub mod ops;
pub mod value;

pub use error::{Result, ValueError};
pub use index::{AsIndex, Index, MAX_ARRAY_INDEX};
pub use iter::{Cursor, CursorItem, CursorMode, Entries, Keys, Values};
pub use ops::{int_add, str_add};
pub use value::{Kind, ObjectKey, Value};
