//! # jsany-console
//!
//! Collaborators that take [`Value`]s as call arguments: a [`Console`] that
//! logs display strings line by line, and a [`Helper`] whose `void` discards
//! its argument. Both are plain structs created by the application and passed
//! to whatever needs them.
//!
//! ```rust
//! use jsany_console::{Console, Helper};
//! use jsany_core::{array, Value};
//!
//! let mut console = Console::new(Vec::new());
//! console.log(&array![1, 2]);
//! console.log(&Helper.void(Value::from("ignored")));
//! assert_eq!(console.into_inner(), b"[1, 2]\nundefined\n");
//! ```

pub mod console;
pub mod error;
pub mod helper;

pub use console::Console;
pub use error::ConsoleError;
pub use helper::Helper;
