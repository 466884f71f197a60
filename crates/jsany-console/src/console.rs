//! Line-oriented logger for values.

use std::io::{self, Write};

use jsany_core::Value;
use tracing::warn;

use crate::error::Result;

/// Writes each logged value's display string followed by a newline.
///
/// `log` has no return value: a failed write is reported through `tracing`
/// and otherwise dropped. Use [`Console::try_log`] to observe the error.
pub struct Console<W: Write> {
    out: W,
}

impl Console<io::Stdout> {
    /// A console writing to standard output.
    pub fn stdout() -> Self {
        Console { out: io::stdout() }
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Console { out }
    }

    /// Log one value.
    pub fn log(&mut self, value: &Value) {
        if let Err(err) = self.try_log(value) {
            warn!(error = %err, kind = %value.kind(), "console write failed");
        }
    }

    /// Log one value, returning any write error.
    pub fn try_log(&mut self, value: &Value) -> Result<()> {
        writeln!(self.out, "{value}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the console, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
