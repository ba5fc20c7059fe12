//! The line writer shared by one diff call.

use core::fmt::{self, Write};

/// Writes marked lines, separated by newlines.
///
/// No newline follows the last line, so a finished diff never ends with one.
pub(crate) struct Output<'w> {
    writer: &'w mut dyn Write,
    started: bool,
}

impl<'w> Output<'w> {
    pub(crate) fn new(writer: &'w mut dyn Write) -> Self {
        Self {
            writer,
            started: false,
        }
    }

    /// Writes every line of `block` behind `marker` and a space, then
    /// `separator` right after the last line.
    pub(crate) fn block(&mut self, marker: &str, block: &str, separator: &str) -> fmt::Result {
        for line in block.split('\n') {
            if self.started {
                self.writer.write_char('\n')?;
            }
            self.started = true;
            write!(self.writer, "{marker} {line}")?;
        }
        self.writer.write_str(separator)
    }
}
