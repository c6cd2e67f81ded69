//! Core trait definitions for stratalog abstractions.

use std::io;

/// Destination for rendered log lines.
///
/// One sink is shared by every logger handle, so implementations must make
/// each `write_line` call atomic with respect to concurrent calls: two lines
/// written from different threads never interleave.
pub trait Sink: Send + Sync {
    /// Write one line. The line carries no trailing newline.
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Flush anything buffered.
    ///
    /// Called before the process terminates on a fatal message.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
