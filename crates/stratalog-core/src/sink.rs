//! Output sinks for rendered log lines.
//!
//! [`WriterSink`] serializes writes through a mutex and prefixes every
//! line with a local timestamp. [`MemorySink`] keeps lines in memory.

use chrono::Local;
use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;
use stratalog_types::{Result, Sink, SinkTarget};
use tracing::debug;

/// Timestamp prefix, e.g. `2024/01/23 01:23:23.123123`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Open the sink for a target.
///
/// File targets are created, or truncated if they exist.
pub fn open_sink(target: &SinkTarget) -> Result<Arc<dyn Sink>> {
    match target {
        SinkTarget::Stderr => {
            debug!("Logging to stderr");
            Ok(Arc::new(WriterSink::new(io::stderr())))
        }
        SinkTarget::File(path) => {
            let file = File::create(path)?;
            debug!("Logging to {:?}", path);
            Ok(Arc::new(WriterSink::new(file)))
        }
    }
}

/// Sink over any writer.
///
/// Each line is timestamped, written with its newline and flushed while the
/// lock is held.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    timestamps: bool,
}

impl<W: Write + Send> WriterSink<W> {
    /// Create a timestamping sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            timestamps: true,
        }
    }

    /// Disable the timestamp prefix.
    pub fn without_timestamps(mut self) -> Self {
        self.timestamps = false;
        self
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();
        if self.timestamps {
            write!(writer, "{} ", Local::now().format(TIMESTAMP_FORMAT))?;
        }
        writeln!(writer, "{}", line)?;
        writer.flush()
    }

    fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}

/// In-memory sink.
///
/// Clones share the same buffer, so a test can keep one clone and hand
/// another to a registry.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Remove and return every line written so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    /// Number of lines written so far.
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::thread;
    use tempfile::TempDir;

    #[test]
    fn test_writer_sink_without_timestamps() {
        let sink = WriterSink::new(Vec::new()).without_timestamps();
        sink.write_line("INFO foo      hello").unwrap();
        sink.write_line("DEBUG foo      world").unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "INFO foo      hello\nDEBUG foo      world\n");
    }

    #[test]
    fn test_writer_sink_timestamp_prefix() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line("WARNING x        msg").unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        // "YYYY/MM/DD HH:MM:SS.uuuuuu " is 27 characters
        assert_eq!(out.len(), 27 + "WARNING x        msg\n".len());
        assert_eq!(&out[4..5], "/");
        assert_eq!(&out[19..20], ".");
        assert!(out.ends_with(" WARNING x        msg\n"));
    }

    #[test]
    fn test_lines_do_not_interleave() {
        let sink = Arc::new(WriterSink::new(Vec::new()).without_timestamps());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for i in 0..100 {
                        sink.write_line(&format!("thread-{} line-{}", t, i)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let sink = Arc::try_unwrap(sink).ok().unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 800);
        assert!(lines.iter().all(|l| l.starts_with("thread-") && l.contains(" line-")));
    }

    #[test]
    fn test_open_file_sink_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        std::fs::write(&path, "stale\n").unwrap();

        let sink = open_sink(&SinkTarget::File(path.clone())).unwrap();
        sink.write_line("SEVERE db       down").unwrap();
        sink.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.ends_with(" SEVERE db       down\n"));
    }

    #[test]
    fn test_open_file_sink_missing_directory() {
        let target = SinkTarget::File(PathBuf::from("/nonexistent/dir/app.log"));
        assert!(open_sink(&target).is_err());
    }

    #[test]
    fn test_memory_sink_shares_buffer() {
        let sink = MemorySink::new();
        let other = sink.clone();
        other.write_line("one").unwrap();
        other.write_line("two").unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.take(), vec!["one", "two"]);
        assert!(other.is_empty());
    }
}
