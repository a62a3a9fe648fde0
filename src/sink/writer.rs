//! Sink writer
//!
//! Writes informational messages to stdout or appends them to a log file,
//! each line prefixed with a common-log style timestamp.

use super::InfoSink;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Sink output target
enum SinkTarget {
    /// Write to stdout
    Stdout,
    /// Append to file
    File(Mutex<File>),
}

/// Timestamping sink writing to stdout or a log file.
pub struct WriterSink {
    target: SinkTarget,
}

impl WriterSink {
    /// Sink writing to stdout.
    pub fn stdout() -> Self {
        Self {
            target: SinkTarget::Stdout,
        }
    }

    /// Sink appending to the given log file.
    ///
    /// Parent directories are created as needed. Returns an error if the
    /// file cannot be opened; that is a host startup concern, never a
    /// request-time one.
    pub fn file(path: &str) -> io::Result<Self> {
        let file = open_log_file(path)?;
        Ok(Self {
            target: SinkTarget::File(Mutex::new(file)),
        })
    }
}

impl InfoSink for WriterSink {
    fn info(&self, message: &str) {
        let line = format!(
            "[{}] [INFO] {message}",
            Local::now().format("%d/%b/%Y:%H:%M:%S %z")
        );
        match &self.target {
            SinkTarget::Stdout => println!("{line}"),
            SinkTarget::File(file) => {
                // A failed write is swallowed; emitting never fails the request
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{line}");
                }
            }
        }
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_file_sink_appends_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("resolver.log");

        let sink = WriterSink::file(log_path.to_str().unwrap()).unwrap();
        sink.info("first message");
        sink.info("second message");

        let contents = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[INFO] first message"));
        assert!(lines[1].contains("[INFO] second message"));
        assert!(lines[0].starts_with('['));
    }

    #[test]
    fn test_file_sink_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("logs/nested/resolver.log");

        let sink = WriterSink::file(log_path.to_str().unwrap()).unwrap();
        sink.info("message");

        assert!(log_path.exists());
    }
}
