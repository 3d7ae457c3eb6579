//! Diagnostic side channel for the search.
//!
//! Nothing written here feeds back into move selection; a search with a
//! [`NullLogger`] picks exactly the same move.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// Sink for per-depth search diagnostics.
pub trait SearchLogger: Send + Sync {
    fn log(&self, line: &str);

    /// Drop everything logged so far.
    fn clear(&self) {}
}

/// Discards every line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLogger;

impl SearchLogger for NullLogger {
    fn log(&self, _line: &str) {}
}

/// Forwards lines to the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct DebugLogger;

impl SearchLogger for DebugLogger {
    fn log(&self, line: &str) {
        log::debug!(target: "minimax_chess::search", "{line}");
    }
}

/// Appends lines to a text file.
///
/// Each write opens the file, appends one line and closes it again while
/// holding the logger's lock. Failures go to stderr and are otherwise
/// ignored.
#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLogger {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl SearchLogger for FileLogger {
    fn log(&self, line: &str) {
        let _guard = self.lock.lock();
        if let Err(err) = self.append(line) {
            eprintln!("search log {}: {err}", self.path.display());
        }
    }

    fn clear(&self) {
        let _guard = self.lock.lock();
        if let Err(err) = File::create(&self.path) {
            eprintln!("search log {}: {err}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("minimax_chess_{}_{name}.log", std::process::id()))
    }

    #[test]
    fn test_file_logger_appends_and_clears() {
        let path = scratch_path("append");
        let logger = FileLogger::new(&path);
        logger.clear();
        logger.log("depth 1");
        logger.log("depth 2");
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "depth 1\ndepth 2\n");

        logger.clear();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_logger_swallows_io_errors() {
        let dir = scratch_path("missing_dir");
        let logger = FileLogger::new(dir.join("nested").join("search.log"));
        logger.log("lost line");
        logger.clear();
        assert!(!logger.path().exists());
    }
}
