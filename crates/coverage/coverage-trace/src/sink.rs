//! DirectorySink: write flush cycle artifacts to disk.
//!
//! Layout under the root directory:
//!
//! ```text
//! <root>/summary.txt          "Drawer Area: N" header, then one summary line per cycle
//! <root>/full_ops.txt         every cycle's text, each followed by a separator line
//! <root>/flush/flush-<i>.txt  trace + summary line of cycle i
//! <root>/flush/flush_count    number of cycles written so far
//! ```
//!
//! `summary.txt` and `full_ops.txt` are truncated when the sink is created.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::report::{FlushRecord, FlushSink};

/// Line written after each cycle in `full_ops.txt`
pub const CYCLE_SEPARATOR: &str = "----------";

/// Error type for `DirectorySink` operations.
#[derive(Debug)]
pub enum SinkError {
    /// An I/O error from std::io.
    Io(std::io::Error),
}

impl core::fmt::Display for SinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SinkError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Writes flush records as text files under one root directory.
pub struct DirectorySink {
    root: PathBuf,
    flush_dir: PathBuf,
    summary: File,
    full_ops: File,
    written: u64,
}

impl DirectorySink {
    /// Open a sink rooted at `root` for a display of `total_area` pixels.
    ///
    /// Creates the directories if needed and starts `summary.txt` with the
    /// `Drawer Area` header.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Io` if a directory or file cannot be created.
    pub fn create(root: impl AsRef<Path>, total_area: u64) -> Result<Self, SinkError> {
        let root = root.as_ref().to_path_buf();
        let flush_dir = root.join("flush");
        fs::create_dir_all(&flush_dir)?;

        let mut summary = File::create(root.join("summary.txt"))?;
        writeln!(summary, "Drawer Area: {total_area}")?;
        let full_ops = File::create(root.join("full_ops.txt"))?;

        tracing::debug!(root = %root.display(), total_area, "Flush sink opened");
        Ok(Self {
            root,
            flush_dir,
            summary,
            full_ops,
            written: 0,
        })
    }

    /// Root directory of the sink.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the per-cycle file for `cycle_index`.
    pub fn cycle_path(&self, cycle_index: u64) -> PathBuf {
        self.flush_dir.join(format!("flush-{cycle_index}.txt"))
    }

    /// Number of records written through this sink.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl FlushSink for DirectorySink {
    type Error = SinkError;

    fn accept(&mut self, record: &FlushRecord) -> Result<(), SinkError> {
        let cycle_text = record.cycle_text();

        fs::write(self.cycle_path(record.cycle_index), &cycle_text)?;
        writeln!(self.summary, "{}", record.summary_line())?;
        write!(self.full_ops, "{cycle_text}\n{CYCLE_SEPARATOR}\n")?;

        self.written = self.written.saturating_add(1);
        fs::write(self.flush_dir.join("flush_count"), self.written.to_string())?;

        self.summary.flush()?;
        self.full_ops.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::create(dir.path(), 7853).unwrap();
        assert_eq!(sink.written(), 0);
        let summary = fs::read_to_string(dir.path().join("summary.txt")).unwrap();
        assert_eq!(summary, "Drawer Area: 7853\n");
        assert!(dir.path().join("flush").is_dir());
    }

    #[test]
    fn test_accept_writes_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::create(dir.path(), 1000).unwrap();

        let first = FlushRecord::new(0, 200, 1000, "fillRectangle x1=0 y1=0 x2=10 y2=20 area=200\n".to_string());
        let second = FlushRecord::new(1, 0, 1000, String::new());
        sink.accept(&first).unwrap();
        sink.accept(&second).unwrap();

        let cycle0 = fs::read_to_string(sink.cycle_path(0)).unwrap();
        assert_eq!(cycle0, "fillRectangle x1=0 y1=0 x2=10 y2=20 area=200\n0# Area drawn: 20%");

        let summary = fs::read_to_string(dir.path().join("summary.txt")).unwrap();
        assert_eq!(summary, "Drawer Area: 1000\n0# Area drawn: 20%\n1# Area drawn: 0%\n");

        let full = fs::read_to_string(dir.path().join("full_ops.txt")).unwrap();
        assert_eq!(
            full,
            "fillRectangle x1=0 y1=0 x2=10 y2=20 area=200\n0# Area drawn: 20%\n----------\n\
             1# Area drawn: 0%\n----------\n"
        );

        let count = fs::read_to_string(dir.path().join("flush").join("flush_count")).unwrap();
        assert_eq!(count, "2");
    }

    #[test]
    fn test_create_truncates_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut sink = DirectorySink::create(dir.path(), 10).unwrap();
            sink.accept(&FlushRecord::new(0, 5, 10, String::new())).unwrap();
        }
        let _sink = DirectorySink::create(dir.path(), 10).unwrap();
        let full = fs::read_to_string(dir.path().join("full_ops.txt")).unwrap();
        assert_eq!(full, "");
    }

    #[test]
    fn test_create_fails_under_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let err = DirectorySink::create(blocker.join("out"), 10).err().unwrap();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
