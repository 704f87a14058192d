//! Append-only trace file with size-based rotation.
//!
//! Keeps the trace file from growing without bound: once it passes the size
//! threshold it is shifted into a numbered backup (`ztube-otlp.json.1` is
//! the newest) and a fresh file is started. Backups beyond the retention
//! count fall off the end of the shift.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of numbered backup files to retain.
const MAX_BACKUPS: u32 = 3;

/// Thread-safe appender for the OTLP trace file.
///
/// The file handle is opened lazily on the first append and dropped whenever
/// a rotation happens. A `Mutex` guards the handle; exports can arrive from
/// any thread the OpenTelemetry SDK runs them on.
pub struct TraceLog {
    path: PathBuf,
    handle: Mutex<Option<File>>,
}

impl TraceLog {
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            handle: Mutex::new(None),
        }
    }

    /// Appends one line to the trace file, rotating first if it has grown
    /// past the size threshold. The line is flushed to disk immediately.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors (permissions, disk full) or if the lock
    /// was poisoned by a panicking writer.
    pub fn append(&self, line: &str) -> std::io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| {
                std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("trace log lock poisoned: {e}"),
                )
            })?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.as_mut() {
            Some(file) => file,
            None => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?;
                handle.insert(file)
            }
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > MAX_FILE_SIZE_BYTES)
    }

    /// Shifts backups up by one slot and moves the current file into slot 1.
    ///
    /// The oldest backup (slot `MAX_BACKUPS`) is deleted before the shift;
    /// missing intermediate slots are skipped without error.
    fn rotate(&self) -> std::io::Result<()> {
        let _ = fs::remove_file(self.backup_path(MAX_BACKUPS));

        for slot in (1..MAX_BACKUPS).rev() {
            let from = self.backup_path(slot);
            if from.exists() {
                fs::rename(&from, self.backup_path(slot + 1))?;
            }
        }

        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }

        Ok(())
    }

    fn backup_path(&self, slot: u32) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{slot}"));
        PathBuf::from(name)
    }
}

impl std::fmt::Debug for TraceLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceLog")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines_to_the_trace_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let log = TraceLog::new(path.clone());

        log.append("{\"a\":1}").unwrap();
        log.append("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotation_shifts_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");

        fs::write(&path, "current").unwrap();
        fs::write(dir.path().join("trace.json.1"), "one").unwrap();
        fs::write(dir.path().join("trace.json.2"), "two").unwrap();
        fs::write(dir.path().join("trace.json.3"), "three").unwrap();

        let log = TraceLog::new(path.clone());
        log.rotate().unwrap();

        assert!(!path.exists());
        assert_eq!(fs::read_to_string(dir.path().join("trace.json.1")).unwrap(), "current");
        assert_eq!(fs::read_to_string(dir.path().join("trace.json.2")).unwrap(), "one");
        assert_eq!(fs::read_to_string(dir.path().join("trace.json.3")).unwrap(), "two");
    }
}
