//! Per-job outcome log with size-based rotation.
//!
//! # Responsibility
//! - Append timestamped, line-oriented outcome records for one scheduled job.
//! - Rotate an oversized log to a timestamped backup before a run appends.
//!
//! # Invariants
//! - The sink is opened once per job invocation and flushed on close.
//! - Rotation failure is logged and non-fatal; the run proceeds on the
//!   original (oversized) file.
//! - Append failures never panic a job.

use chrono::Local;
use log::{error, info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only, timestamp-prefixed job log file.
pub struct JobLog {
    path: PathBuf,
    file: File,
}

impl JobLog {
    /// Opens (creating if needed) the log at `path`, rotating first when the
    /// existing file exceeds `max_bytes`.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64) -> io::Result<Self> {
        let path = path.into();
        rotate_if_oversized(&path, max_bytes);

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn info(&mut self, message: &str) {
        self.append("INFO", message);
        info!("{message}");
    }

    pub fn warn(&mut self, message: &str) {
        self.append("WARNING", message);
        warn!("{message}");
    }

    pub fn error(&mut self, message: &str) {
        self.append("ERROR", message);
        error!("{message}");
    }

    /// Forces buffered lines to disk.
    pub fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }

    fn append(&mut self, level: &str, message: &str) {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Err(err) = writeln!(self.file, "{stamp} - {level} - {message}") {
            error!(
                "event=joblog_append module=jobs status=error path={} error={err}",
                self.path.display()
            );
        }
    }
}

impl Drop for JobLog {
    fn drop(&mut self) {
        let _ = self.file.flush();
    }
}

/// Renames `path` to a timestamp-suffixed backup when it exceeds `max_bytes`.
///
/// A missing file or a failed rename leaves the run on the original path.
fn rotate_if_oversized(path: &Path, max_bytes: u64) {
    let Ok(metadata) = fs::metadata(path) else {
        return;
    };
    if metadata.len() <= max_bytes {
        return;
    }

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup = path.with_extension(format!("{stamp}.log"));
    match fs::rename(path, &backup) {
        Ok(()) => info!(
            "event=joblog_rotate module=jobs status=ok from={} to={}",
            path.display(),
            backup.display()
        ),
        Err(err) => error!(
            "event=joblog_rotate module=jobs status=error path={} error={err}",
            path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::JobLog;
    use std::fs;

    #[test]
    fn lines_are_timestamp_prefixed_with_level_markers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.txt");

        let mut log = JobLog::open(&path, 1024).unwrap();
        log.info("first line");
        log.warn("second line");
        log.error("third line");
        log.flush().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(" - INFO - first line"));
        assert!(lines[1].ends_with(" - WARNING - second line"));
        assert!(lines[2].ends_with(" - ERROR - third line"));
        // Prefix shape: `YYYY-MM-DD HH:MM:SS`.
        assert_eq!(lines[0].as_bytes()[4], b'-');
        assert_eq!(lines[0].as_bytes()[10], b' ');
        assert_eq!(lines[0].as_bytes()[13], b':');
    }

    #[test]
    fn open_appends_to_an_existing_file_under_the_ceiling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.txt");
        fs::write(&path, "existing\n").unwrap();

        let mut log = JobLog::open(&path, 1024).unwrap();
        log.info("appended");
        log.flush().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing\n"));
        assert!(content.contains(" - INFO - appended"));
    }
}
