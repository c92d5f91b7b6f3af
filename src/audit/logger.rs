//! Append-only JSONL audit log
//!
//! One [`AuditEntry`] per line. Reading streams the file, so showing the
//! last few entries never holds the whole history in memory.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{SpendVistaError, SpendVistaResult};

use super::entry::AuditEntry;

pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry
    ///
    /// The line is serialized before the file is opened, so a failed
    /// serialization leaves the log untouched.
    pub fn log(&self, entry: &AuditEntry) -> SpendVistaResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| SpendVistaError::Json(format!("Failed to encode audit entry: {}", e)))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error("open", e))?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| self.io_error("append to", e))
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> SpendVistaResult<Vec<AuditEntry>> {
        let mut entries = Vec::new();
        self.scan(|entry| entries.push(entry))?;
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> SpendVistaResult<Vec<AuditEntry>> {
        let mut tail = VecDeque::new();
        if count == 0 {
            return Ok(Vec::new());
        }

        self.scan(|entry| {
            if tail.len() == count {
                tail.pop_front();
            }
            tail.push_back(entry);
        })?;
        Ok(tail.into())
    }

    /// Feed each entry to `visit`; a missing log has no entries
    fn scan(&self, mut visit: impl FnMut(AuditEntry)) -> SpendVistaResult<()> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(self.io_error("open", e)),
        };

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error("read", e))?;
            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                SpendVistaError::Json(format!(
                    "{} line {}: {}",
                    self.path.display(),
                    index + 1,
                    e
                ))
            })?;
            visit(entry);
        }
        Ok(())
    }

    fn io_error(&self, action: &str, err: io::Error) -> SpendVistaError {
        SpendVistaError::Io(format!(
            "Failed to {} audit log {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}
