//! Size-capped append-only file with numbered backups.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;
const DEFAULT_BACKUPS: usize = 3;

/// Appends lines to a file, rotating it once it grows past a size limit.
///
/// On rotation `name` becomes `name.1`, `name.1` becomes `name.2`, and so on;
/// the backup beyond the retention count is removed.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Rotates at 10 MB and keeps three backups.
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    pub fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` and a newline. The file is opened on first use.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if rotating, opening or writing fails,
    /// or if a previous writer panicked while holding the lock.
    pub fn append(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        let oversized = fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes);
        if oversized {
            *handle = None;
            self.shift_backups()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }

        if let Some(file) = handle.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn shift_backups(&self) -> io::Result<()> {
        if self.backups == 0 {
            return remove_if_present(&self.path);
        }

        remove_if_present(&self.backup_path(self.backups))?;
        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::new(path.clone());

        file.append("{\"a\":1}").unwrap();
        file.append("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_past_the_limit_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::with_limits(path.clone(), 4, 2);

        for line in ["first", "second", "third", "fourth"] {
            file.append(line).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "fourth\n");
        assert_eq!(fs::read_to_string(file.backup_path(1)).unwrap(), "third\n");
        assert_eq!(fs::read_to_string(file.backup_path(2)).unwrap(), "second\n");
        assert!(!file.backup_path(3).exists());
    }

    #[test]
    fn zero_backups_truncates_instead() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::with_limits(path.clone(), 4, 0);

        file.append("first").unwrap();
        file.append("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        assert!(!file.backup_path(1).exists());
    }
}
