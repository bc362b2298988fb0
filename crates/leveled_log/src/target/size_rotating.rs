use std::{
    ffi::OsString,
    fs,
    io,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::Mutex,
};

use super::{LogTarget, TargetError};
use crate::Level;

/// Appends to a single file and shifts it into numbered backups once it would grow past a
/// byte limit.
///
/// With `max_files = k` the target keeps at most `k` files: the live file `path` and the
/// backups `path.1` (newest) to `path.{k-1}` (oldest). Rotation happens lazily, right before
/// the write that would push the live file over the limit; a single line larger than the
/// limit still lands in the live file.
#[derive(Debug)]
pub struct SizeRotatingFileTarget {
    threshold: Level,
    limit_bytes: u64,
    max_files: NonZeroUsize,
    path: PathBuf,
    lock: Mutex<()>,
}

impl SizeRotatingFileTarget {
    /// Creates a target writing to `path`, rotating when the file would exceed `limit_bytes`
    /// and keeping at most `max_files` files in total.
    pub fn new(
        threshold: Level,
        limit_bytes: u64,
        max_files: NonZeroUsize,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            threshold,
            limit_bytes,
            max_files,
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the live log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the numbered backup `index`, e.g. `app.log.2` for index 2.
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn write_line(&self, line: &str) -> Result<(), TargetError> {
        // A missing or unreadable file counts as empty.
        let current_size = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        let incoming = u64::try_from(line.len()).unwrap_or(u64::MAX);

        if current_size.saturating_add(incoming) > self.limit_bytes {
            self.rotate()?;
        }

        super::append_to_file(&self.path, line)
    }

    fn rotate(&self) -> Result<(), TargetError> {
        let max_files = self.max_files.get();

        if max_files == 1 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(max_files - 1))?;
        for index in (1..max_files - 1).rev() {
            rename_if_exists(&self.backup_path(index), &self.backup_path(index + 1))?;
        }
        rename_if_exists(&self.path, &self.backup_path(1))
    }
}

impl LogTarget for SizeRotatingFileTarget {
    fn threshold(&self) -> Level {
        self.threshold
    }

    fn append(&self, line: &str) {
        let _guard = super::lock(&self.lock);

        if let Err(error) = self.write_line(line) {
            super::report("SizeRotatingFileTarget", &error);
        }
    }
}

fn rename_if_exists(from: &Path, to: &Path) -> Result<(), TargetError> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(TargetError::Rotate {
            path: from.to_path_buf(),
            source,
        }),
    }
}

fn remove_if_exists(path: &Path) -> Result<(), TargetError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(TargetError::Rotate {
            path: path.to_path_buf(),
            source,
        }),
    }
}
