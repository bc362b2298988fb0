//! Log destinations.
//!
//! A [`LogTarget`] owns its own threshold and serializes its own writes, so a [`Logger`] can
//! be shared between threads without any locking of its own.
//!
//! [`Logger`]: crate::Logger

mod console;
mod daily;
mod size_rotating;

use std::{
    fmt,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};

pub use self::{
    console::ConsoleTarget,
    daily::{DailyFileTarget, RETENTION},
    size_rotating::SizeRotatingFileTarget,
};
use crate::Level;

/// A destination for fully formatted log lines.
///
/// Implementations must be safe to call from several threads at once. Failures are reported
/// on the diagnostic channel and the line is dropped; [`LogTarget::append`] never fails from
/// the caller's point of view.
pub trait LogTarget: fmt::Debug + Send + Sync {
    /// Minimum level accepted by this target.
    fn threshold(&self) -> Level;

    /// Returns `true` if records at `level` should be appended to this target.
    fn is_enabled(&self, level: Level) -> bool {
        level.is_enabled_for(self.threshold())
    }

    /// Writes `line` to the destination as-is.
    fn append(&self, line: &str);
}

/// Errors raised while writing to a file-backed target.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// The directory holding the log file could not be created.
    #[error("failed to create directory `{}`: {source}", path.display())]
    CreateDirectory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The log file could not be opened for appending.
    #[error("failed to open `{}`: {source}", path.display())]
    Open {
        /// File that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The log line could not be written.
    #[error("failed to write to `{}`: {source}", path.display())]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A log file could not be moved out of the way during rotation.
    #[error("failed to rotate `{}`: {source}", path.display())]
    Rotate {
        /// File that could not be renamed or removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Acquires a target's write lock.
///
/// The lock guards no data, only the destination, so a poisoned lock is still usable.
pub(crate) fn lock(mutex: &Mutex<()>) -> MutexGuard<'_, ()> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Opens `path` for appending (creating it if needed), writes `line` in a single call and
/// closes the file again.
pub(crate) fn append_to_file(path: &Path, line: &str) -> Result<(), TargetError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| TargetError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    file.write_all(line.as_bytes())
        .map_err(|source| TargetError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Logs a target failure on the diagnostic channel.
pub(crate) fn report(target: &str, error: &TargetError) {
    crate::diagnostics::warn(format_args!("[ {target} ] dropping log line: {error}"));
}
