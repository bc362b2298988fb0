use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
    time::{Duration, SystemTime},
};

use time::OffsetDateTime;

use super::{LogTarget, TargetError};
use crate::Level;

/// Files last modified longer ago than this are deleted before being written to again.
pub const RETENTION: Duration = Duration::from_secs(360 * 24 * 60 * 60);

/// Appends to one file per calendar day, grouped into one directory per month.
///
/// Lines logged on March 5th land in `<directory>/03/0305.log`. The path is recomputed from
/// the local wall-clock time on every append, and the file is opened and closed each time.
/// Since the layout carries no year, a file left over from a previous year is removed
/// once it is older than [`RETENTION`].
#[derive(Debug)]
pub struct DailyFileTarget {
    threshold: Level,
    directory: PathBuf,
    lock: Mutex<()>,
}

impl DailyFileTarget {
    /// Creates a target writing below `directory`.
    pub fn new(threshold: Level, directory: impl Into<PathBuf>) -> Self {
        Self {
            threshold,
            directory: directory.into(),
            lock: Mutex::new(()),
        }
    }

    /// Base directory holding the per-month directories.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the file receiving lines logged at `at`.
    pub fn path_for(&self, at: OffsetDateTime) -> PathBuf {
        let month = u8::from(at.month());
        self.month_directory(at)
            .join(format!("{month:02}{:02}.log", at.day()))
    }

    fn month_directory(&self, at: OffsetDateTime) -> PathBuf {
        self.directory.join(format!("{:02}", u8::from(at.month())))
    }

    pub(crate) fn write_line_at(&self, line: &str, now: OffsetDateTime) -> Result<(), TargetError> {
        let directory = self.month_directory(now);
        fs::create_dir_all(&directory).map_err(|source| TargetError::CreateDirectory {
            path: directory.clone(),
            source,
        })?;

        let path = self.path_for(now);
        if is_expired(&path, SystemTime::from(now)) {
            // Failing to prune only means the stale lines stay; the write goes ahead.
            let _ = fs::remove_file(&path);
        }

        super::append_to_file(&path, line)
    }
}

impl LogTarget for DailyFileTarget {
    fn threshold(&self) -> Level {
        self.threshold
    }

    fn append(&self, line: &str) {
        let _guard = super::lock(&self.lock);

        if let Err(error) = self.write_line_at(line, crate::local_now()) {
            super::report("DailyFileTarget", &error);
        }
    }
}

fn is_expired(path: &Path, now: SystemTime) -> bool {
    fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .ok()
        .and_then(|modified| now.duration_since(modified).ok())
        .is_some_and(|age| age > RETENTION)
}
