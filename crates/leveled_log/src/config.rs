//! Construction parameters for a [`Logger`][crate::Logger] built by
//! [`Logger::from_config`][crate::Logger::from_config] or the [`Registry`][crate::Registry].

use std::{num::NonZeroUsize, path::PathBuf};

use crate::Level;

/// Configuration for a logger writing to the console and one rotated log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Minimum level for both the console and the file target.
    pub level: Level,

    /// How the log file is laid out and rotated.
    pub rotation: RotationPolicy,

    /// If `true`, level names are wrapped in ANSI color escape sequences.
    pub colored_level_names: bool,
}

/// Layout and rotation strategy of the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationPolicy {
    /// One file per day at `<directory>/<MM>/<MM><DD>.log`.
    Daily {
        /// Base directory holding the per-month directories.
        directory: PathBuf,
    },

    /// A single file shifted into numbered backups when it would exceed `limit_bytes`.
    Size {
        /// Path of the live log file; backups get a `.1`, `.2`, ... suffix.
        path: PathBuf,

        /// Size the live file should not grow past.
        limit_bytes: u64,

        /// Maximum number of files kept, the live file included.
        max_files: NonZeroUsize,
    },
}

impl LoggerConfig {
    /// Configuration for a daily-partitioned log below `directory`, with plain level names.
    pub fn daily(level: Level, directory: impl Into<PathBuf>) -> Self {
        Self {
            level,
            rotation: RotationPolicy::Daily {
                directory: directory.into(),
            },
            colored_level_names: false,
        }
    }

    /// Configuration for a size-rotated log at `path`, with plain level names.
    pub fn size(
        level: Level,
        path: impl Into<PathBuf>,
        limit_bytes: u64,
        max_files: NonZeroUsize,
    ) -> Self {
        Self {
            level,
            rotation: RotationPolicy::Size {
                path: path.into(),
                limit_bytes,
                max_files,
            },
            colored_level_names: false,
        }
    }

    /// Sets whether level names are colored.
    #[must_use]
    pub fn with_colored_level_names(mut self, colored: bool) -> Self {
        self.colored_level_names = colored;
        self
    }
}
