//! Severity levels and the threshold comparison used to filter log records.

use std::{fmt, str::FromStr};

/// Severity of a log record, also used as the minimum threshold of a target.
///
/// Levels are totally ordered: `All < Trace < Debug < Info < Warn < Error < Fatal < Off`.
/// `All` as a threshold lets every record through, `Off` as a threshold silences the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Lowest possible threshold.
    All,

    /// Fine-grained tracing output.
    Trace,

    /// Debugging output.
    Debug,

    /// Informational messages.
    Info,

    /// Warnings.
    Warn,

    /// Errors.
    Error,

    /// Unrecoverable errors, logged right before the process exits.
    Fatal,

    /// Highest possible threshold.
    Off,
}

/// Returned by [`Level::from_str`] when a name matches no level.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level `{0}`")]
pub struct ParseLevelError(String);

impl Level {
    /// All levels, in ascending order.
    pub const ALL_LEVELS: [Self; 8] = [
        Self::All,
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Off,
    ];

    /// Upper-case name of the level, as written into log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Off => "OFF",
        }
    }

    /// Level name wrapped in an ANSI color escape sequence.
    pub const fn colored_name(self) -> &'static str {
        // 31: red, 32: green, 33: yellow, 37: gray, 00/0: reset
        match self {
            Self::All => "ALL",
            Self::Trace => "\x1b[37mTRACE\x1b[0m",
            Self::Debug => "\x1b[00mDEBUG\x1b[0m",
            Self::Info => "\x1b[32mINFO\x1b[0m",
            Self::Warn => "\x1b[33mWARN\x1b[0m",
            Self::Error => "\x1b[31mERROR\x1b[0m",
            Self::Fatal => "\x1b[31mFATAL\x1b[0m",
            Self::Off => "OFF",
        }
    }

    /// Returns `true` if a record at this level passes the given threshold.
    ///
    /// ```
    /// use leveled_log::Level;
    ///
    /// assert!(Level::Error.is_enabled_for(Level::Info));
    /// assert!(!Level::Debug.is_enabled_for(Level::Info));
    /// assert!(!Level::Fatal.is_enabled_for(Level::Off));
    /// ```
    pub fn is_enabled_for(self, threshold: Self) -> bool {
        self >= threshold
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_LEVELS
            .iter()
            .copied()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(feature = "tracing")]
impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Self::Trace,
            tracing::Level::DEBUG => Self::Debug,
            tracing::Level::INFO => Self::Info,
            tracing::Level::WARN => Self::Warn,
            _ => Self::Error,
        }
    }
}
