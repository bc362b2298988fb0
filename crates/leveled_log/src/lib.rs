//! `leveled_log` writes timestamped, leveled log lines to the console and to rotated log files.
//!
//! It offers:
//! - A [`Logger`] that formats records as
//!   `[YYYY-MM-DD HH:MM:SS] LEVEL message [file.rs:line]` and fans them out to its targets.
//! - Three [`LogTarget`]s: [`ConsoleTarget`], [`SizeRotatingFileTarget`] (numbered backups once
//!   a byte limit would be exceeded) and [`DailyFileTarget`] (one file per day, one directory
//!   per month).
//! - A process-wide logger, bootstrapped once with [`init_logger`] and fetched with [`logger`].
//! - With the `tracing` feature, a [`LoggerLayer`] forwarding `tracing` events to a [`Logger`].
//!
//! Every target filters on its own threshold and serializes its own writes, so loggers can be
//! shared between threads freely. I/O failures never reach the caller: the line is dropped and
//! a warning is printed to standard output.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use leveled_log::{Level, LoggerConfig, info, init_logger, logger, warn};
//!
//! let directory = std::env::temp_dir().join("leveled_log_doc");
//! std::fs::create_dir_all(&directory).expect("failed to create log directory");
//!
//! let config = LoggerConfig::size(
//!     Level::Info,
//!     directory.join("app.log"),
//!     10 * 1024 * 1024,
//!     NonZeroUsize::new(10).expect("non-zero file count"),
//! );
//! let log = init_logger(&config, false);
//!
//! log.debug(format_args!("not written, below the threshold"));
//! info!(log, "listening on port {}", 8080);
//!
//! // Elsewhere in the process
//! warn!(logger(), "cache is {}% full", 93);
//! ```

mod macros;

mod config;
mod diagnostics;
#[cfg(feature = "tracing")]
mod layer;
mod level;
mod logger;
mod registry;
mod target;

use time::OffsetDateTime;

#[cfg(feature = "tracing")]
pub use self::layer::LoggerLayer;
pub use self::{
    config::{LoggerConfig, RotationPolicy},
    level::{Level, ParseLevelError},
    logger::{CallSite, Logger},
    registry::{Registry, init_logger, logger, try_logger},
    target::{
        ConsoleTarget, DailyFileTarget, LogTarget, SizeRotatingFileTarget, TargetError,
    },
};

/// Files written by a [`DailyFileTarget`] are pruned once older than this.
pub use self::target::RETENTION as DAILY_RETENTION;

/// Current local time, or UTC when the local offset cannot be determined.
pub(crate) fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
