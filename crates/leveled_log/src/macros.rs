//! `format!`-style logging macros taking the logger as their first argument.

/// Logs at an explicit [`Level`][crate::Level], attributed to the macro invocation.
///
/// ```
/// use leveled_log::{Level, Logger, log};
///
/// let logger = Logger::new(false);
/// log!(logger, Level::Info, "{} + {} = {}", 1, 2, 1 + 2);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            $level,
            $crate::CallSite::new(::core::file!(), ::core::line!()),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs at [`Level::Trace`][crate::Level::Trace].
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Logs at [`Level::Debug`][crate::Level::Debug].
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Logs at [`Level::Info`][crate::Level::Info].
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Logs at [`Level::Warn`][crate::Level::Warn].
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Logs at [`Level::Error`][crate::Level::Error].
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Logs at [`Level::Fatal`][crate::Level::Fatal] and exits the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::core::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::indexing_slicing)]

    use std::num::NonZeroUsize;

    use crate::{Level, Logger, target::SizeRotatingFileTarget};

    #[test]
    fn macros_format_and_attribute_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("macros.log");
        let logger = Logger::new(false).with_target(SizeRotatingFileTarget::new(
            Level::Debug,
            1 << 20,
            NonZeroUsize::new(2).unwrap(),
            &path,
        ));

        trace!(logger, "hidden {}", 0);
        debug!(logger, "debug {}", 1);
        let info_line = line!() + 1;
        info!(logger, "info {}", 2);
        warn!(logger, "warn {}", 3);
        error!(logger, "error {}", 4);
        crate::log!(logger, Level::Fatal, "fatal without exiting");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains(" DEBUG debug 1 [macros.rs:"));
        assert!(lines[1].ends_with(&format!(" INFO  info 2 [macros.rs:{info_line}]")));
        assert!(lines[2].contains(" WARN  warn 3 "));
        assert!(lines[3].contains(" ERROR error 4 "));
        assert!(lines[4].contains(" FATAL fatal without exiting "));
    }
}
