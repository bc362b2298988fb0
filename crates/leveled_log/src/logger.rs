//! The [`Logger`], which formats records into lines and fans them out to its targets.

use std::{
    fmt::{self, Write as _},
    panic::Location,
    path::Path,
};

use time::OffsetDateTime;

use crate::{
    Level,
    config::{LoggerConfig, RotationPolicy},
    target::{ConsoleTarget, DailyFileTarget, LogTarget, SizeRotatingFileTarget},
};

/// Source location a log line is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> CallSite<'a> {
    /// Creates a call site from a source file path and line number.
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Placeholder used when the call site is not known.
    pub const fn unknown() -> Self {
        Self::new("???", 0)
    }

    /// Source file path as given.
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Line number, `0` when unknown.
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Final component of the source file path.
    pub fn file_name(&self) -> &'a str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

impl CallSite<'static> {
    /// The location of the caller of the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl<'a> From<&'a Location<'a>> for CallSite<'a> {
    fn from(location: &'a Location<'a>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Displays its parts back to back.
struct Concat<'a>(&'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|part| fmt::Display::fmt(part, f))
    }
}

/// Formats log records and dispatches them to an ordered list of [`LogTarget`]s.
///
/// Every target applies its own threshold, so one logger can, for example, print warnings to
/// the console while keeping a debug log on disk. Each line has the form
///
/// ```text
/// [2024-03-05 10:20:30] INFO  service started [main.rs:12]
/// ```
///
/// The leveled methods are `#[track_caller]`, so the line is attributed to the code calling
/// them. The `*_parts` variants concatenate their arguments instead of formatting them.
#[derive(Debug)]
pub struct Logger {
    targets: Vec<Box<dyn LogTarget>>,
    colored_level_names: bool,
}

impl Logger {
    /// Creates a logger without any targets.
    ///
    /// The logger becomes ready once the first target is added; logging before that only
    /// produces a diagnostic.
    pub fn new(colored_level_names: bool) -> Self {
        Self {
            targets: Vec::new(),
            colored_level_names,
        }
    }

    /// Builds a ready logger with a console target and the file target selected by `config`,
    /// both using the configured threshold.
    pub fn from_config(config: &LoggerConfig) -> Self {
        let mut logger = Self::new(config.colored_level_names);
        logger.add_target(ConsoleTarget::new(config.level));

        match &config.rotation {
            RotationPolicy::Daily { directory } => {
                logger.add_target(DailyFileTarget::new(config.level, directory.clone()));
            }
            RotationPolicy::Size {
                path,
                limit_bytes,
                max_files,
            } => {
                logger.add_target(SizeRotatingFileTarget::new(
                    config.level,
                    *limit_bytes,
                    *max_files,
                    path.clone(),
                ));
            }
        }

        logger
    }

    /// Appends a target; lines are dispatched to targets in insertion order.
    pub fn add_target(&mut self, target: impl LogTarget + 'static) {
        self.targets.push(Box::new(target));
    }

    /// Builder-style variant of [`Logger::add_target`].
    #[must_use]
    pub fn with_target(mut self, target: impl LogTarget + 'static) -> Self {
        self.add_target(target);
        self
    }

    /// Returns `true` once at least one target is attached.
    pub fn is_ready(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Returns `true` if at least one target accepts records at `level`.
    pub fn is_enabled(&self, level: Level) -> bool {
        self.targets.iter().any(|target| target.is_enabled(level))
    }

    /// Whether level names are written with ANSI colors.
    pub fn uses_colored_level_names(&self) -> bool {
        self.colored_level_names
    }

    /// Formats a record attributed to `call_site` and hands it to every enabled target.
    ///
    /// This is the entry point for wrappers that attribute lines to their own callers.
    pub fn log(&self, level: Level, call_site: CallSite<'_>, message: fmt::Arguments<'_>) {
        let line = self.format_line(crate::local_now(), level, call_site, message);
        self.dispatch(level, &line);
    }

    /// Renders a complete line, including the trailing newline.
    pub(crate) fn format_line(
        &self,
        now: OffsetDateTime,
        level: Level,
        call_site: CallSite<'_>,
        message: fmt::Arguments<'_>,
    ) -> String {
        let mut line = String::with_capacity(128);

        // Writing into a `String` cannot fail.
        let _ = write!(
            line,
            "[{:04}-{:02}-{:02} {:02}:{:02}:{:02}] ",
            now.year(),
            u8::from(now.month()),
            now.day(),
            now.hour(),
            now.minute(),
            now.second(),
        );
        if self.colored_level_names {
            let _ = write!(line, "{:<14} ", level.colored_name());
        } else {
            let _ = write!(line, "{:<5} ", level.name());
        }
        let _ = line.write_fmt(message);
        let _ = writeln!(line, " [{}:{}]", call_site.file_name(), call_site.line());

        line
    }

    fn dispatch(&self, level: Level, line: &str) {
        if !self.is_ready() {
            crate::diagnostics::warn(format_args!(
                "[ Logger ] no log target is configured, lines are not persisted"
            ));
        }

        for target in self.targets.iter().filter(|target| target.is_enabled(level)) {
            target.append(line);
        }
    }

    /// Logs at [`Level::Trace`].
    #[track_caller]
    pub fn trace(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Trace, CallSite::caller(), message);
    }

    /// Logs the concatenation of `parts` at [`Level::Trace`].
    #[track_caller]
    pub fn trace_parts(&self, parts: &[&dyn fmt::Display]) {
        self.log(Level::Trace, CallSite::caller(), format_args!("{}", Concat(parts)));
    }

    /// Logs at [`Level::Debug`].
    #[track_caller]
    pub fn debug(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Debug, CallSite::caller(), message);
    }

    /// Logs the concatenation of `parts` at [`Level::Debug`].
    #[track_caller]
    pub fn debug_parts(&self, parts: &[&dyn fmt::Display]) {
        self.log(Level::Debug, CallSite::caller(), format_args!("{}", Concat(parts)));
    }

    /// Logs at [`Level::Info`].
    #[track_caller]
    pub fn info(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Info, CallSite::caller(), message);
    }

    /// Logs the concatenation of `parts` at [`Level::Info`].
    #[track_caller]
    pub fn info_parts(&self, parts: &[&dyn fmt::Display]) {
        self.log(Level::Info, CallSite::caller(), format_args!("{}", Concat(parts)));
    }

    /// Logs at [`Level::Warn`].
    #[track_caller]
    pub fn warn(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Warn, CallSite::caller(), message);
    }

    /// Logs the concatenation of `parts` at [`Level::Warn`].
    #[track_caller]
    pub fn warn_parts(&self, parts: &[&dyn fmt::Display]) {
        self.log(Level::Warn, CallSite::caller(), format_args!("{}", Concat(parts)));
    }

    /// Logs at [`Level::Error`].
    #[track_caller]
    pub fn error(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Error, CallSite::caller(), message);
    }

    /// Logs the concatenation of `parts` at [`Level::Error`].
    #[track_caller]
    pub fn error_parts(&self, parts: &[&dyn fmt::Display]) {
        self.log(Level::Error, CallSite::caller(), format_args!("{}", Concat(parts)));
    }

    /// Logs at [`Level::Fatal`], then exits the process with status 1.
    #[track_caller]
    pub fn fatal(&self, message: fmt::Arguments<'_>) -> ! {
        self.log(Level::Fatal, CallSite::caller(), message);
        std::process::exit(1)
    }

    /// Logs the concatenation of `parts` at [`Level::Fatal`], then exits the process with
    /// status 1.
    #[track_caller]
    pub fn fatal_parts(&self, parts: &[&dyn fmt::Display]) -> ! {
        self.log(Level::Fatal, CallSite::caller(), format_args!("{}", Concat(parts)));
        std::process::exit(1)
    }
}
