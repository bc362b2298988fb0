//! Fallback channel for problems inside the logging machinery itself.
//!
//! Diagnostics go straight to standard output and never through a [`Logger`][crate::Logger],
//! so a broken destination cannot feed back into the target that reported it.

use std::fmt;

/// Prints a one-line warning about the logging subsystem to standard output.
#[allow(clippy::print_stdout)]
pub(crate) fn warn(message: fmt::Arguments<'_>) {
    println!("[WARN] {}: {message}", env!("CARGO_PKG_NAME"));
}

/// Prints a one-line error and terminates the process with a failure status.
#[allow(clippy::print_stdout)]
pub(crate) fn abort(message: fmt::Arguments<'_>) -> ! {
    println!("[FATAL] {}: {message}", env!("CARGO_PKG_NAME"));
    std::process::exit(1)
}
