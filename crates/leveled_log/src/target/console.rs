use std::{
    io::{self, Write},
    sync::Mutex,
};

use super::LogTarget;
use crate::Level;

/// Writes log lines to standard output.
#[derive(Debug)]
pub struct ConsoleTarget {
    threshold: Level,
    lock: Mutex<()>,
}

impl ConsoleTarget {
    /// Creates a console target accepting records at or above `threshold`.
    pub fn new(threshold: Level) -> Self {
        Self {
            threshold,
            lock: Mutex::new(()),
        }
    }
}

impl LogTarget for ConsoleTarget {
    fn threshold(&self) -> Level {
        self.threshold
    }

    fn append(&self, line: &str) {
        let _guard = super::lock(&self.lock);

        // A closed or broken stdout leaves nowhere to report the failure.
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(line.as_bytes());
        let _ = stdout.flush();
    }
}
