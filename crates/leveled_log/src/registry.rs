//! Holder of the process-wide [`Logger`].
//!
//! The owning process bootstraps the logger once with [`init_logger`]; every other component
//! fetches it with [`logger`]. Fetching before initialization is a programming error and
//! terminates the process.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Logger, LoggerConfig};

static GLOBAL: Registry = Registry::new();

/// Holds at most one configured [`Logger`].
///
/// A `Registry` is empty when created. The first call to [`Registry::initialize_or_get`]
/// builds and stores a logger, later calls hand out the same instance unless `force` is set,
/// in which case the stored logger is replaced. Handles obtained earlier keep working with the
/// logger they were given.
#[derive(Debug, Default)]
pub struct Registry {
    instance: Mutex<Option<Arc<Logger>>>,
}

impl Registry {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self {
            instance: Mutex::new(None),
        }
    }

    /// Returns the stored logger, building it from `config` first if there is none or if
    /// `force` is set.
    ///
    /// The built logger has a console target and the file target selected by
    /// `config.rotation`, both filtering at `config.level`. Racing callers never build more
    /// than one logger per initialization.
    pub fn initialize_or_get(&self, config: &LoggerConfig, force: bool) -> Arc<Logger> {
        let mut instance = self.lock();

        if let Some(logger) = instance.as_ref().filter(|_| !force) {
            return Arc::clone(logger);
        }

        let logger = Arc::new(Logger::from_config(config));
        *instance = Some(Arc::clone(&logger));
        logger
    }

    /// Returns the stored logger, if any.
    pub fn try_current(&self) -> Option<Arc<Logger>> {
        self.lock().clone()
    }

    /// Returns the stored logger.
    ///
    /// If the registry is empty, prints a diagnostic and exits the process with status 1.
    pub fn current(&self) -> Arc<Logger> {
        match self.try_current() {
            Some(logger) => logger,
            None => crate::diagnostics::abort(format_args!(
                "[ Registry ] logger is not initialized, call `init_logger` first"
            )),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<Logger>>> {
        // The stored value is only ever replaced whole, so it is consistent even after a panic.
        self.instance.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Initializes the process-wide logger, or returns the existing one unless `force` is set.
///
/// See [`Registry::initialize_or_get`].
pub fn init_logger(config: &LoggerConfig, force: bool) -> Arc<Logger> {
    GLOBAL.initialize_or_get(config, force)
}

/// Returns the process-wide logger.
///
/// Exits the process with status 1 if [`init_logger`] has not been called yet.
pub fn logger() -> Arc<Logger> {
    GLOBAL.current()
}

/// Returns the process-wide logger, or `None` before [`init_logger`] has been called.
pub fn try_logger() -> Option<Arc<Logger>> {
    GLOBAL.try_current()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::{num::NonZeroUsize, thread};

    use super::*;
    use crate::Level;

    fn config(dir: &tempfile::TempDir) -> LoggerConfig {
        LoggerConfig::size(
            Level::Info,
            dir.path().join("app.log"),
            1024,
            NonZeroUsize::new(2).unwrap(),
        )
    }

    #[test]
    fn starts_empty() {
        let registry = Registry::new();
        assert!(registry.try_current().is_none());
    }

    #[test]
    fn repeated_initialization_returns_the_same_instance() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::new();

        let first = registry.initialize_or_get(&config(&dir), false);
        let second = registry.initialize_or_get(&config(&dir), false);

        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &registry.current()));
        assert!(first.is_ready());
    }

    #[test]
    fn unforced_initialization_ignores_new_config() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::new();

        let first = registry.initialize_or_get(&config(&dir), false);
        let colored = config(&dir).with_colored_level_names(true);
        let second = registry.initialize_or_get(&colored, false);

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!second.uses_colored_level_names());
    }

    #[test]
    fn forced_initialization_replaces_the_instance() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::new();

        let first = registry.initialize_or_get(&config(&dir), false);
        let colored = config(&dir).with_colored_level_names(true);
        let replaced = registry.initialize_or_get(&colored, true);

        assert!(!Arc::ptr_eq(&first, &replaced));
        assert!(Arc::ptr_eq(&replaced, &registry.current()));
        assert!(replaced.uses_colored_level_names());
    }

    #[test]
    fn racing_initializers_share_one_instance() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::new();
        let config = config(&dir);

        let loggers: Vec<Arc<Logger>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.initialize_or_get(&config, false)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        let current = registry.current();
        assert!(loggers.iter().all(|logger| Arc::ptr_eq(logger, &current)));
    }

    #[test]
    fn standalone_loggers_are_independent_of_the_registry() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::new();

        let managed = registry.initialize_or_get(&config(&dir), false);
        let standalone = Arc::new(Logger::from_config(&config(&dir)));

        assert!(!Arc::ptr_eq(&managed, &standalone));
    }
}
