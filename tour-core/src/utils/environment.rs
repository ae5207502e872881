#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the
/// tour construction and selection algorithms.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,

    /// Specifies whether independent computations (e.g. a tour per depot) can run in parallel.
    pub is_parallel: bool,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(logger: InfoLogger, is_parallel: bool) -> Self {
        Self { logger, is_parallel }
    }

    /// Creates an instance of `Environment` which discards all log messages.
    pub fn silent() -> Self {
        Self::new(Arc::new(|_: &str| {}), false)
    }

    /// Sends a message to the logger.
    pub fn log(&self, message: &str) {
        (self.logger)(message)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg: &str| println!("{msg}")), false)
    }
}
