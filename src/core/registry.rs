//! Name-keyed registry of live loggers

use super::{error::Result, logger::Logger};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Thread-safe table of loggers keyed by name.
///
/// Registering under an existing name replaces the entry; the replaced
/// logger stays alive for as long as someone still holds it.
#[derive(Default)]
pub struct Registry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `logger` under its own name, returning the entry it replaced
    pub fn register(&self, logger: Arc<Logger>) -> Option<Arc<Logger>> {
        let name = logger.name().to_string();
        self.loggers.write().insert(name, logger)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    pub fn remove(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.write().remove(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Flush every registered logger, returning the first failure
    pub fn flush_all(&self) -> Result<()> {
        // Snapshot first so slow sinks never block registration
        let loggers: Vec<Arc<Logger>> = self.loggers.read().values().cloned().collect();

        let mut first_error = None;
        for logger in loggers {
            if let Err(e) = logger.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
