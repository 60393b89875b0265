//! # Logger Registry
//!
//! The fixed, ordered list of engine-visible loggers. The order is
//! load-bearing: a logger's position is its bit position in the level word
//! and the index the native engine passes to `emit`, so both sides must be
//! built against the same registry. Any change to its size or order is a
//! breaking protocol change.

use crate::codec::{CodecError, MAX_LOGGERS};

/// Immutable registry of logger names, constructed once at engine startup.
///
/// Capacity against the level word is checked here rather than at encode
/// time, so a misconfigured registry fails before the engine ever runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerRegistry {
    names: Vec<String>,
}

impl LoggerRegistry {
    pub fn new(names: Vec<String>) -> Result<Self, CodecError> {
        if names.len() > MAX_LOGGERS {
            return Err(CodecError::RegistryTooLarge { count: names.len() });
        }
        Ok(Self { names })
    }

    /// The registry the engine is built against by default: the SQL logger
    /// for query execution and the HOST logger for everything else.
    pub fn engine_default() -> Self {
        Self::new(vec!["SQL".to_string(), "HOST".to_string()])
            .expect("default registry fits the level word")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
