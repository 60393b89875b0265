//! # Log Emission Bridge
//!
//! The two operations the native engine is permitted to call:
//! `refresh_levels`, which snapshots every registered logger's effective
//! threshold into a level word the engine caches, and `emit`, which carries
//! one accepted, fully-formatted statement to the host backend.
//!
//! Both operations are stateless request/response over the immutable
//! registry, so a single bridge is shared by every engine worker thread.

use crate::backend::LogBackend;
use crate::codec;
use crate::metrics::{CONTRACT_FAULTS, EMITTED_RECORDS, REFRESH_CALLS};
use crate::registry::LoggerRegistry;
use crate::severity::Severity;
use std::sync::atomic::Ordering;
use thiserror::Error;

/// A contract violation on the emission path. Both variants mean the engine
/// and the host were built against different logger tables, which no retry
/// can repair; callers must surface the fault, not continue degraded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    #[error("logger index {index} is not a registered engine logger (registry size {registry_size})")]
    UnknownLoggerIndex { index: usize, registry_size: usize },

    #[error("level ordinal {ordinal} is not a valid statement severity")]
    UnknownLevel { ordinal: u32 },
}

pub struct LogBridge<B> {
    registry: LoggerRegistry,
    backend: B,
}

impl<B: LogBackend> LogBridge<B> {
    pub fn new(registry: LoggerRegistry, backend: B) -> Self {
        Self { registry, backend }
    }

    pub fn registry(&self) -> &LoggerRegistry {
        &self.registry
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Snapshots every registered logger's effective threshold, in registry
    /// order, into a level word. Read-only; the caller owns the returned
    /// word and decides its own refresh cadence.
    pub fn refresh_levels(&self) -> u64 {
        REFRESH_CALLS.fetch_add(1, Ordering::Relaxed);
        let levels: Vec<Severity> = (0..self.registry.len())
            .map(|index| self.backend.effective_level(index))
            .collect();
        codec::encode(&levels).expect("registry construction enforces the level word capacity")
    }

    /// Forwards one accepted statement to the backend logger at
    /// `logger_index`, message verbatim.
    ///
    /// The index and level are re-validated here regardless of any check the
    /// engine performed against its cached word; an invalid value is a
    /// fatal contract fault, never silently dropped.
    pub fn emit(
        &self,
        logger_index: usize,
        level_ordinal: u32,
        message: &str,
    ) -> Result<(), BridgeError> {
        if logger_index >= self.registry.len() {
            CONTRACT_FAULTS.fetch_add(1, Ordering::Relaxed);
            return Err(BridgeError::UnknownLoggerIndex {
                index: logger_index,
                registry_size: self.registry.len(),
            });
        }
        let level = u8::try_from(level_ordinal)
            .ok()
            .and_then(Severity::from_ordinal)
            .filter(|level| level.is_statement_level())
            .ok_or_else(|| {
                CONTRACT_FAULTS.fetch_add(1, Ordering::Relaxed);
                BridgeError::UnknownLevel {
                    ordinal: level_ordinal,
                }
            })?;
        self.backend.write(logger_index, level, message);
        EMITTED_RECORDS.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
