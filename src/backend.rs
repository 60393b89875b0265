//! # Host Backend Seam
//!
//! The bridge never owns appenders, formatting, or persistence; it reads
//! effective thresholds from, and forwards accepted records to, a
//! `LogBackend`. Production deployments use [`FacadeBackend`], which routes
//! records through the `log` facade with the logger's registry name as the
//! record target and keeps per-logger thresholds in atomics so they can be
//! adjusted while the engine runs.

use crate::registry::LoggerRegistry;
use crate::severity::Severity;
use std::sync::atomic::{AtomicU8, Ordering};

/// The host logging backend as the bridge sees it.
///
/// Implementations must be safe to call from any number of engine worker
/// threads concurrently; the bridge adds no locking of its own.
pub trait LogBackend: Send + Sync {
    /// The effective threshold of the logger at `index`, after whatever
    /// hierarchy resolution the backend performs. Unknown indices report
    /// `Off`.
    fn effective_level(&self, index: usize) -> Severity;

    /// Writes one already-validated, already-formatted record to the logger
    /// at `index`. The bridge guarantees `index` is a registry index and
    /// `level` is a statement severity.
    fn write(&self, index: usize, level: Severity, message: &str);
}

/// Backend over the `log` facade with dynamically adjustable per-logger
/// thresholds.
pub struct FacadeBackend {
    names: Vec<String>,
    thresholds: Vec<AtomicU8>,
}

impl FacadeBackend {
    /// Builds a backend for `registry` with every logger at `initial`.
    pub fn new(registry: &LoggerRegistry, initial: Severity) -> Self {
        Self {
            names: registry.names().map(str::to_string).collect(),
            thresholds: (0..registry.len())
                .map(|_| AtomicU8::new(initial.ordinal()))
                .collect(),
        }
    }

    /// Builds a backend with the initial threshold taken from the `RUST_LOG`
    /// environment variable, defaulting to `Info`.
    pub fn from_env(registry: &LoggerRegistry) -> Self {
        Self::new(registry, env_default_level())
    }

    /// Adjusts one logger's threshold. Returns `false` for an unknown index.
    pub fn set_level(&self, index: usize, level: Severity) -> bool {
        match self.thresholds.get(index) {
            Some(slot) => {
                slot.store(level.ordinal(), Ordering::Relaxed);
                true
            }
            None => false,
        }
    }
}

impl LogBackend for FacadeBackend {
    fn effective_level(&self, index: usize) -> Severity {
        self.thresholds
            .get(index)
            .and_then(|slot| Severity::from_ordinal(slot.load(Ordering::Relaxed)))
            .unwrap_or(Severity::Off)
    }

    fn write(&self, index: usize, level: Severity, message: &str) {
        let Some(target) = self.names.get(index).map(String::as_str) else {
            return;
        };
        // The facade has no FATAL; those records go out at Error with the
        // original severity prefixed so it survives the mapping.
        match level {
            Severity::Trace => log::log!(target: target, log::Level::Trace, "{message}"),
            Severity::Debug => log::log!(target: target, log::Level::Debug, "{message}"),
            Severity::Info => log::log!(target: target, log::Level::Info, "{message}"),
            Severity::Warn => log::log!(target: target, log::Level::Warn, "{message}"),
            Severity::Error => log::log!(target: target, log::Level::Error, "{message}"),
            Severity::Fatal => log::log!(target: target, log::Level::Error, "FATAL {message}"),
            Severity::All | Severity::Off => {}
        }
    }
}

fn env_default_level() -> Severity {
    match std::env::var("RUST_LOG").ok().as_deref() {
        Some("trace") => Severity::Trace,
        Some("debug") => Severity::Debug,
        Some("info") => Severity::Info,
        Some("warn") => Severity::Warn,
        Some("error") => Severity::Error,
        Some("off") => Severity::Off,
        _ => Severity::Info,
    }
}
