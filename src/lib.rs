//! # Engine Log Bridge
//!
//! Host-side logging bridge for an embedded native execution engine.
//!
//! The engine runs on its own worker threads inside the host process, and a
//! boundary call into the host is expensive relative to a typical log
//! statement. Instead of querying the host per statement, the engine caches
//! a single `u64` holding every registered logger's effective threshold,
//! three bits per logger, and decides enablement with a local bit test. Only
//! statements that pass the test cross the boundary, through a narrow,
//! re-validated emission path that hands the formatted message to the host's
//! logging backend.
//!
//! - [`codec`] packs and unpacks the level word.
//! - [`registry`] fixes the ordered logger table both sides are built
//!   against.
//! - [`bridge`] exposes the two boundary operations, `refresh_levels` and
//!   `emit`.
//! - [`ffi`] exports them over the C ABI for the engine to link against.

pub mod backend;
pub mod bridge;
pub mod codec;
pub mod config;
pub mod ffi;
pub mod metrics;
pub mod registry;
pub mod severity;

pub use backend::{FacadeBackend, LogBackend};
pub use bridge::{BridgeError, LogBridge};
pub use codec::{decode, encode, statement_enabled, CodecError, MAX_LOGGERS};
pub use config::{parse_bridge_config, BridgeConfig, ConfigError};
pub use registry::LoggerRegistry;
pub use severity::Severity;
