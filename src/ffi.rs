//! # Engine Boundary Surface
//!
//! C ABI entry points for the native execution engine. The engine links
//! against these three symbols and nothing else: one cold initialization
//! call, one threshold snapshot call whose result it caches, and one
//! emission call per accepted statement.
//!
//! Contract violations return negative status codes and are reported on
//! stderr; they indicate the engine and host were built against different
//! logger tables and must not be ignored by the caller.

use crate::backend::FacadeBackend;
use crate::bridge::{BridgeError, LogBridge};
use crate::config;
use crate::registry::LoggerRegistry;
use crate::severity::Severity;
use once_cell::sync::OnceCell;
use std::ffi::{c_char, CStr};

pub const STATUS_OK: i32 = 0;
pub const STATUS_NOT_INITIALIZED: i32 = -1;
pub const STATUS_UNKNOWN_LOGGER: i32 = -2;
pub const STATUS_UNKNOWN_LEVEL: i32 = -3;
pub const STATUS_BAD_MESSAGE: i32 = -4;
pub const STATUS_BAD_CONFIG: i32 = -5;

static BRIDGE: OnceCell<LogBridge<FacadeBackend>> = OnceCell::new();

fn install(bridge: LogBridge<FacadeBackend>) -> i32 {
    // First initialization wins; repeated calls are a no-op so every engine
    // entry point can call init defensively, as with the JNI logger setup.
    let _ = BRIDGE.set(bridge);
    STATUS_OK
}

/// Initializes the process-global bridge.
///
/// `config_json` may be null, which selects the default SQL/HOST registry
/// with `RUST_LOG`-derived thresholds. Idempotent; only the first successful
/// call takes effect.
///
/// # Safety
/// `config_json`, when non-null, must point to a NUL-terminated string that
/// stays valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn engine_log_init(config_json: *const c_char) -> i32 {
    if config_json.is_null() {
        let registry = LoggerRegistry::engine_default();
        let backend = FacadeBackend::from_env(&registry);
        return install(LogBridge::new(registry, backend));
    }

    let json = match CStr::from_ptr(config_json).to_str() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Rust: bridge config is not valid UTF-8: {e}");
            return STATUS_BAD_CONFIG;
        }
    };
    let parsed = match config::parse_bridge_config(json, Severity::Info) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Rust: failed to parse bridge config: {e}");
            return STATUS_BAD_CONFIG;
        }
    };

    let backend = FacadeBackend::from_env(&parsed.registry);
    for (index, level) in parsed.initial_levels.iter().enumerate() {
        backend.set_level(index, *level);
    }
    install(LogBridge::new(parsed.registry, backend))
}

/// Snapshots every registered logger's effective threshold into a level
/// word for the engine to cache. Returns the all-permissive word when the
/// bridge was never initialized, so the engine's next emit surfaces the
/// fault instead of it being masked by suppressed statements.
#[no_mangle]
pub extern "C" fn engine_log_refresh_levels() -> u64 {
    match BRIDGE.get() {
        Some(bridge) => bridge.refresh_levels(),
        None => {
            eprintln!("Rust: engine_log_refresh_levels called before engine_log_init");
            0
        }
    }
}

/// Forwards one accepted statement to the host backend.
///
/// `message` is `len` bytes of UTF-8, not NUL-terminated; invalid sequences
/// are replaced rather than dropping the record.
///
/// # Safety
/// `message` must point to `len` readable bytes that stay valid for the
/// duration of the call.
#[no_mangle]
pub unsafe extern "C" fn engine_log_emit(
    logger: u32,
    level: u32,
    message: *const c_char,
    len: usize,
) -> i32 {
    let Some(bridge) = BRIDGE.get() else {
        eprintln!("Rust: engine_log_emit called before engine_log_init");
        return STATUS_NOT_INITIALIZED;
    };
    if message.is_null() {
        eprintln!("Rust: engine_log_emit called with a null message");
        return STATUS_BAD_MESSAGE;
    }

    // SAFETY: caller guarantees `message` points to `len` readable bytes.
    let bytes = std::slice::from_raw_parts(message.cast::<u8>(), len);
    let text = String::from_utf8_lossy(bytes);

    match bridge.emit(logger as usize, level, &text) {
        Ok(()) => STATUS_OK,
        Err(e @ BridgeError::UnknownLoggerIndex { .. }) => {
            eprintln!("Rust: rejected engine log statement: {e}");
            STATUS_UNKNOWN_LOGGER
        }
        Err(e @ BridgeError::UnknownLevel { .. }) => {
            eprintln!("Rust: rejected engine log statement: {e}");
            STATUS_UNKNOWN_LEVEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    // The bridge handle is process-global, so the whole boundary is
    // exercised in one test to keep initialization order deterministic.
    #[test]
    fn test_boundary_round_trip() {
        let config = CString::new(
            r#"{"loggers": [{"name": "SQL", "level": "warn"},
                            {"name": "HOST", "level": "debug"}]}"#,
        )
        .unwrap();

        unsafe {
            assert_eq!(engine_log_init(config.as_ptr()), STATUS_OK);
            // Repeated initialization is a no-op.
            assert_eq!(engine_log_init(std::ptr::null()), STATUS_OK);
        }

        assert_eq!(engine_log_refresh_levels(), 20);

        let message = b"statement ran long";
        unsafe {
            assert_eq!(
                engine_log_emit(
                    0,
                    Severity::Warn.ordinal() as u32,
                    message.as_ptr().cast(),
                    message.len()
                ),
                STATUS_OK
            );
            assert_eq!(
                engine_log_emit(2, Severity::Warn.ordinal() as u32, message.as_ptr().cast(), message.len()),
                STATUS_UNKNOWN_LOGGER
            );
            assert_eq!(
                engine_log_emit(0, Severity::Off.ordinal() as u32, message.as_ptr().cast(), message.len()),
                STATUS_UNKNOWN_LEVEL
            );
            assert_eq!(
                engine_log_emit(0, Severity::Warn.ordinal() as u32, std::ptr::null(), 0),
                STATUS_BAD_MESSAGE
            );
        }
    }
}
