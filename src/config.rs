//! # Bridge Configuration
//!
//! JSON configuration handed to the bridge at initialization. It names the
//! registered loggers, in protocol order, and optionally their initial
//! thresholds:
//!
//! ```json
//! {"loggers": [{"name": "SQL", "level": "warn"}, {"name": "HOST"}],
//!  "defaultLevel": "info"}
//! ```
//!
//! Loggers without an explicit level fall back to `defaultLevel`, and when
//! that is absent too, to the `RUST_LOG`-derived default.

use crate::codec::CodecError;
use crate::registry::LoggerRegistry;
use crate::severity::Severity;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed bridge configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Registry(#[from] CodecError),
}

#[derive(serde::Deserialize)]
struct LoggerSpec {
    name: String,
    level: Option<Severity>,
}

#[derive(serde::Deserialize)]
struct BridgeConfigDto {
    loggers: Vec<LoggerSpec>,
    #[serde(rename = "defaultLevel")]
    default_level: Option<Severity>,
}

/// Parsed, validated bridge configuration.
pub struct BridgeConfig {
    pub registry: LoggerRegistry,
    pub initial_levels: Vec<Severity>,
}

/// Parses a bridge configuration, validating the registry against the level
/// word capacity. `fallback` fills in loggers with no configured level.
pub fn parse_bridge_config(json: &str, fallback: Severity) -> Result<BridgeConfig, ConfigError> {
    let dto: BridgeConfigDto = serde_json::from_str(json)?;
    let default_level = dto.default_level.unwrap_or(fallback);

    let mut names = Vec::with_capacity(dto.loggers.len());
    let mut initial_levels = Vec::with_capacity(dto.loggers.len());
    for spec in dto.loggers {
        names.push(spec.name);
        initial_levels.push(spec.level.unwrap_or(default_level));
    }

    let registry = LoggerRegistry::new(names)?;
    Ok(BridgeConfig {
        registry,
        initial_levels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::MAX_LOGGERS;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{"loggers": [{"name": "SQL", "level": "warn"},
                                   {"name": "HOST", "level": "debug"}]}"#;
        let config = parse_bridge_config(json, Severity::Info).unwrap();
        assert_eq!(config.registry.name(0), Some("SQL"));
        assert_eq!(config.registry.name(1), Some("HOST"));
        assert_eq!(config.initial_levels, vec![Severity::Warn, Severity::Debug]);
    }

    #[test]
    fn test_default_level_fills_gaps() {
        let json = r#"{"loggers": [{"name": "SQL"}, {"name": "HOST", "level": "trace"}],
                       "defaultLevel": "error"}"#;
        let config = parse_bridge_config(json, Severity::Info).unwrap();
        assert_eq!(config.initial_levels, vec![Severity::Error, Severity::Trace]);
    }

    #[test]
    fn test_fallback_applies_without_default_level() {
        let json = r#"{"loggers": [{"name": "SQL"}]}"#;
        let config = parse_bridge_config(json, Severity::Warn).unwrap();
        assert_eq!(config.initial_levels, vec![Severity::Warn]);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            parse_bridge_config("{\"loggers\": ", Severity::Info),
            Err(ConfigError::Malformed(_))
        ));
        assert!(matches!(
            parse_bridge_config(r#"{"loggers": [{"name": "SQL", "level": "loud"}]}"#, Severity::Info),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn test_oversized_registry_is_rejected() {
        let loggers: Vec<String> = (0..=MAX_LOGGERS)
            .map(|i| format!("{{\"name\": \"LOGGER{i}\"}}"))
            .collect();
        let json = format!("{{\"loggers\": [{}]}}", loggers.join(","));
        assert!(matches!(
            parse_bridge_config(&json, Severity::Info),
            Err(ConfigError::Registry(CodecError::RegistryTooLarge { .. }))
        ));
    }
}
