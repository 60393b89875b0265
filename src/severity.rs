//! # Severity Levels
//!
//! The closed set of severities shared by both sides of the engine boundary.
//! Each severity has a stable wire ordinal that is packed into the encoded
//! level word and must never be renumbered: the native engine bakes these
//! values into its own headers at build time.

use serde::Deserialize;

/// A log severity, ordered from most permissive (`All`) to most restrictive
/// (`Off`).
///
/// `All` and `Off` are threshold-only values: a logger whose threshold is
/// `All` accepts every statement, one whose threshold is `Off` accepts none.
/// Neither is a valid severity for a log statement itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    All = 0,
    Trace = 1,
    Debug = 2,
    Info = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
    Off = 7,
}

/// Wire-ordinal lookup table. Index `i` holds the severity whose ordinal is
/// `i`, so the mapping is total over every value a 3-bit field can carry.
const FROM_ORDINAL: [Severity; 8] = [
    Severity::All,
    Severity::Trace,
    Severity::Debug,
    Severity::Info,
    Severity::Warn,
    Severity::Error,
    Severity::Fatal,
    Severity::Off,
];

impl Severity {
    /// The wire ordinal of this severity.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Maps a wire ordinal back to its severity. Returns `None` for ordinals
    /// outside the 0-7 range defined by the protocol.
    pub fn from_ordinal(ordinal: u8) -> Option<Severity> {
        FROM_ORDINAL.get(ordinal as usize).copied()
    }

    /// Whether a statement at this severity passes a logger whose effective
    /// threshold is `self`.
    pub fn permits(self, statement: Severity) -> bool {
        statement.ordinal() >= self.ordinal()
    }

    /// Whether this severity is valid for a log statement crossing the
    /// boundary. `All` and `Off` are threshold markers, not statement
    /// severities.
    pub fn is_statement_level(self) -> bool {
        !matches!(self, Severity::All | Severity::Off)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::All => "ALL",
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Off => "OFF",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_stable() {
        assert_eq!(Severity::All.ordinal(), 0);
        assert_eq!(Severity::Trace.ordinal(), 1);
        assert_eq!(Severity::Debug.ordinal(), 2);
        assert_eq!(Severity::Info.ordinal(), 3);
        assert_eq!(Severity::Warn.ordinal(), 4);
        assert_eq!(Severity::Error.ordinal(), 5);
        assert_eq!(Severity::Fatal.ordinal(), 6);
        assert_eq!(Severity::Off.ordinal(), 7);
    }

    #[test]
    fn test_from_ordinal_is_total_over_three_bits() {
        for ordinal in 0..8u8 {
            let level = Severity::from_ordinal(ordinal).unwrap();
            assert_eq!(level.ordinal(), ordinal);
        }
        assert_eq!(Severity::from_ordinal(8), None);
        assert_eq!(Severity::from_ordinal(255), None);
    }

    #[test]
    fn test_off_permits_nothing() {
        for ordinal in 1..=6u8 {
            let statement = Severity::from_ordinal(ordinal).unwrap();
            assert!(!Severity::Off.permits(statement));
        }
    }

    #[test]
    fn test_all_permits_everything() {
        for ordinal in 1..=6u8 {
            let statement = Severity::from_ordinal(ordinal).unwrap();
            assert!(Severity::All.permits(statement));
        }
    }

    #[test]
    fn test_threshold_ordering() {
        assert!(Severity::Warn.permits(Severity::Error));
        assert!(Severity::Warn.permits(Severity::Warn));
        assert!(!Severity::Warn.permits(Severity::Info));
    }

    #[test]
    fn test_statement_levels_exclude_markers() {
        assert!(!Severity::All.is_statement_level());
        assert!(!Severity::Off.is_statement_level());
        assert!(Severity::Trace.is_statement_level());
        assert!(Severity::Fatal.is_statement_level());
    }
}
