//! # Level Word Codec
//!
//! Packs the effective severity threshold of every registered engine logger
//! into a single `u64`, three bits per logger. The native engine caches the
//! word and performs its enablement checks with a local bit test instead of
//! a boundary call per log statement.
//!
//! Bit layout: logger `i` occupies bits `[3i, 3i+2]`, so a 64-bit word holds
//! up to 21 loggers. The codec is pure and stateless; a fresh word is
//! produced on every encode.

use crate::severity::Severity;
use thiserror::Error;

/// Width of each logger's field in the level word.
pub const BITS_PER_LOGGER: u32 = 3;

/// Mask selecting one logger's field after shifting.
pub const LEVEL_MASK: u64 = 0b111;

/// Maximum number of loggers a 64-bit level word can carry.
pub const MAX_LOGGERS: usize = (u64::BITS / BITS_PER_LOGGER) as usize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// More loggers than the level word has bits for. Overlapping two
    /// loggers into the same field would silently corrupt the protocol, so
    /// this is rejected outright.
    #[error("{count} loggers exceed the {MAX_LOGGERS}-logger capacity of the level word")]
    RegistryTooLarge { count: usize },

    /// A decode index past the last field the word can hold.
    #[error("logger index {index} is outside the level word (capacity {MAX_LOGGERS})")]
    IndexOutOfRange { index: usize },

    /// A field value with no corresponding severity. Unreachable while the
    /// enumeration covers all eight 3-bit codes, but decode stays total over
    /// the mapping rather than assuming it.
    #[error("level ordinal {ordinal} is not a defined severity")]
    InvalidLevelOrdinal { ordinal: u64 },
}

/// Encodes the per-logger thresholds, in registry order, into a level word.
pub fn encode(levels: &[Severity]) -> Result<u64, CodecError> {
    if levels.len() > MAX_LOGGERS {
        return Err(CodecError::RegistryTooLarge {
            count: levels.len(),
        });
    }
    let mut word = 0u64;
    for (index, level) in levels.iter().enumerate() {
        word |= u64::from(level.ordinal()) << (index as u32 * BITS_PER_LOGGER);
    }
    Ok(word)
}

/// Decodes logger `index`'s threshold out of a level word.
///
/// Fields past the registry length decode as `All` (they were never
/// written), which matches how the native side treats unwritten bits.
pub fn decode(word: u64, index: usize) -> Result<Severity, CodecError> {
    if index >= MAX_LOGGERS {
        return Err(CodecError::IndexOutOfRange { index });
    }
    let ordinal = (word >> (index as u32 * BITS_PER_LOGGER)) & LEVEL_MASK;
    Severity::from_ordinal(ordinal as u8).ok_or(CodecError::InvalidLevelOrdinal { ordinal })
}

/// The enablement bit test the native side runs against its cached word:
/// whether a statement at `statement` severity passes logger `index`'s
/// encoded threshold. Indices past the word's capacity report disabled.
pub fn statement_enabled(word: u64, index: usize, statement: Severity) -> bool {
    if index >= MAX_LOGGERS {
        return false;
    }
    let threshold = (word >> (index as u32 * BITS_PER_LOGGER)) & LEVEL_MASK;
    u64::from(statement.ordinal()) >= threshold
}
