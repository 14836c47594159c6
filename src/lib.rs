//! Timestamp extraction for UUID version 7 identifiers.
//!
//! UUIDv7 identifiers are sortable, time-ordered keys: the most significant
//! 48 bits carry the Unix epoch millisecond at which the identifier was
//! created. Applications that use UUIDv7 as a primary key can recover that
//! instant directly from the identifier instead of storing it separately.
//!
//! This crate provides:
//! - Three pure functions that take a UUID string and return the embedded
//!   timestamp as epoch milliseconds, a [`chrono::DateTime<Utc>`], or an
//!   ISO-8601 string.
//! - A small wrapper type ([`TimestampedUuid`]) that *guarantees* a valid
//!   version-7 identifier once constructed.
//!
//! ## Accepted input
//! - Hyphenated or unhyphenated UUID strings, in any case.
//! - Hyphens are stripped wherever they appear. Nothing else is cleaned
//!   up: whitespace, braces and `urn:uuid:` prefixes all fail validation.
//!
//! Internally every input is reduced to its *canonical digest*: 32 lowercase
//! hexadecimal characters, no hyphens. The digest must carry `7` at offset 12
//! (the version nibble); the first 12 characters encode the timestamp.
//!
//! ## Field layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                         rand_b                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Only `unix_ts_ms` and `ver` are interpreted here; the random and variant
//! bits are never inspected.
//!
//! ## Example
//!
//! ```
//! use uuidv7_timestamp::{extract_timestamp_as_iso_string, extract_timestamp_from_uuid_v7};
//!
//! let millis = extract_timestamp_from_uuid_v7("017f7f58-9abc-7def-8123-0123456789ab")?;
//! assert_eq!(millis, 0x017f_7f58_9abc);
//!
//! let iso = extract_timestamp_as_iso_string("00000000-0000-7000-8000-000000000000")?;
//! assert_eq!(iso, "1970-01-01T00:00:00.000Z");
//! # Ok::<(), uuidv7_timestamp::ExtractError>(())
//! ```
//!
//! Every operation is synchronous, allocation-light and free of side
//! effects; nothing is cached between calls, so the functions are safe to
//! use from any number of threads.

mod constants;
mod digest;
mod timestamp;

// Re-export public types
pub use constants::MAX_TIMESTAMP_MILLIS;
pub use digest::{TimestampedUuid, Uuid};
pub use timestamp::{
    extract_timestamp_as_datetime, extract_timestamp_as_iso_string, extract_timestamp_from_uuid_v7,
};

/// Errors that can occur while extracting a timestamp from a UUID v7 string.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The input string was empty.
    #[error("uuid must be a non-empty string")]
    InvalidInput,

    /// After separator removal the input was not exactly 32 hexadecimal
    /// characters.
    #[error("invalid UUID format")]
    InvalidFormat,

    /// The version nibble was present but not `7`; carries the nibble that
    /// was found (lowercased).
    #[error("expected UUID v7 (version nibble = 7), got version nibble = {0}")]
    VersionMismatch(char),

    /// The narrowed timestamp failed the 48-bit exactness check.
    #[error("extracted timestamp is not an exact 48-bit value")]
    PrecisionLoss,
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
