//! Canonical digest handling for UUID v7 identifiers.
//!
//! Every input string is reduced to the canonical digest form (32 lowercase
//! hexadecimal characters, separators removed) and validated before anything
//! else looks at it. The timestamp accessors in [`crate::timestamp`] only
//! ever operate on identifiers that survived this pipeline.

use crate::constants::{DIGEST_LEN, VERSION_NIBBLE, VERSION_NIBBLE_INDEX};
use crate::{ExtractError, ExtractResult};
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// A UUID v7 identifier whose embedded creation time can be recovered.
///
/// This wrapper type guarantees that the original input reduced to a
/// canonical digest and carried the version nibble `7`, so the contained
/// identifier encodes a well-formed 48-bit millisecond timestamp.
///
/// # Construction
///
/// [`TimestampedUuid::parse`] is the only constructor. It accepts the common
/// interchange forms of a UUID (hyphenated or not, in any case) and rejects
/// everything else. There is no way to hold a non-v7 identifier in this
/// type, so the timestamp accessors never have to re-validate.
///
/// # Ordering
///
/// Identifiers compare in byte order, which for version 7 is creation-time
/// order. Sorting a collection of `TimestampedUuid` values sorts them
/// chronologically.
///
/// # Display format
///
/// Displays as the canonical digest: 32 lowercase hex characters, no
/// hyphens.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampedUuid(Uuid);

impl TimestampedUuid {
    /// Validates and parses a UUID v7 string.
    ///
    /// Normalization strips every hyphen (wherever it appears) and folds the
    /// input to lowercase. The result must then be exactly 32 hexadecimal
    /// characters with `7` at the version-nibble offset. No other characters
    /// are cleaned up; in particular, whitespace is not stripped and fails
    /// the format check.
    ///
    /// # Arguments
    ///
    /// * `input` - UUID string to validate and wrap, hyphenated or not, in
    ///   any case.
    ///
    /// # Returns
    ///
    /// Returns a validated [`TimestampedUuid`] on success.
    ///
    /// # Errors
    ///
    /// * [`ExtractError::InvalidInput`] if `input` is empty.
    /// * [`ExtractError::InvalidFormat`] if the normalized input is not
    ///   exactly 32 hex characters.
    /// * [`ExtractError::VersionMismatch`] if the version nibble is not `7`;
    ///   the error carries the nibble that was found.
    pub fn parse(input: &str) -> ExtractResult<Self> {
        if input.is_empty() {
            return Err(ExtractError::InvalidInput);
        }

        let digest = input.replace('-', "").to_ascii_lowercase();
        if !Self::is_canonical_digest(&digest) {
            return Err(ExtractError::InvalidFormat);
        }

        let version = digest.as_bytes()[VERSION_NIBBLE_INDEX];
        if version != VERSION_NIBBLE {
            return Err(ExtractError::VersionMismatch(version as char));
        }

        // SAFETY: is_canonical_digest guarantees valid hex, so parse_str will succeed
        let uuid = Uuid::parse_str(&digest).expect("canonical digest is a valid UUID");
        Ok(Self(uuid))
    }

    /// Returns true if `input` parses as a UUID v7.
    ///
    /// Shorthand for `TimestampedUuid::parse(input).is_ok()`, for callers
    /// that only need a yes/no answer.
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// Returns the identifier as a `uuid::Uuid`.
    ///
    /// The returned value is guaranteed to be a version 7 UUID since
    /// `TimestampedUuid` only contains validated identifiers.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns true if `input` is already in canonical digest form.
    ///
    /// This is a purely syntactic check that validates:
    /// - Exactly 32 bytes long
    /// - Contains only lowercase hex characters (`0-9` and `a-f`)
    fn is_canonical_digest(input: &str) -> bool {
        input.len() == DIGEST_LEN
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl fmt::Display for TimestampedUuid {
    /// Formats the identifier as its canonical digest (32 lowercase hex
    /// characters, no hyphens).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display in canonical (simple) form
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for TimestampedUuid {
    type Err = ExtractError;

    /// Parses a string into a `TimestampedUuid`.
    ///
    /// This is equivalent to calling [`TimestampedUuid::parse`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`TimestampedUuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimestampedUuid::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for TimestampedUuid {
    /// Serializes as the canonical digest string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.simple())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimestampedUuid {
    /// Deserializes from any accepted string form through the validating
    /// parse.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TimestampedUuid::parse(&s).map_err(serde::de::Error::custom)
    }
}
