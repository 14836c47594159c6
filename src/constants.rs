//! Constants describing the canonical digest geometry.
//!
//! All offsets refer to the canonical digest form: 32 lowercase hexadecimal
//! characters with separators removed.

/// Length of a canonical digest in characters.
pub(crate) const DIGEST_LEN: usize = 32;

/// Offset of the version nibble within a canonical digest.
pub(crate) const VERSION_NIBBLE_INDEX: usize = 12;

/// The version nibble a UUID v7 must carry.
pub(crate) const VERSION_NIBBLE: u8 = b'7';

/// Width of the embedded millisecond timestamp field in bits.
pub(crate) const TIMESTAMP_BITS: u32 = 48;

/// Right shift that moves the timestamp field of the 128-bit identifier
/// value into the low bits.
pub(crate) const TIMESTAMP_SHIFT: u32 = 128 - TIMESTAMP_BITS;

/// Largest millisecond count a UUID v7 can carry (`2^48 - 1`).
pub const MAX_TIMESTAMP_MILLIS: u64 = (1u64 << TIMESTAMP_BITS) - 1;
