//! Timestamp recovery from validated UUID v7 identifiers.
//!
//! Version 7 stores the number of milliseconds since the Unix epoch in its
//! top 48 bits, big endian. The accessors here read that field back out and
//! render it as raw milliseconds, a UTC [`DateTime`], or an ISO 8601 string.

use crate::constants::{MAX_TIMESTAMP_MILLIS, TIMESTAMP_SHIFT};
use crate::digest::TimestampedUuid;
use crate::{ExtractError, ExtractResult};
use chrono::{DateTime, Utc};

impl TimestampedUuid {
    /// Returns the embedded creation time in milliseconds since the Unix
    /// epoch.
    ///
    /// # Returns
    ///
    /// The 48-bit timestamp field as a `u64`, in the range
    /// `0..=MAX_TIMESTAMP_MILLIS`.
    ///
    /// # Errors
    ///
    /// * [`ExtractError::PrecisionLoss`] if the narrowed value does not
    ///   reproduce the timestamp field exactly.
    pub fn timestamp_millis(&self) -> ExtractResult<u64> {
        let field = self.uuid().as_u128() >> TIMESTAMP_SHIFT;
        let millis = field as u64;

        // The field is 48 bits wide, so the narrowed value must round-trip
        // and stay within MAX_TIMESTAMP_MILLIS
        if u128::from(millis) != field || millis > MAX_TIMESTAMP_MILLIS {
            return Err(ExtractError::PrecisionLoss);
        }

        Ok(millis)
    }

    /// Returns the embedded creation time as a UTC datetime.
    ///
    /// # Errors
    ///
    /// * [`ExtractError::PrecisionLoss`] if the timestamp field fails the
    ///   exactness check.
    pub fn timestamp(&self) -> ExtractResult<DateTime<Utc>> {
        let millis = self.timestamp_millis()?;

        // 2^48 - 1 ms lands in year 10889, well inside chrono's range
        let datetime = DateTime::from_timestamp_millis(millis as i64)
            .expect("48-bit timestamp is within chrono's range");
        Ok(datetime)
    }

    /// Returns the embedded creation time as an ISO 8601 string.
    ///
    /// The rendering is always UTC with millisecond precision and a `Z`
    /// suffix, in the form `YYYY-MM-DDTHH:mm:ss.sssZ`.
    ///
    /// # Errors
    ///
    /// * [`ExtractError::PrecisionLoss`] if the timestamp field fails the
    ///   exactness check.
    pub fn timestamp_iso8601(&self) -> ExtractResult<String> {
        let datetime = self.timestamp()?;
        Ok(datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
    }
}

/// Extracts the creation timestamp from a UUID v7 string as milliseconds
/// since the Unix epoch.
///
/// Accepts the hyphenated and unhyphenated forms of a UUID, in any case.
///
/// # Examples
///
/// ```
/// use uuidv7_timestamp::extract_timestamp_from_uuid_v7;
///
/// let millis = extract_timestamp_from_uuid_v7("017f7f58-9abc-7def-8123-0123456789ab")?;
/// assert_eq!(millis, 0x017f_7f58_9abc);
/// # Ok::<(), uuidv7_timestamp::ExtractError>(())
/// ```
///
/// # Errors
///
/// Returns an [`ExtractError`] if `uuid` is empty, is not a well-formed
/// UUID, or does not carry version nibble `7`.
pub fn extract_timestamp_from_uuid_v7(uuid: &str) -> ExtractResult<u64> {
    TimestampedUuid::parse(uuid)?.timestamp_millis()
}

/// Extracts the creation timestamp from a UUID v7 string as a UTC datetime.
///
/// # Arguments
///
/// * `uuid` - UUID v7 string, hyphenated or not, in any case.
///
/// # Errors
///
/// Returns an [`ExtractError`] if `uuid` is empty, is not a well-formed
/// UUID, or does not carry version nibble `7`.
pub fn extract_timestamp_as_datetime(uuid: &str) -> ExtractResult<DateTime<Utc>> {
    TimestampedUuid::parse(uuid)?.timestamp()
}

/// Extracts the creation timestamp from a UUID v7 string as an ISO 8601
/// string in the form `YYYY-MM-DDTHH:mm:ss.sssZ`.
///
/// # Arguments
///
/// * `uuid` - UUID v7 string, hyphenated or not, in any case.
///
/// # Errors
///
/// Returns an [`ExtractError`] if `uuid` is empty, is not a well-formed
/// UUID, or does not carry version nibble `7`.
pub fn extract_timestamp_as_iso_string(uuid: &str) -> ExtractResult<String> {
    TimestampedUuid::parse(uuid)?.timestamp_iso8601()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use uuid::Uuid;

    /// Builds the canonical string form of a v7 UUID carrying `millis`.
    fn uuid_with_millis(millis: u64) -> String {
        uuid::Builder::from_unix_timestamp_millis(millis, &[0u8; 10])
            .into_uuid()
            .to_string()
    }

    #[test]
    fn test_epoch_uuid() {
        let id = TimestampedUuid::parse("00000000-0000-7000-8000-000000000000").unwrap();

        assert_eq!(id.timestamp_millis().unwrap(), 0);
        assert_eq!(id.timestamp_iso8601().unwrap(), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_known_timestamp() {
        let id = TimestampedUuid::parse("017f7f58-9abc-7def-8123-0123456789ab").unwrap();

        let expected = u64::from_str_radix("017f7f589abc", 16).unwrap();
        assert_eq!(id.timestamp_millis().unwrap(), expected);
        assert_eq!(id.timestamp_millis().unwrap(), 1_647_108_987_580);
        assert_eq!(id.timestamp_iso8601().unwrap(), "2022-03-12T18:16:27.580Z");
    }

    #[test]
    fn test_max_timestamp() {
        let id = TimestampedUuid::parse("ffffffff-ffff-7fff-bfff-ffffffffffff").unwrap();

        let millis = id.timestamp_millis().unwrap();
        assert_eq!(millis, MAX_TIMESTAMP_MILLIS);
        assert_eq!(id.timestamp().unwrap().timestamp_millis(), millis as i64);
    }

    #[test]
    fn test_datetime_parts_match_embedded_time() {
        let datetime = TimestampedUuid::parse("017f7f58-9abc-7def-8123-0123456789ab")
            .unwrap()
            .timestamp()
            .unwrap();

        assert_eq!(datetime.year(), 2022);
        assert_eq!(datetime.month(), 3);
        assert_eq!(datetime.day(), 12);
        assert_eq!(datetime.hour(), 18);
        assert_eq!(datetime.minute(), 16);
        assert_eq!(datetime.second(), 27);
        assert_eq!(datetime.timestamp_subsec_millis(), 580);
    }

    #[test]
    fn test_millis_survive_uuid_construction() {
        for millis in [0, 1, 999, 1_000, 1_700_000_000_000, MAX_TIMESTAMP_MILLIS] {
            let id = TimestampedUuid::parse(&uuid_with_millis(millis)).unwrap();

            assert_eq!(id.timestamp_millis().unwrap(), millis);
            assert_eq!(id.timestamp().unwrap().timestamp_millis(), millis as i64);
        }
    }

    #[test]
    fn test_iso_subsecond_rendering() {
        let just_before = TimestampedUuid::parse(&uuid_with_millis(999)).unwrap();
        let on_the_second = TimestampedUuid::parse(&uuid_with_millis(1_000)).unwrap();

        assert_eq!(
            just_before.timestamp_iso8601().unwrap(),
            "1970-01-01T00:00:00.999Z"
        );
        assert_eq!(
            on_the_second.timestamp_iso8601().unwrap(),
            "1970-01-01T00:00:01.000Z"
        );
    }

    #[test]
    fn test_extracts_from_generated_uuid() {
        let id = Uuid::now_v7();
        let parsed = TimestampedUuid::parse(&id.to_string()).unwrap();

        let (secs, nanos) = id
            .get_timestamp()
            .expect("v7 uuids carry a timestamp")
            .to_unix();
        let expected = secs * 1_000 + u64::from(nanos) / 1_000_000;

        assert_eq!(parsed.timestamp_millis().unwrap(), expected);
    }

    #[test]
    fn test_extract_timestamp_from_uuid_v7() {
        let millis = extract_timestamp_from_uuid_v7("017F7F589ABC7DEF81230123456789AB").unwrap();
        assert_eq!(millis, 1_647_108_987_580);
    }

    #[test]
    fn test_extract_timestamp_as_datetime() {
        let datetime = extract_timestamp_as_datetime("017f7f58-9abc-7def-8123-0123456789ab")
            .unwrap();
        assert_eq!(datetime.timestamp_millis(), 1_647_108_987_580);
    }

    #[test]
    fn test_extract_timestamp_as_iso_string() {
        let iso = extract_timestamp_as_iso_string("017f7f58-9abc-7def-8123-0123456789ab").unwrap();
        assert_eq!(iso, "2022-03-12T18:16:27.580Z");
    }

    #[test]
    fn test_errors_propagate_through_free_functions() {
        match extract_timestamp_from_uuid_v7("") {
            Err(ExtractError::InvalidInput) => {}
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        match extract_timestamp_as_datetime("not-a-uuid") {
            Err(ExtractError::InvalidFormat) => {}
            other => panic!("expected InvalidFormat, got {:?}", other),
        }

        match extract_timestamp_as_iso_string("017f7f58-9abc-4def-8123-0123456789ab") {
            Err(ExtractError::VersionMismatch(found)) => assert_eq!(found, '4'),
            other => panic!("expected VersionMismatch, got {:?}", other),
        }
    }
}
