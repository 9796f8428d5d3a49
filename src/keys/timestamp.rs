//! Fixed-pattern codec for key timestamps.
//!
//! Natural keys carry their timestamp component over the wire (URL path
//! segments and JSON bodies) in the pattern `dd-MM-yyyy__HH:mm:ss:SSSSSS`,
//! zero-padded with exactly six fractional digits. Encoding truncates
//! sub-microsecond precision; it never rounds.

use jiff::civil;

use super::KeyError;

/// Wire pattern for key timestamps.
pub const TIMESTAMP_PATTERN: &str = "dd-MM-yyyy__HH:mm:ss:SSSSSS";

/// Encodes a civil datetime into the fixed wire pattern.
pub fn encode(datetime: &civil::DateTime) -> String {
    format!(
        "{:02}-{:02}-{:04}__{:02}:{:02}:{:02}:{:06}",
        datetime.day(),
        datetime.month(),
        datetime.year(),
        datetime.hour(),
        datetime.minute(),
        datetime.second(),
        datetime.subsec_nanosecond() / 1_000,
    )
}

/// Decodes a timestamp segment, accepting only strings `encode` produces.
///
/// Every field must be present, zero-padded to its exact width, and name a
/// representable civil datetime. Anything else fails with
/// [`KeyError::Timestamp`].
pub fn decode(segment: &str) -> Result<civil::DateTime, KeyError> {
    let malformed = || KeyError::Timestamp {
        segment: segment.to_string(),
    };

    let (date, time) = segment.split_once("__").ok_or_else(malformed)?;

    let mut date_parts = date.split('-');
    let day = fixed_width_field(date_parts.next(), 2).ok_or_else(malformed)?;
    let month = fixed_width_field(date_parts.next(), 2).ok_or_else(malformed)?;
    let year = fixed_width_field(date_parts.next(), 4).ok_or_else(malformed)?;
    if date_parts.next().is_some() {
        return Err(malformed());
    }

    let mut time_parts = time.split(':');
    let hour = fixed_width_field(time_parts.next(), 2).ok_or_else(malformed)?;
    let minute = fixed_width_field(time_parts.next(), 2).ok_or_else(malformed)?;
    let second = fixed_width_field(time_parts.next(), 2).ok_or_else(malformed)?;
    let micros = fixed_width_field(time_parts.next(), 6).ok_or_else(malformed)?;
    if time_parts.next().is_some() {
        return Err(malformed());
    }

    civil::DateTime::new(
        year as i16,
        month as i8,
        day as i8,
        hour as i8,
        minute as i8,
        second as i8,
        micros * 1_000,
    )
    .map_err(|_| malformed())
}

/// Parses a field that must consist of exactly `width` ASCII digits.
fn fixed_width_field(part: Option<&str>, width: usize) -> Option<i32> {
    let part = part?;
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Serde adapter applying the fixed pattern to `civil::DateTime` fields.
pub mod serde_pattern {
    use jiff::civil;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(datetime: &civil::DateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::encode(datetime))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<civil::DateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::decode(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional datetime fields in the fixed pattern.
pub mod serde_pattern_opt {
    use jiff::civil;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(
        datetime: &Option<civil::DateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match datetime {
            Some(datetime) => serializer.serialize_some(&super::encode(datetime)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<civil::DateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::decode(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(micros: i32) -> civil::DateTime {
        civil::DateTime::new(2024, 1, 1, 10, 0, 0, micros * 1_000).unwrap()
    }

    #[test]
    fn encodes_with_fixed_widths() {
        assert_eq!(encode(&datetime(123_456)), "01-01-2024__10:00:00:123456");
        assert_eq!(encode(&datetime(0)), "01-01-2024__10:00:00:000000");
    }

    #[test]
    fn encode_truncates_sub_microsecond_precision() {
        let dt = civil::DateTime::new(2024, 1, 1, 10, 0, 0, 123_456_789).unwrap();
        assert_eq!(encode(&dt), "01-01-2024__10:00:00:123456");
    }

    #[test]
    fn decode_round_trips() {
        let dt = datetime(123_456);
        assert_eq!(decode(&encode(&dt)).unwrap(), dt);
    }

    #[test]
    fn decode_rejects_millisecond_precision() {
        // Three fractional digits instead of six.
        assert!(decode("01-01-2024__10:00:00:123").is_err());
    }

    #[test]
    fn decode_rejects_unpadded_fields() {
        assert!(decode("1-01-2024__10:00:00:123456").is_err());
        assert!(decode("01-1-2024__10:00:00:123456").is_err());
        assert!(decode("01-01-24__10:00:00:123456").is_err());
    }

    #[test]
    fn decode_rejects_wrong_separators() {
        assert!(decode("01-01-2024_10:00:00:123456").is_err());
        assert!(decode("01/01/2024__10:00:00:123456").is_err());
        assert!(decode("01-01-2024__10.00.00.123456").is_err());
    }

    #[test]
    fn decode_rejects_trailing_garbage() {
        assert!(decode("01-01-2024__10:00:00:123456:7").is_err());
        assert!(decode("01-01-2024-05__10:00:00:123456").is_err());
    }

    #[test]
    fn decode_rejects_impossible_dates() {
        assert!(decode("31-02-2024__10:00:00:123456").is_err());
        assert!(decode("01-13-2024__10:00:00:123456").is_err());
        assert!(decode("01-01-2024__24:00:00:123456").is_err());
        assert!(decode("01-01-2024__10:60:00:123456").is_err());
    }

    #[test]
    fn decode_rejects_non_digit_fields() {
        assert!(decode("ab-01-2024__10:00:00:123456").is_err());
        assert!(decode("01-01-2024__10:00:00:12345x").is_err());
    }
}
