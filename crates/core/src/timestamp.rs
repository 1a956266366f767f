//! Timestamp rendering for status snapshots
//!
//! Stack activity timestamps are `chrono::DateTime<Utc>`. On the wire they
//! are RFC 3339 with a numeric `+00:00` offset and up to nanosecond
//! precision. Trailing zeros of the fraction are dropped, and so is the dot
//! for whole seconds: `2017-04-30T17:01:47.0123+00:00`.

use chrono::{DateTime, Timelike, Utc};
use serde::Serializer;

/// Timestamp type used for stack activity dates.
pub type Timestamp = DateTime<Utc>;

/// Current time.
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp in the piladb response format.
pub fn format(t: &Timestamp) -> String {
    let seconds = t.format("%Y-%m-%dT%H:%M:%S");
    let fraction = format!("{:09}", t.nanosecond());
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}+00:00", seconds)
    } else {
        format!("{}.{}+00:00", seconds, fraction)
    }
}

/// `serialize_with` helper rendering a timestamp through [`format`].
pub fn serialize<S>(t: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_whole_seconds() {
        let t = Utc.with_ymd_and_hms(2017, 4, 30, 17, 1, 47).unwrap();
        assert_eq!(format(&t), "2017-04-30T17:01:47+00:00");
    }

    #[test]
    fn test_format_nanoseconds() {
        let t = Utc
            .with_ymd_and_hms(2017, 4, 30, 17, 1, 47)
            .unwrap()
            .checked_add_signed(chrono::Duration::nanoseconds(12_345_678))
            .unwrap();
        assert_eq!(format(&t), "2017-04-30T17:01:47.012345678+00:00");
    }

    #[test]
    fn test_format_trims_trailing_zeros() {
        let base = Utc.with_ymd_and_hms(2017, 4, 30, 17, 1, 47).unwrap();
        let cases = [
            (12_300_000, "2017-04-30T17:01:47.0123+00:00"),
            (500_000_000, "2017-04-30T17:01:47.5+00:00"),
            (1, "2017-04-30T17:01:47.000000001+00:00"),
        ];
        for (nanos, expected) in cases {
            let t = base
                .checked_add_signed(chrono::Duration::nanoseconds(nanos))
                .unwrap();
            assert_eq!(format(&t), expected);
        }
    }

    #[test]
    fn test_serialize_helper() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "serialize")]
            at: Timestamp,
        }

        let at = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        let json = serde_json::to_string(&Wrapper { at }).unwrap();
        assert_eq!(json, r#"{"at":"2020-01-02T03:04:05+00:00"}"#);
    }
}
