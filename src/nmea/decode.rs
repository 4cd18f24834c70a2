// src/nmea/decode.rs
//! Field decoders for NMEA coordinate and timestamp strings
//!
//! All decoders are lenient: anything malformed decodes to `None` so the
//! caller can skip the sentence. Corrupt and truncated lines are normal in
//! real GPS logs.

use chrono::{DateTime, TimeZone, Utc};

/// Placeholder date used for time-of-day-only instants (GGA sentences carry
/// no date field). Such instants are only keyed by their second-of-day and
/// must never be read as calendar dates.
const PLACEHOLDER_YMD: (i32, u32, u32) = (2000, 1, 1);

/// Parse an NMEA coordinate field (`DDMM.MMMM` for latitude, `DDDMM.MMMM`
/// for longitude) into signed decimal degrees.
///
/// The hemisphere letter selects the degree width (`N`/`S`: 2 digits,
/// `E`/`W`: 3 digits) and the sign (`S`/`W` negate). No range validation is
/// performed beyond the arithmetic itself.
pub fn parse_coordinate(value: &str, hemisphere: &str) -> Option<f64> {
    let degree_digits = match hemisphere {
        "N" | "S" => 2,
        "E" | "W" => 3,
        _ => return None,
    };

    let degrees = value.get(..degree_digits)?.parse::<u32>().ok()? as f64;
    let minutes = value.get(degree_digits..)?.parse::<f64>().ok()?;

    let decimal = degrees + minutes / 60.0;
    match hemisphere {
        "S" | "W" => Some(-decimal),
        _ => Some(decimal),
    }
}

/// Parse an NMEA time field (`HHMMSS[.sss]`) plus date field (`DDMMYY`)
/// into a UTC instant at whole-second precision.
///
/// NMEA timestamps are already UTC, so no timezone conversion happens here.
/// Fractional seconds are truncated, not rounded. Out-of-range components
/// (month 13, hour 25, ...) decode to `None`.
pub fn parse_datetime(time: &str, date: &str) -> Option<DateTime<Utc>> {
    let (hours, minutes, seconds) = split_time(time)?;

    let day: u32 = date.get(..2)?.parse().ok()?;
    let month: u32 = date.get(2..4)?.parse().ok()?;
    let year: i32 = 2000 + date.get(4..6)?.parse::<i32>().ok()?;

    Utc.with_ymd_and_hms(year, month, day, hours, minutes, seconds)
        .single()
}

/// Degraded variant of [`parse_datetime`] for sentences with no date field:
/// the instant is pinned to a placeholder date and only its time-of-day is
/// meaningful.
pub fn parse_time_of_day(time: &str) -> Option<DateTime<Utc>> {
    let (hours, minutes, seconds) = split_time(time)?;
    let (y, m, d) = PLACEHOLDER_YMD;
    Utc.with_ymd_and_hms(y, m, d, hours, minutes, seconds).single()
}

fn split_time(time: &str) -> Option<(u32, u32, u32)> {
    let hours: u32 = time.get(..2)?.parse().ok()?;
    let minutes: u32 = time.get(2..4)?.parse().ok()?;
    let seconds = time.get(4..)?.parse::<f64>().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    // Truncate the fractional part, never round up.
    Some((hours, minutes, seconds as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_latitude_decode() {
        let lat = parse_coordinate("3530.0000", "N").unwrap();
        assert!((lat - 35.5).abs() < 1e-9);
    }

    #[test]
    fn test_longitude_decode() {
        let lon = parse_coordinate("13930.0000", "E").unwrap();
        assert!((lon - 139.5).abs() < 1e-9);
    }

    #[test]
    fn test_hemisphere_negation_is_symmetric() {
        let north = parse_coordinate("3545.1234", "N").unwrap();
        let south = parse_coordinate("3545.1234", "S").unwrap();
        assert_eq!(south, -north);

        let east = parse_coordinate("13945.1234", "E").unwrap();
        let west = parse_coordinate("13945.1234", "W").unwrap();
        assert_eq!(west, -east);
    }

    #[test]
    fn test_coordinate_rejects_empty_and_garbage() {
        assert_eq!(parse_coordinate("", "N"), None);
        assert_eq!(parse_coordinate("3530.0000", ""), None);
        assert_eq!(parse_coordinate("abcd.efgh", "N"), None);
        assert_eq!(parse_coordinate("35", "N"), None); // no minutes part
    }

    #[test]
    fn test_coordinate_no_range_validation() {
        // 95 degrees is out of range for a latitude but decodes anyway:
        // out-of-range results are passed through unchanged.
        let lat = parse_coordinate("9530.0000", "N").unwrap();
        assert!((lat - 95.5).abs() < 1e-9);
    }

    #[test]
    fn test_datetime_decode() {
        let dt = parse_datetime("123456.78", "010125").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-01-01T12:34:56+00:00");
    }

    #[test]
    fn test_fractional_seconds_truncated_not_rounded() {
        let dt = parse_datetime("123456.99", "010125").unwrap();
        assert_eq!(dt.second(), 56);
    }

    #[test]
    fn test_datetime_rejects_bad_fields() {
        assert_eq!(parse_datetime("123456.00", ""), None);
        assert_eq!(parse_datetime("", "010125"), None);
        assert_eq!(parse_datetime("2x3456.00", "010125"), None);
        // month 13 is out of range
        assert_eq!(parse_datetime("123456.00", "011325"), None);
        // hour 25 is out of range
        assert_eq!(parse_datetime("253456.00", "010125"), None);
    }

    #[test]
    fn test_time_of_day_uses_placeholder_date() {
        let dt = parse_time_of_day("120000.00").unwrap();
        assert_eq!(dt.num_seconds_from_midnight(), 12 * 3600);
        assert_eq!(dt.to_rfc3339(), "2000-01-01T12:00:00+00:00");
    }
}
