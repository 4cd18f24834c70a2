// src/config.rs
//! Filter configuration from plain user-supplied strings
//!
//! All inputs are validated and defaulted internally: an unrecognized speed
//! selector or an unparsable time bound degrades to "no filter on that
//! side" rather than failing the conversion.

use crate::filter::FilterConfig;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Wall-clock format accepted for the time bounds.
const BOUND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Time bounds are local wall-clock strings interpreted at this fixed
/// offset (UTC+9).
const LOCAL_OFFSET_SECONDS: i32 = 9 * 3600;

impl FilterConfig {
    /// Build a config from the raw selector strings.
    pub fn from_strings(speed: &str, start: &str, end: &str) -> Self {
        Self {
            speed_cap: parse_speed_selector(speed),
            start: parse_time_bound(start),
            end: parse_time_bound(end),
        }
    }
}

/// `"none"` (or anything that fails to parse as a positive number) means
/// unlimited; `"10"` and `"100"` are the expected cap selectors.
pub fn parse_speed_selector(selector: &str) -> Option<f64> {
    match selector.trim() {
        "" | "none" => None,
        other => other.parse::<f64>().ok().filter(|cap| *cap > 0.0),
    }
}

/// Parse a `YYYY-MM-DD HH:MM:SS` wall-clock string as a UTC+9 local time
/// and convert it to UTC. Unparsable input means "no bound".
pub fn parse_time_bound(bound: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(bound.trim(), BOUND_FORMAT).ok()?;
    let offset = FixedOffset::east_opt(LOCAL_OFFSET_SECONDS)?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_bound_interpreted_as_utc_plus_9() {
        let bound = parse_time_bound("2025-01-01 21:00:00").unwrap();
        assert_eq!(bound.to_rfc3339(), "2025-01-01T12:00:00+00:00");
    }

    #[test]
    fn test_unparsable_bound_means_unbounded() {
        assert_eq!(parse_time_bound(""), None);
        assert_eq!(parse_time_bound("yesterday"), None);
        assert_eq!(parse_time_bound("2025-01-01"), None);
        assert_eq!(parse_time_bound("2025-13-01 00:00:00"), None);
    }

    #[test]
    fn test_speed_selectors() {
        assert_eq!(parse_speed_selector("none"), None);
        assert_eq!(parse_speed_selector(""), None);
        assert_eq!(parse_speed_selector("10"), Some(10.0));
        assert_eq!(parse_speed_selector("100"), Some(100.0));
        assert_eq!(parse_speed_selector("fast"), None);
        assert_eq!(parse_speed_selector("-5"), None);
    }

    #[test]
    fn test_from_strings() {
        let config = FilterConfig::from_strings("100", "2025-01-01 09:00:00", "bogus");
        assert_eq!(config.speed_cap, Some(100.0));
        assert_eq!(
            config.start.unwrap().to_rfc3339(),
            "2025-01-01T00:00:00+00:00"
        );
        assert_eq!(config.end, None);
    }
}
