// src/nmea/sentence.rs
//! NMEA sentence parsing into tagged records

use super::decode::{parse_coordinate, parse_datetime, parse_time_of_day};
use chrono::{DateTime, Utc};

/// One successfully parsed NMEA sentence. Anything that is neither an RMC
/// nor a GGA, or that fails to decode, produces no record at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedRecord {
    /// Position and timestamp from an RMC sentence. `valid` reflects the
    /// status field (`A` = active fix); invalid fixes still carry decoded
    /// coordinates but contribute nothing to the track.
    Fix {
        valid: bool,
        lat: f64,
        lon: f64,
        time: DateTime<Utc>,
    },
    /// Altitude from a GGA sentence. The instant carries a placeholder date
    /// (GGA has no date field) and is only good for second-of-day keying.
    Altitude { alt: f64, time: DateTime<Utc> },
}

/// Parse a single trimmed NMEA line.
///
/// The sentence type is taken from characters 4-6 of the talker sentence,
/// so `$GPRMC`, `$GNRMC`, etc. are all recognized (talker-agnostic, like
/// receivers emit). Sentences with fewer than 10 fields are dropped.
pub fn parse_sentence(line: &str) -> Option<ParsedRecord> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 10 {
        return None;
    }

    match parts[0].get(3..6)? {
        "RMC" => parse_rmc(&parts),
        "GGA" => parse_gga(&parts),
        _ => None,
    }
}

/// RMC: time(1), status(2), lat(3), lat-dir(4), lon(5), lon-dir(6), date(9).
/// A decode failure on any of lat/lon/time discards the whole record rather
/// than marking it invalid.
fn parse_rmc(parts: &[&str]) -> Option<ParsedRecord> {
    let valid = parts[2] == "A";
    let lat = parse_coordinate(parts[3], parts[4])?;
    let lon = parse_coordinate(parts[5], parts[6])?;
    let time = parse_datetime(parts[1], parts[9])?;

    Some(ParsedRecord::Fix {
        valid,
        lat,
        lon,
        time,
    })
}

/// GGA: time(1), altitude(9). No date field.
fn parse_gga(parts: &[&str]) -> Option<ParsedRecord> {
    let alt = parts[9].parse::<f64>().ok()?;
    let time = parse_time_of_day(parts[1])?;

    Some(ParsedRecord::Altitude { alt, time })
}
