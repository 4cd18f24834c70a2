// src/track.rs
//! Merging parsed NMEA records into a time-ordered track

use crate::nmea::ParsedRecord;
use chrono::{DateTime, Timelike, Utc};
use log::debug;
use std::collections::BTreeMap;

/// One combined track point: an RMC fix joined with an optional altitude
/// from a GGA sentence at the same second. Immutable once merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    pub time: DateTime<Utc>,
    pub ele: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
struct Fix {
    lat: f64,
    lon: f64,
    time: DateTime<Utc>,
}

/// Accumulates parsed records across a whole file and joins them into
/// combined points.
///
/// Both maps are keyed by second-of-day: GGA instants carry a placeholder
/// date, so second-of-day is the only key both record kinds share. A log
/// spanning midnight can therefore misattribute altitudes across days; that
/// matches how these logs have always been joined and is left as-is. The
/// same keying means a recurring second overwrites the earlier entry
/// (last-write-wins in file order).
#[derive(Debug, Default)]
pub struct PointMerger {
    fixes: BTreeMap<u32, Fix>,
    altitudes: BTreeMap<u32, f64>,
    dropped_invalid: usize,
}

impl PointMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one parsed record. Invalid fixes are dropped entirely: they
    /// contribute no position and no altitude join.
    pub fn feed(&mut self, record: ParsedRecord) {
        match record {
            ParsedRecord::Fix {
                valid: true,
                lat,
                lon,
                time,
            } => {
                self.fixes
                    .insert(time.num_seconds_from_midnight(), Fix { lat, lon, time });
            }
            ParsedRecord::Fix { valid: false, .. } => {
                self.dropped_invalid += 1;
            }
            ParsedRecord::Altitude { alt, time } => {
                self.altitudes.insert(time.num_seconds_from_midnight(), alt);
            }
        }
    }

    /// Emit one combined point per fix, attaching altitude where a GGA
    /// record shares the second, sorted ascending by time. Key uniqueness
    /// makes the sort a no-op for this map-based merge, but the ordering
    /// contract is established explicitly rather than left to the map.
    pub fn finish(self) -> Vec<TrackPoint> {
        if self.dropped_invalid > 0 {
            debug!("dropped {} invalid fixes", self.dropped_invalid);
        }

        let altitudes = self.altitudes;
        let mut points: Vec<TrackPoint> = self
            .fixes
            .into_iter()
            .map(|(key, fix)| TrackPoint {
                lat: fix.lat,
                lon: fix.lon,
                time: fix.time,
                ele: altitudes.get(&key).copied(),
            })
            .collect();

        points.sort_by_key(|p| p.time);
        points
    }
}
