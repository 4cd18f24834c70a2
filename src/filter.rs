// src/filter.rs
//! Time-window and speed filtering of merged track points

use crate::track::TrackPoint;
use chrono::{DateTime, Utc};
use log::debug;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Filter settings derived from user input. `None` disables the
/// corresponding filter entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterConfig {
    /// Maximum point-to-point speed in km/h.
    pub speed_cap: Option<f64>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Run both filter stages: time window first, then the speed cap over the
/// window survivors.
pub fn apply_filters(points: Vec<TrackPoint>, config: &FilterConfig) -> Vec<TrackPoint> {
    let windowed = time_window(points, config.start, config.end);
    debug!("{} points inside time window", windowed.len());

    let kept = speed_filter(windowed, config.speed_cap);
    debug!("{} points after speed filter", kept.len());
    kept
}

/// Keep points with `start <= t <= end`. Both bounds are inclusive and
/// independently optional.
fn time_window(
    points: Vec<TrackPoint>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Vec<TrackPoint> {
    points
        .into_iter()
        .filter(|p| {
            start.map_or(true, |s| p.time >= s) && end.map_or(true, |e| p.time <= e)
        })
        .collect()
}

/// Reject points that would require moving faster than `cap` km/h from the
/// last accepted point.
///
/// A rejected point does not become the new anchor: the next point is still
/// compared against the last point that was actually kept, so a single bad
/// fix cannot drag the track away. Zero elapsed time or zero distance
/// always accepts (stationary logs and duplicate timestamps are not
/// outliers, and neither divides).
fn speed_filter(points: Vec<TrackPoint>, cap: Option<f64>) -> Vec<TrackPoint> {
    let Some(cap) = cap else {
        return points;
    };

    let mut kept: Vec<TrackPoint> = Vec::with_capacity(points.len());
    let mut anchor: Option<TrackPoint> = None;

    for point in points {
        let accept = match anchor {
            None => true,
            Some(last) => {
                let distance = haversine_km(last.lat, last.lon, point.lat, point.lon);
                let elapsed = (point.time - last.time).num_seconds();
                if elapsed <= 0 || distance == 0.0 {
                    true
                } else {
                    let speed = distance / (elapsed as f64 / 3600.0);
                    speed <= cap
                }
            }
        };

        if accept {
            anchor = Some(point);
            kept.push(point);
        }
    }

    kept
}

/// Great-circle distance in kilometers (Haversine, spherical Earth).
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}
