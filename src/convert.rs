// src/convert.rs
//! The whole pipeline: NMEA text in, GPX text out

use crate::error::{ConvertError, Result};
use crate::filter::{apply_filters, FilterConfig};
use crate::gpx::write_gpx;
use crate::nmea::parse_sentence;
use crate::track::PointMerger;
use log::info;

/// Convert the content of one NMEA log file into a GPX 1.1 document.
///
/// Malformed or unrecognized sentences are skipped silently. The call
/// fails in exactly two cases: the file yields no valid combined points at
/// all, or the configured filters remove every point.
pub fn convert(content: &str, config: &FilterConfig) -> Result<String> {
    let mut merger = PointMerger::new();
    for line in content.lines() {
        if let Some(record) = parse_sentence(line.trim()) {
            merger.feed(record);
        }
    }

    let points = merger.finish();
    if points.is_empty() {
        return Err(ConvertError::NoValidPoints);
    }
    info!("merged {} trackpoints", points.len());

    let filtered = apply_filters(points, config);
    if filtered.is_empty() {
        return Err(ConvertError::NoPointsAfterFilter);
    }
    info!("{} trackpoints after filtering", filtered.len());

    Ok(write_gpx(&filtered))
}
