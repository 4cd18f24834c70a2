// src/gpx.rs
//! GPX 1.1 serialization of filtered track points

use crate::track::TrackPoint;

/// MIME type of the produced document.
pub const GPX_MIME: &str = "application/gpx+xml";

/// Render the points as a GPX 1.1 document with a single track segment.
///
/// Every emitted value is numeric or a formatted timestamp, so no XML
/// escaping is needed.
pub fn write_gpx(points: &[TrackPoint]) -> String {
    let mut gpx = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="nmea2gpx" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <trkseg>
"#,
    );

    for point in points {
        gpx.push_str(&format!(
            "      <trkpt lat=\"{:.6}\" lon=\"{:.6}\">\n",
            point.lat, point.lon
        ));

        if let Some(ele) = point.ele {
            gpx.push_str(&format!("        <ele>{:.2}</ele>\n", ele));
        }

        gpx.push_str(&format!(
            "        <time>{}</time>\n",
            point.time.format("%Y-%m-%dT%H:%M:%S%.3fZ")
        ));

        gpx.push_str("      </trkpt>\n");
    }

    gpx.push_str("    </trkseg>\n  </trk>\n</gpx>\n");
    gpx
}
