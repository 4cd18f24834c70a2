// src/lib.rs
//! NMEA to GPX Converter Library
//!
//! Converts NMEA 0183 GPS logs (RMC/GGA sentences) into GPX 1.1 tracks,
//! with optional time-window trimming and speed-based outlier rejection.

pub mod config;
pub mod convert;
pub mod error;
pub mod filter;
pub mod gpx;
pub mod nmea;
pub mod track;

// Re-export main types for convenience
pub use convert::convert;
pub use error::{ConvertError, Result};
pub use filter::FilterConfig;
pub use gpx::{write_gpx, GPX_MIME};
pub use track::{PointMerger, TrackPoint};
