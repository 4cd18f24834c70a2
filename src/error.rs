// src/error.rs
//! Error types for the NMEA to GPX converter

use std::fmt;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug)]
pub enum ConvertError {
    Io(std::io::Error),
    /// The input contained no usable RMC fixes at all.
    NoValidPoints,
    /// Points existed but the time window / speed filters removed them all.
    NoPointsAfterFilter,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(e) => write!(f, "IO error: {}", e),
            ConvertError::NoValidPoints => {
                write!(f, "no valid GPS points found in input")
            }
            ConvertError::NoPointsAfterFilter => {
                write!(f, "no trackpoints remain after filtering")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<std::io::Error> for ConvertError {
    fn from(error: std::io::Error) -> Self {
        ConvertError::Io(error)
    }
}
