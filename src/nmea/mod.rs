// src/nmea/mod.rs
//! NMEA 0183 sentence handling: field decoders and the sentence parser

pub mod decode;
pub mod sentence;

pub use sentence::{parse_sentence, ParsedRecord};
