#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod parser;

mod decompression;

pub use config::DecoderConfig;
pub use decoder::ArmorDecoder;
pub use error::{DecodeError, ParseError};
pub use parser::SectionParser;
