#![warn(clippy::pedantic)]

pub mod encoder;
pub mod envelope;
pub mod error;

mod compression;

pub use encoder::ArmorEncoder;
pub use envelope::{ArmorEnvelope, wrap_plaintext};
pub use error::EncodeError;
