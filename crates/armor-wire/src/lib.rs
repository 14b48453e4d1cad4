#![warn(clippy::pedantic)]

pub mod envelope;
pub mod error;
pub mod separator;
pub mod transport;

pub use envelope::EnvelopeMode;
pub use error::WireError;
pub use separator::{SectionSeparator, SeparatorKind};
