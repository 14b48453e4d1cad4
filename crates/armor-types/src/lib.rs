#![warn(clippy::pedantic)]

pub mod headers;
pub mod message;

pub use headers::HeaderBlock;
pub use message::Message;
