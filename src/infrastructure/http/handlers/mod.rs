//! HTTP Handlers

pub mod generate;
pub mod ping;
pub mod tts;

pub use generate::generate;
pub use ping::ping;
pub use tts::{method_not_allowed, preflight, synthesize};
