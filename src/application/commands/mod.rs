//! Commands - 应用层命令

pub mod ask_commands;
pub mod handlers;
pub mod speech_commands;

pub use ask_commands::AskQuestion;
pub use handlers::{AskQuestionHandler, SynthesizeSpeechHandler};
pub use speech_commands::SynthesizeSpeech;
