//! Command Handlers

pub mod answer_handlers;
pub mod speech_handlers;

pub use answer_handlers::AskQuestionHandler;
pub use speech_handlers::SynthesizeSpeechHandler;
