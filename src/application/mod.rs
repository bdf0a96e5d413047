//! 应用层 - 命令、端口与错误
//!
//! - Ports: 出站端口定义（ChatEngine, TtsEngine）
//! - Commands: 命令与命令处理器

pub mod commands;
pub mod error;
pub mod ports;

pub use commands::{AskQuestion, AskQuestionHandler, SynthesizeSpeech, SynthesizeSpeechHandler};
pub use error::ApplicationError;
pub use ports::{
    ChatEnginePort, ChatError, ChatReply, ChatRequest, SpeechAudio, TtsEnginePort, TtsError,
};
