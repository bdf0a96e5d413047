//! Ports - 出站端口定义
//!
//! 两个外部协作方的抽象接口，具体实现在 infrastructure/adapters 层：
//! - ChatEnginePort: 语言模型补全服务
//! - TtsEnginePort: 语音合成服务

pub mod chat_engine;
pub mod tts_engine;

pub use chat_engine::{ChatEnginePort, ChatError, ChatReply, ChatRequest};
pub use tts_engine::{SpeechAudio, TtsEnginePort, TtsError};
