//! Application State

use std::sync::Arc;

use crate::application::{
    AskQuestionHandler, ChatEnginePort, SynthesizeSpeechHandler, TtsEnginePort,
};

/// 应用状态
///
/// 持有两个出站端口与对应的命令处理器，请求间无共享可变状态
pub struct AppState {
    // ========== Ports ==========
    pub chat_engine: Arc<dyn ChatEnginePort>,
    pub tts_engine: Arc<dyn TtsEnginePort>,

    // ========== Command Handlers ==========
    pub ask_question_handler: AskQuestionHandler,
    pub synthesize_speech_handler: SynthesizeSpeechHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(chat_engine: Arc<dyn ChatEnginePort>, tts_engine: Arc<dyn TtsEnginePort>) -> Self {
        Self {
            chat_engine: chat_engine.clone(),
            tts_engine: tts_engine.clone(),
            ask_question_handler: AskQuestionHandler::new(chat_engine),
            synthesize_speech_handler: SynthesizeSpeechHandler::new(tts_engine),
        }
    }
}
