//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 返回固定音频或固定错误，不实际调用 TTS 服务，并记录最近一次请求体

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{SpeechAudio, TtsEnginePort, TtsError};

/// Fake TTS Client
pub struct FakeTtsClient {
    audio_data: Vec<u8>,
    content_type: String,
    failure: Option<String>,
    calls: AtomicUsize,
    last_payload: Mutex<Option<serde_json::Value>>,
}

impl FakeTtsClient {
    /// 始终返回固定音频
    pub fn with_audio(audio_data: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            audio_data,
            content_type: content_type.into(),
            failure: None,
            calls: AtomicUsize::new(0),
            last_payload: Mutex::new(None),
        }
    }

    /// 始终返回 ServiceError，details 为给定文本
    pub fn failing(details: impl Into<String>) -> Self {
        Self {
            audio_data: Vec::new(),
            content_type: "audio/wav".to_string(),
            failure: Some(details.into()),
            calls: AtomicUsize::new(0),
            last_payload: Mutex::new(None),
        }
    }

    /// 已收到的调用次数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 最近一次收到的请求体
    pub fn last_payload(&self) -> Option<serde_json::Value> {
        self.last_payload.lock().unwrap().clone()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, payload: serde_json::Value) -> Result<SpeechAudio, TtsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().unwrap() = Some(payload);

        match &self.failure {
            Some(details) => Err(TtsError::ServiceError(details.clone())),
            None => Ok(SpeechAudio {
                audio_data: self.audio_data.clone(),
                content_type: self.content_type.clone(),
            }),
        }
    }

    async fn health_check(&self) -> bool {
        self.failure.is_none()
    }
}
