//! TTS Engine Port - 语音合成引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 下游返回非 2xx，内容为其错误响应体文本
    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成结果音频
#[derive(Debug, Clone)]
pub struct SpeechAudio {
    /// 完整音频数据（一次性读入内存，非流式）
    pub audio_data: Vec<u8>,
    /// 下游声明的 MIME 类型
    pub content_type: String,
}

/// TTS Engine Port
///
/// 外部语音合成服务的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 把请求体原样转发给下游合成服务，返回完整音频
    async fn synthesize(&self, payload: serde_json::Value) -> Result<SpeechAudio, TtsError>;

    /// 检查下游服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
