//! Chat Engine Port - 补全引擎抽象
//!
//! 单发补全：一条 system 消息加一条 user 消息，取回一段文本。
//! 无流式、无重试、无会话记忆

use async_trait::async_trait;
use thiserror::Error;

/// 补全调用错误
#[derive(Debug, Error)]
pub enum ChatError {
    /// API 凭据未配置
    #[error("API key not configured")]
    MissingApiKey,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 供应商返回了错误状态码，payload 为其 JSON 响应体
    #[error("Provider error: HTTP {status}")]
    Provider {
        status: u16,
        payload: serde_json::Value,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 补全请求
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// system 消息内容
    pub system: String,
    /// 用户提问
    pub user: String,
}

/// 补全响应
#[derive(Debug, Clone)]
pub struct ChatReply {
    /// 首个候选的文本，供应商未返回候选时为空字符串
    pub content: String,
}

/// Chat Engine Port
///
/// 外部语言模型服务的抽象接口
#[async_trait]
pub trait ChatEnginePort: Send + Sync {
    /// 执行一次补全调用
    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, ChatError>;
}
