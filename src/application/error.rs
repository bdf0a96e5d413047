//! 应用层错误定义
//!
//! 统一的命令处理错误类型。端口错误以 `#[from]` 原样包裹，
//! 供应商返回的状态码与响应体保留到 HTTP 层再做映射

use thiserror::Error;

use crate::application::ports::{ChatError, TtsError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 补全引擎错误
    #[error(transparent)]
    ChatEngine(#[from] ChatError),

    /// 语音合成引擎错误
    #[error(transparent)]
    TtsEngine(#[from] TtsError),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}
