//! Fake Chat Client - 用于测试的补全客户端
//!
//! 返回固定应答或固定错误，不发起网络调用，并记录调用次数
//! 供"空白提问不得触发外部调用"一类断言使用

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{ChatEnginePort, ChatError, ChatReply, ChatRequest};

/// 预设行为
#[derive(Debug, Clone)]
enum FakeBehavior {
    /// 固定应答
    Reply(String),
    /// 供应商错误（状态码 + JSON 响应体）
    ProviderError {
        status: u16,
        payload: serde_json::Value,
    },
    /// 网络错误
    NetworkError(String),
}

/// Fake Chat Client
pub struct FakeChatClient {
    behavior: FakeBehavior,
    calls: AtomicUsize,
    last_user: Mutex<Option<String>>,
}

impl FakeChatClient {
    /// 始终返回固定应答
    pub fn replying(content: impl Into<String>) -> Self {
        Self::with_behavior(FakeBehavior::Reply(content.into()))
    }

    /// 始终返回供应商错误
    pub fn provider_error(status: u16, payload: serde_json::Value) -> Self {
        Self::with_behavior(FakeBehavior::ProviderError { status, payload })
    }

    /// 始终返回网络错误
    pub fn network_error(message: impl Into<String>) -> Self {
        Self::with_behavior(FakeBehavior::NetworkError(message.into()))
    }

    fn with_behavior(behavior: FakeBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_user: Mutex::new(None),
        }
    }

    /// 已收到的调用次数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 最近一次收到的 user 消息
    pub fn last_user_message(&self) -> Option<String> {
        self.last_user.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatEnginePort for FakeChatClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, ChatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_user.lock().unwrap() = Some(request.user.clone());

        match &self.behavior {
            FakeBehavior::Reply(content) => Ok(ChatReply {
                content: content.clone(),
            }),
            FakeBehavior::ProviderError { status, payload } => Err(ChatError::Provider {
                status: *status,
                payload: payload.clone(),
            }),
            FakeBehavior::NetworkError(message) => Err(ChatError::NetworkError(message.clone())),
        }
    }
}
