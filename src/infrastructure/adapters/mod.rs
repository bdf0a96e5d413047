//! Adapters - 出站适配器
//!
//! - chat: OpenAI 兼容补全服务客户端
//! - tts: 下游语音合成服务客户端

pub mod chat;
pub mod tts;

pub use chat::{FakeChatClient, OpenAiChatClient, OpenAiChatClientConfig};
pub use tts::{FakeTtsClient, HttpTtsClient, HttpTtsClientConfig};
