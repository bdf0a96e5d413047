//! Chat Adapters

pub mod fake_chat_client;
pub mod openai_chat_client;

pub use fake_chat_client::FakeChatClient;
pub use openai_chat_client::{OpenAiChatClient, OpenAiChatClientConfig};
