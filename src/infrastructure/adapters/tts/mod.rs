//! TTS Adapters

pub mod fake_tts_client;
pub mod http_tts_client;

pub use fake_tts_client::FakeTtsClient;
pub use http_tts_client::{HttpTtsClient, HttpTtsClientConfig};
