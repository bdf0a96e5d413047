//! HTTP TTS Client - 调用外部 TTS HTTP 服务
//!
//! 实现 TtsEnginePort trait，把 JSON 请求体原样转发给外部合成服务
//!
//! 外部 TTS API:
//! POST {base_url}/tts
//! Request: {"text": "..."}  (JSON, Accept: audio/wav)
//! Response: audio/wav binary
//! GET {base_url}/  健康检查

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{SpeechAudio, TtsEnginePort, TtsError};

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// TTS 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP TTS 客户端
///
/// 通过 HTTP 调用外部 TTS 服务，整段音频一次性读入内存
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn tts_url(&self) -> String {
        format!("{}/tts", self.config.base_url.trim_end_matches('/'))
    }

    /// 获取健康检查 URL（下游服务在根路径应答）
    fn health_url(&self) -> String {
        format!("{}/", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TtsEnginePort for HttpTtsClient {
    async fn synthesize(&self, payload: serde_json::Value) -> Result<SpeechAudio, TtsError> {
        tracing::debug!(url = %self.tts_url(), "Sending TTS request");

        let response = self
            .client
            .post(self.tts_url())
            .header(ACCEPT, "audio/wav")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // 下游的错误体文本成为本端错误详情
            let error_text = response.text().await.unwrap_or_default();
            let details = if error_text.is_empty() {
                "TTS server error".to_string()
            } else {
                error_text
            };
            tracing::warn!(status = status.as_u16(), details = %details, "TTS service error");
            return Err(TtsError::ServiceError(details));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/wav")
            .to_string();

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            audio_size = audio_data.len(),
            content_type = %content_type,
            "TTS synthesis completed"
        );

        Ok(SpeechAudio {
            audio_data,
            content_type,
        })
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> HttpTtsClient {
        HttpTtsClient::new(HttpTtsClientConfig::new(server.url()).with_timeout(5)).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = HttpTtsClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpTtsClientConfig::new("http://example.com:9000").with_timeout(60);
        assert_eq!(config.base_url, "http://example.com:9000");
        assert_eq!(config.timeout_secs, 60);
    }

    #[tokio::test]
    async fn test_payload_forwarded_and_audio_returned() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/tts")
            .match_header("accept", "audio/wav")
            .match_body(mockito::Matcher::Json(json!({"text": "hello"})))
            .with_status(200)
            .with_header("content-type", "audio/wav")
            .with_body(b"RIFF....WAVEfmt ".to_vec())
            .create_async()
            .await;

        let client = client_for(&server);
        let audio = client.synthesize(json!({"text": "hello"})).await.unwrap();

        assert_eq!(audio.content_type, "audio/wav");
        assert_eq!(audio.audio_data, b"RIFF....WAVEfmt ");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_body_text_becomes_details() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/tts")
            .with_status(503)
            .with_body("model is still loading")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.synthesize(json!({"text": "hello"})).await.unwrap_err();

        match err {
            TtsError::ServiceError(details) => assert_eq!(details, "model is still loading"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_error_body_gets_fallback_details() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/tts")
            .with_status(500)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.synthesize(json!({"text": "hello"})).await.unwrap_err();

        match err {
            TtsError::ServiceError(details) => assert_eq!(details, "TTS server error"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"{"status":"healthy"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(client.health_check().await);
    }
}
