//! OpenAI Chat Client - 调用 OpenAI 兼容的补全 API
//!
//! 实现 ChatEnginePort trait，通过 HTTP 调用外部补全服务
//!
//! 外部 API:
//! POST {base_url}/chat/completions
//! Request: {"model": "...", "messages": [...], "temperature": ..., "max_tokens": ...}
//! Response: {"choices": [{"message": {"content": "..."}}, ...]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{ChatEnginePort, ChatError, ChatReply, ChatRequest};

/// 补全请求体 (JSON)
#[derive(Debug, Serialize)]
struct ChatCompletionHttpRequest<'a> {
    model: &'a str,
    messages: Vec<ChatCompletionMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

/// 会话消息
#[derive(Debug, Serialize)]
struct ChatCompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// 补全响应体 (JSON)
#[derive(Debug, Deserialize)]
struct ChatCompletionHttpResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI 客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiChatClientConfig {
    /// API 凭据，缺失时每次调用返回 MissingApiKey
    pub api_key: Option<String>,
    /// API 基础 URL
    pub base_url: String,
    /// 补全模型
    pub model: String,
    /// 采样温度
    pub temperature: f32,
    /// 输出长度上限
    pub max_tokens: u32,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for OpenAiChatClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.3,
            max_tokens: 2048,
            timeout_secs: 120,
        }
    }
}

impl OpenAiChatClientConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenAI Chat 客户端
///
/// 凭据在每次调用时校验而不是构造时，未配置凭据的部署
/// 其余端点照常服务
pub struct OpenAiChatClient {
    client: Client,
    config: OpenAiChatClientConfig,
}

impl OpenAiChatClient {
    /// 创建新的 OpenAI Chat 客户端
    pub fn new(config: OpenAiChatClientConfig) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChatError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取补全 URL
    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ChatEnginePort for OpenAiChatClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, ChatError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ChatError::MissingApiKey)?;

        let http_request = ChatCompletionHttpRequest {
            model: &self.config.model,
            messages: vec![
                ChatCompletionMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatCompletionMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        tracing::debug!(
            url = %self.completions_url(),
            model = %self.config.model,
            question_len = request.user.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout
                } else if e.is_connect() {
                    ChatError::NetworkError(format!("Cannot connect to completion API: {}", e))
                } else {
                    ChatError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            // 供应商的 JSON 错误体原样上抛，非 JSON 错误体降级为 InvalidResponse
            return match serde_json::from_str::<serde_json::Value>(&error_text) {
                Ok(payload) => Err(ChatError::Provider {
                    status: status.as_u16(),
                    payload,
                }),
                Err(_) => Err(ChatError::InvalidResponse(format!(
                    "HTTP {}: {}",
                    status, error_text
                ))),
            };
        }

        let completion: ChatCompletionHttpResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(format!("Failed to parse completion: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        tracing::info!(
            model = %self.config.model,
            answer_len = content.len(),
            "Chat completion received"
        );

        Ok(ChatReply { content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard, api_key: Option<&str>) -> OpenAiChatClient {
        let config = OpenAiChatClientConfig::new(api_key.map(String::from))
            .with_base_url(server.url())
            .with_timeout(5);
        OpenAiChatClient::new(config).unwrap()
    }

    fn request() -> ChatRequest {
        ChatRequest {
            system: "be brief".to_string(),
            user: "2+2?".to_string(),
        }
    }

    #[test]
    fn test_config_default() {
        let config = OpenAiChatClientConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.max_tokens, 2048);
    }

    #[tokio::test]
    async fn test_missing_api_key_short_circuits() {
        let server = mockito::Server::new_async().await;
        // 未注册任何 mock：凭据缺失时不应发出请求
        let client = client_for(&server, None);

        let err = client.complete(request()).await.unwrap_err();
        assert!(matches!(err, ChatError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_empty_api_key_counts_as_missing() {
        let server = mockito::Server::new_async().await;
        let client = client_for(&server, Some(""));

        let err = client.complete(request()).await.unwrap_err();
        assert!(matches!(err, ChatError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_first_choice_content_returned() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "temperature": 0.3,
                "max_tokens": 2048,
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "2+2?"},
                ],
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "choices": [
                        {"message": {"role": "assistant", "content": "4"}},
                        {"message": {"role": "assistant", "content": "four"}},
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server, Some("sk-test"));
        let reply = client.complete(request()).await.unwrap();

        assert_eq!(reply.content, "4");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_no_choices_yields_empty_content() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"choices": []}).to_string())
            .create_async()
            .await;

        let client = client_for(&server, Some("sk-test"));
        let reply = client.complete(request()).await.unwrap();

        assert_eq!(reply.content, "");
    }

    #[tokio::test]
    async fn test_provider_json_error_keeps_status_and_payload() {
        let payload = json!({"error": {"message": "Rate limit reached", "type": "requests"}});
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(payload.to_string())
            .create_async()
            .await;

        let client = client_for(&server, Some("sk-test"));
        let err = client.complete(request()).await.unwrap_err();

        match err {
            ChatError::Provider { status, payload: p } => {
                assert_eq!(status, 429);
                assert_eq!(p, payload);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_degrades() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(502)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let client = client_for(&server, Some("sk-test"));
        let err = client.complete(request()).await.unwrap_err();

        match err {
            ChatError::InvalidResponse(msg) => assert!(msg.contains("upstream exploded")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
