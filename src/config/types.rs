//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 补全 API 配置
    #[serde(default)]
    pub chat: ChatConfig,

    /// TTS 下游配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 公开访问的 Base URL（前端从其他源访问中继时使用）
    /// 如果未设置，则使用 http://{host}:{port}
    #[serde(default)]
    pub base_url: Option<String>,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取公开的 Base URL
    pub fn public_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            let host = if self.host == "0.0.0.0" {
                "localhost"
            } else {
                &self.host
            };
            format!("http://{}:{}", host, self.port)
        })
    }
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否托管前端
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 前端文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

fn default_static_enabled() -> bool {
    true
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
        }
    }
}

/// 补全 API 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// API 凭据；配置缺失时回落到 OPENAI_API_KEY 环境变量
    #[serde(default)]
    pub api_key: Option<String>,

    /// API 基础 URL
    #[serde(default = "default_chat_base_url")]
    pub base_url: String,

    /// 补全模型
    #[serde(default = "default_chat_model")]
    pub model: String,

    /// 采样温度
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// 输出长度上限
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// 请求超时时间（秒）
    #[serde(default = "default_chat_timeout")]
    pub timeout_secs: u64,
}

fn default_chat_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_chat_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_chat_timeout() -> u64 {
    120
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_chat_base_url(),
            model: default_chat_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_chat_timeout(),
        }
    }
}

/// TTS 下游配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// TTS 服务基础 URL
    #[serde(default = "default_tts_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,
}

fn default_tts_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_tts_timeout() -> u64 {
    120
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            url: default_tts_url(),
            timeout_secs: default_tts_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.chat.model, "gpt-4o-mini");
        assert_eq!(config.chat.temperature, 0.3);
        assert_eq!(config.chat.max_tokens, 2048);
        assert_eq!(config.tts.url, "http://localhost:5000");
        assert!(config.server.static_files.enabled);
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_public_base_url_falls_back_to_localhost() {
        let config = ServerConfig::default();
        assert_eq!(config.public_base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_public_base_url_prefers_explicit_value() {
        let config = ServerConfig {
            base_url: Some("https://ask.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(config.public_base_url(), "https://ask.example.com");
    }
}
