//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `SAYSO_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// `chat.api_key` 未配置时回落到裸 `OPENAI_API_KEY` 环境变量，
/// 与原部署约定保持一致
///
/// # 环境变量示例
/// - `SAYSO_SERVER__HOST=127.0.0.1`
/// - `SAYSO_SERVER__PORT=8080`
/// - `SAYSO_CHAT__API_KEY=sk-...`
/// - `SAYSO_TTS__URL=http://tts-server:5000`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("server.static_files.enabled", true)?
        .set_default("server.static_files.dir", "web")?
        .set_default("chat.base_url", "https://api.openai.com/v1")?
        .set_default("chat.model", "gpt-4o-mini")?
        .set_default("chat.temperature", 0.3)?
        .set_default("chat.max_tokens", 2048)?
        .set_default("chat.timeout_secs", 120)?
        .set_default("tts.url", "http://localhost:5000")?
        .set_default("tts.timeout_secs", 120)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: SAYSO_
    // 层级分隔符: __ (双下划线)
    // 例如: SAYSO_CHAT__API_KEY=sk-...
    builder = builder.add_source(
        Environment::with_prefix("SAYSO")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let mut app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 凭据回落到裸 OPENAI_API_KEY 环境变量
    if app_config.chat.api_key.is_none() {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                app_config.chat.api_key = Some(key);
            }
        }
    }

    // 7. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.chat.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Chat API base URL cannot be empty".to_string(),
        ));
    }

    if !(0.0..=2.0).contains(&config.chat.temperature) {
        return Err(ConfigError::ValidationError(format!(
            "Temperature must be between 0 and 2, got {}",
            config.chat.temperature
        )));
    }

    if config.chat.max_tokens == 0 {
        return Err(ConfigError::ValidationError(
            "max_tokens cannot be 0".to_string(),
        ));
    }

    if config.tts.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Base URL: {}", config.server.public_base_url());
    tracing::info!(
        "API Key: {}",
        if config.chat.api_key.is_some() {
            "configured"
        } else {
            "NOT CONFIGURED"
        }
    );
    tracing::info!("Chat API: {}", config.chat.base_url);
    tracing::info!("Chat Model: {}", config.chat.model);
    tracing::info!("Chat Timeout: {}s", config.chat.timeout_secs);
    tracing::info!("TTS URL: {}", config.tts.url);
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::info!(
        "Static Files: {}",
        if config.server.static_files.enabled {
            config.server.static_files.dir.display().to_string()
        } else {
            "disabled".to_string()
        }
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
