//! Sayso - 问答与语音合成中继服务
//!
//! 三个中继端点加一个静态前端：
//! - /api/generate: 提问 → 补全 API → 答案文本
//! - /api/tts: 文本 → 下游合成服务 → WAV 音频
//! - /api/ping: 健康检查

use std::sync::Arc;

use sayso::application::TtsEnginePort;
use sayso::config::{load_config, print_config};
use sayso::infrastructure::adapters::{
    HttpTtsClient, HttpTtsClientConfig, OpenAiChatClient, OpenAiChatClientConfig,
};
use sayso::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},sayso={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Sayso - Q&A relay with speech synthesis");
    print_config(&config);

    // 创建补全客户端（凭据缺失时照常启动，/api/generate 按请求返回 500）
    let chat_config = OpenAiChatClientConfig {
        api_key: config.chat.api_key.clone(),
        base_url: config.chat.base_url.clone(),
        model: config.chat.model.clone(),
        temperature: config.chat.temperature,
        max_tokens: config.chat.max_tokens,
        timeout_secs: config.chat.timeout_secs,
    };
    let chat_engine = Arc::new(OpenAiChatClient::new(chat_config)?);

    // 创建 HTTP TTS 客户端
    let tts_config = HttpTtsClientConfig {
        base_url: config.tts.url.clone(),
        timeout_secs: config.tts.timeout_secs,
    };
    let tts_engine = Arc::new(HttpTtsClient::new(tts_config)?);

    // 下游合成服务可用性提示（不可用不阻止启动）
    if !tts_engine.health_check().await {
        tracing::warn!(url = %config.tts.url, "TTS service is not reachable at startup");
    }

    // 创建 HTTP 服务器
    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    if config.server.static_files.enabled {
        server_config = server_config.with_static_dir(config.server.static_files.dir.clone());
    }
    let state = AppState::new(chat_engine, tts_engine);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
