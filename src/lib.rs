//! Sayso - 问答与语音合成中继服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Question 值对象与固定系统指令对
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ChatEngine, TtsEngine）
//! - Commands: 命令处理器（AskQuestion, SynthesizeSpeech）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 前端静态文件托管
//! - Adapters: OpenAI 补全客户端, HTTP TTS 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
