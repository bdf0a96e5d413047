//! HTTP Layer - RESTful API
//!
//! 三个端点：
//! - /api/ping      GET   健康检查
//! - /api/generate  POST  问答中继
//! - /api/tts       POST  语音合成中继（OPTIONS 应答预检，其余方法 405）

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
