//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping      GET      健康检查
//! - /api/generate  POST     问答中继
//! - /api/tts       POST     语音合成中继
//! - /api/tts       OPTIONS  CORS 预检应答
//! - /api/tts       其余方法  405

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/generate", post(handlers::generate))
        .route(
            "/tts",
            post(handlers::synthesize)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
}
