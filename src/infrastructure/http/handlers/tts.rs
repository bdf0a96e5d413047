//! TTS Handler - 语音合成中继
//!
//! 请求体原样转发下游，音频整段读入后一次性写回，
//! Content-Type / Content-Length 与实际响应体一致

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::application::SynthesizeSpeech;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /api/tts
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let audio = state
        .synthesize_speech_handler
        .handle(SynthesizeSpeech { payload })
        .await?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, audio.content_type)
        .header(header::CONTENT_LENGTH, audio.audio_data.len())
        .body(Body::from(audio.audio_data))
        .unwrap())
}

/// OPTIONS /api/tts - 预检一律应答 200 空响应
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// POST/OPTIONS 之外的方法
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({"error": "Method not allowed"})),
    )
        .into_response()
}
