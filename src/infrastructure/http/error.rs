//! HTTP Error Handling
//!
//! 两个中继端点的线上错误格式不同：
//! - /api/generate: {"error": {"message": "..."}}，供应商错误原样转发
//! - /api/tts:      {"error": "...", "details": "..."}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::{ApplicationError, ChatError, TtsError};

/// 凭据未配置时的固定提示
const MISSING_API_KEY_MESSAGE: &str =
    "OpenAI API key not configured, please follow instructions.";

/// 补全调用失败时的通用提示（不向调用方泄露内部细节）
const GENERIC_COMPLETION_MESSAGE: &str = "An error occurred during your request.";

/// 合成失败时的固定 error 字段
const SYNTHESIS_FAILED_MESSAGE: &str = "Failed to generate speech";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 凭据未配置
    MissingApiKey,
    /// 请求校验失败
    BadRequest(String),
    /// 供应商错误 - 原状态码与响应体原样转发
    Upstream {
        status: StatusCode,
        payload: serde_json::Value,
    },
    /// 补全调用失败（网络/超时/响应不可解析）
    Completion(String),
    /// 语音合成失败
    Synthesis { details: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingApiKey => {
                tracing::error!("Completion API key not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": {"message": MISSING_API_KEY_MESSAGE}})),
                )
                    .into_response()
            }
            ApiError::BadRequest(message) => {
                tracing::warn!(error = %message, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": {"message": message}})),
                )
                    .into_response()
            }
            ApiError::Upstream { status, payload } => {
                tracing::error!(status = status.as_u16(), "Relaying provider error");
                (status, Json(payload)).into_response()
            }
            ApiError::Completion(detail) => {
                tracing::error!(error = %detail, "Completion request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": {"message": GENERIC_COMPLETION_MESSAGE}})),
                )
                    .into_response()
            }
            ApiError::Synthesis { details } => {
                tracing::error!(details = %details, "Speech synthesis failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": SYNTHESIS_FAILED_MESSAGE, "details": details})),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::ChatEngine(chat) => match chat {
                ChatError::MissingApiKey => ApiError::MissingApiKey,
                ChatError::Provider { status, payload } => ApiError::Upstream {
                    status: StatusCode::from_u16(status)
                        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    payload,
                },
                other => ApiError::Completion(other.to_string()),
            },
            ApplicationError::TtsEngine(tts) => match tts {
                TtsError::ServiceError(details) => ApiError::Synthesis { details },
                other => ApiError::Synthesis {
                    details: other.to_string(),
                },
            },
        }
    }
}
