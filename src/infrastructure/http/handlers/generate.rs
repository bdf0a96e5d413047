//! Generate Handler - 问答中继
//!
//! 单发补全：校验提问、附加固定系统指令、调用一次补全 API、
//! 返回首个候选的文本。无重试、无流式、无会话记忆

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::AskQuestion;
use crate::infrastructure::http::dto::{GenerateRequest, GenerateResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /api/generate
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let result = state
        .ask_question_handler
        .handle(AskQuestion {
            questions: req.questions,
        })
        .await?;

    Ok(Json(GenerateResponse { result }))
}
