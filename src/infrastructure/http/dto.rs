//! Data Transfer Objects

use serde::{Deserialize, Serialize};

/// /api/generate 请求体
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// 用户提问；字段缺失时按空串处理，由应用层拒绝
    #[serde(default)]
    pub questions: String,
}

/// /api/generate 成功响应
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}
