//! Question - 用户提问值对象

use serde::{Deserialize, Serialize};

/// 用户提问
///
/// 构造时去除首尾空白，拒绝空内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question(String);

impl Question {
    pub fn new(text: impl Into<String>) -> Result<Self, &'static str> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err("Please enter a valid question");
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// 提问长度（字符数，用于日志）
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
