//! Ask Commands - 问答命令

/// 提问命令 - 单次问答，无会话记忆
///
/// `questions` 为用户原始输入，可能含首尾空白，由处理器校验
#[derive(Debug, Clone)]
pub struct AskQuestion {
    pub questions: String,
}
