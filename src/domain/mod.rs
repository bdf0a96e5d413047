//! 领域层 - 问答上下文
//!
//! 只包含两个稳定的领域概念：
//! - Question: 用户提问的值对象（非空校验）
//! - prompt: 固定的系统指令对（安全指令 + 行为指令）

pub mod prompt;
pub mod question;

pub use prompt::system_instruction;
pub use question::Question;
