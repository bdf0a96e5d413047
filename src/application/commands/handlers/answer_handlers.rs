//! Answer Command Handlers

use std::sync::Arc;

use crate::application::commands::ask_commands::AskQuestion;
use crate::application::error::ApplicationError;
use crate::application::ports::{ChatEnginePort, ChatRequest};
use crate::domain::{system_instruction, Question};

/// AskQuestion Handler - 校验提问并调用补全引擎
pub struct AskQuestionHandler {
    chat_engine: Arc<dyn ChatEnginePort>,
}

impl AskQuestionHandler {
    pub fn new(chat_engine: Arc<dyn ChatEnginePort>) -> Self {
        Self { chat_engine }
    }

    pub async fn handle(&self, cmd: AskQuestion) -> Result<String, ApplicationError> {
        // 空白提问直接拒绝，不发起外部调用
        let question = Question::new(cmd.questions).map_err(ApplicationError::validation)?;

        tracing::debug!(question_chars = question.char_count(), "Dispatching completion");

        let reply = self
            .chat_engine
            .complete(ChatRequest {
                system: system_instruction(),
                user: question.into_inner(),
            })
            .await?;

        tracing::info!(answer_len = reply.content.len(), "Completion finished");

        Ok(reply.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ChatError;
    use crate::infrastructure::adapters::FakeChatClient;

    #[tokio::test]
    async fn test_blank_question_never_reaches_engine() {
        let engine = Arc::new(FakeChatClient::replying("unused"));
        let handler = AskQuestionHandler::new(engine.clone());

        let result = handler
            .handle(AskQuestion {
                questions: "   \n ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_answer_passes_through() {
        let engine = Arc::new(FakeChatClient::replying("4"));
        let handler = AskQuestionHandler::new(engine.clone());

        let answer = handler
            .handle(AskQuestion {
                questions: "2+2?".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(answer, "4");
        assert_eq!(engine.call_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_error_propagates_with_payload() {
        let payload = serde_json::json!({"error": {"message": "rate limited"}});
        let engine = Arc::new(FakeChatClient::provider_error(429, payload.clone()));
        let handler = AskQuestionHandler::new(engine);

        let err = handler
            .handle(AskQuestion {
                questions: "2+2?".to_string(),
            })
            .await
            .unwrap_err();

        match err {
            ApplicationError::ChatEngine(ChatError::Provider { status, payload: p }) => {
                assert_eq!(status, 429);
                assert_eq!(p, payload);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_question_is_trimmed_before_dispatch() {
        let engine = Arc::new(FakeChatClient::replying("ok"));
        let handler = AskQuestionHandler::new(engine.clone());

        handler
            .handle(AskQuestion {
                questions: "  why?  ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(engine.last_user_message().as_deref(), Some("why?"));
    }
}
