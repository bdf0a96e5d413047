//! Speech Command Handlers

use std::sync::Arc;

use crate::application::commands::speech_commands::SynthesizeSpeech;
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechAudio, TtsEnginePort};

/// SynthesizeSpeech Handler - 原样转发请求体给合成引擎
pub struct SynthesizeSpeechHandler {
    tts_engine: Arc<dyn TtsEnginePort>,
}

impl SynthesizeSpeechHandler {
    pub fn new(tts_engine: Arc<dyn TtsEnginePort>) -> Self {
        Self { tts_engine }
    }

    pub async fn handle(&self, cmd: SynthesizeSpeech) -> Result<SpeechAudio, ApplicationError> {
        let audio = self.tts_engine.synthesize(cmd.payload).await?;

        tracing::info!(
            audio_size = audio.audio_data.len(),
            content_type = %audio.content_type,
            "Speech synthesis finished"
        );

        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::TtsError;
    use crate::infrastructure::adapters::FakeTtsClient;

    #[tokio::test]
    async fn test_payload_forwarded_verbatim() {
        let engine = Arc::new(FakeTtsClient::with_audio(b"RIFFdata".to_vec(), "audio/wav"));
        let handler = SynthesizeSpeechHandler::new(engine.clone());

        let payload = serde_json::json!({"text": "hello", "extra": 1});
        let audio = handler
            .handle(SynthesizeSpeech {
                payload: payload.clone(),
            })
            .await
            .unwrap();

        assert_eq!(audio.audio_data, b"RIFFdata");
        assert_eq!(audio.content_type, "audio/wav");
        assert_eq!(engine.last_payload(), Some(payload));
    }

    #[tokio::test]
    async fn test_downstream_error_propagates() {
        let engine = Arc::new(FakeTtsClient::failing("model not loaded"));
        let handler = SynthesizeSpeechHandler::new(engine);

        let err = handler
            .handle(SynthesizeSpeech {
                payload: serde_json::json!({"text": "hello"}),
            })
            .await
            .unwrap_err();

        match err {
            ApplicationError::TtsEngine(TtsError::ServiceError(details)) => {
                assert_eq!(details, "model not loaded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
