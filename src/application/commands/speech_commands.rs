//! Speech Commands - 语音合成命令

/// 语音合成命令
///
/// `payload` 为调用方的原始 JSON 请求体，原样转发给下游合成服务
#[derive(Debug, Clone)]
pub struct SynthesizeSpeech {
    pub payload: serde_json::Value,
}
