// 发音模块
// 调用平台语音合成朗读单词，发出即返回，不等待播放完成
//
// 浏览器: vocab-widget-wasm 通过 Web Speech API 实现
// 其他平台: NullSpeaker，仅记录日志

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 语音配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// 语言代码，固定为单一语言
    pub language: String,
    /// 语速 (0.1 - 10.0, 1.0 为正常)
    pub rate: f32,
    /// 音调 (0.0 - 2.0, 1.0 为正常)
    pub pitch: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            rate: 1.0,
            pitch: 1.0,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpeechError {
    #[error("speech synthesis is not supported on this platform")]
    NotSupported,
    #[error("speech synthesis failed: {0}")]
    SpeakFailed(String),
}

/// 语音合成后端
pub trait Speaker {
    /// 朗读文本；重叠调用的排队行为由平台决定
    fn speak(&self, text: &str, config: &SpeechConfig) -> Result<(), SpeechError>;
}

/// 无语音能力的平台
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&self, text: &str, config: &SpeechConfig) -> Result<(), SpeechError> {
        tracing::debug!(
            text,
            language = %config.language,
            "speech requested without a synthesizer"
        );
        Err(SpeechError::NotSupported)
    }
}
