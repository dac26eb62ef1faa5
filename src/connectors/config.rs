use serde::{Deserialize, Serialize};
use std::fmt;

/// OpenAI-compatible API used for chat completions and speech transcription
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Base URL of the API (e.g., https://api.openai.com/v1)
    pub base_url: String,
    /// Model used for chat answers
    pub chat_model: String,
    /// Model used for voice transcription
    pub transcription_model: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Largest accepted voice message
    #[serde(default = "OpenAiConfig::default_max_audio_bytes")]
    pub max_audio_bytes: usize,
    /// API key (from env: OPENAI_API_KEY)
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl OpenAiConfig {
    const fn default_max_audio_bytes() -> usize {
        10 * 1024 * 1024
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4.1-mini".to_string(),
            transcription_model: "whisper-1".to_string(),
            timeout_secs: 60,
            max_audio_bytes: Self::default_max_audio_bytes(),
            api_key: None,
        }
    }
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("base_url", &self.base_url)
            .field("chat_model", &self.chat_model)
            .field("transcription_model", &self.transcription_model)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_audio_bytes", &self.max_audio_bytes)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}
