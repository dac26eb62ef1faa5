use crate::connectors::config::OpenAiConfig;
use crate::connectors::errors::ConnectorError;
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use super::connector::{ChatConnector, SpeechConnector};

/// HTTP client for an OpenAI-compatible API
pub struct OpenAiClient {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) api_key: Option<String>,
    pub(crate) chat_model: String,
    pub(crate) transcription_model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        let timeout = std::time::Duration::from_secs(config.timeout_secs);
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
            api_key: config.api_key,
            chat_model: config.chat_model,
            transcription_model: config.transcription_model,
        }
    }

    fn bearer(&self) -> Result<String, ConnectorError> {
        self.api_key
            .as_ref()
            .map(|key| format!("Bearer {}", key))
            .ok_or_else(|| ConnectorError::ServiceUnavailable("OPENAI_API_KEY is not set".to_string()))
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ConnectorError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ConnectorError::from_status(status, body))
    }
}

/// Upload file name for the audio; the transcription API infers the format from its extension.
fn audio_file_name(content_type: &str) -> &'static str {
    let mime = content_type.split(';').next().unwrap_or("").trim();
    match mime {
        "audio/webm" | "video/webm" => "voice.webm",
        "audio/mpeg" | "audio/mp3" => "voice.mp3",
        "audio/mp4" | "audio/m4a" | "audio/x-m4a" => "voice.m4a",
        "audio/wav" | "audio/x-wav" | "audio/wave" => "voice.wav",
        _ => "voice.ogg",
    }
}

#[async_trait::async_trait]
impl ChatConnector for OpenAiClient {
    async fn complete(&self, system: &str, text: &str) -> Result<String, ConnectorError> {
        let span = tracing::info_span!("AI chat completion", model = %self.chat_model);
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.chat_model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", self.bearer()?)
            .json(&request)
            .send()
            .instrument(span)
            .await?;

        let response: ChatResponse = Self::check_status(response).await?.json().await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ConnectorError::InvalidResponse("No content in response".to_string()))
    }
}

#[async_trait::async_trait]
impl SpeechConnector for OpenAiClient {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ConnectorError> {
        let span = tracing::info_span!(
            "AI transcription",
            model = %self.transcription_model,
            bytes = audio.len()
        );
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file = reqwest::multipart::Part::bytes(audio)
            .file_name(audio_file_name(content_type))
            .mime_str(content_type)
            .map_err(|err| ConnectorError::HttpError(format!("Invalid audio type: {}", err)))?;
        let form = reqwest::multipart::Form::new()
            .text("model", self.transcription_model.clone())
            .part("file", file);

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", self.bearer()?)
            .multipart(form)
            .send()
            .instrument(span)
            .await?;

        let response: TranscriptionResponse = Self::check_status(response).await?.json().await?;

        let transcript = response.text.trim().to_string();
        if transcript.is_empty() {
            return Err(ConnectorError::NoSpeech);
        }

        Ok(transcript)
    }
}
