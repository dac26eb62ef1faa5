use crate::connectors::errors::ConnectorError;
use std::sync::Mutex;

use super::{ChatConnector, SpeechConnector};

/// Chat mock answering with a fixed text and remembering the last prompt it saw
#[derive(Default)]
pub struct MockChatConnector {
    pub answer: String,
    pub last_request: Mutex<Option<(String, String)>>,
}

impl MockChatConnector {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            last_request: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl ChatConnector for MockChatConnector {
    async fn complete(&self, system: &str, text: &str) -> Result<String, ConnectorError> {
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some((system.to_string(), text.to_string()));
        }
        Ok(self.answer.clone())
    }
}

/// Speech mock: `Some(text)` transcribes to `text`, `None` behaves like an outage
pub struct MockSpeechConnector {
    pub transcript: Option<String>,
}

#[async_trait::async_trait]
impl SpeechConnector for MockSpeechConnector {
    async fn transcribe(
        &self,
        _audio: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, ConnectorError> {
        match self.transcript.as_deref().map(str::trim) {
            Some("") => Err(ConnectorError::NoSpeech),
            Some(text) => Ok(text.to_string()),
            None => Err(ConnectorError::ServiceUnavailable(
                "speech service is down".to_string(),
            )),
        }
    }
}
