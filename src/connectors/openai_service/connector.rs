use crate::connectors::errors::ConnectorError;

/// Language model answering chat turns.
#[async_trait::async_trait]
pub trait ChatConnector: Send + Sync {
    /// Single-turn completion: `system` frames the assistant, `text` is the user's message.
    async fn complete(&self, system: &str, text: &str) -> Result<String, ConnectorError>;
}

/// Speech-to-text service for voice messages.
#[async_trait::async_trait]
pub trait SpeechConnector: Send + Sync {
    /// Returns the non-empty transcript, or `ConnectorError::NoSpeech` when the
    /// audio was processed but nothing was said.
    async fn transcribe(&self, audio: Vec<u8>, content_type: &str)
        -> Result<String, ConnectorError>;
}
