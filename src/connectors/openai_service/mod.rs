//! OpenAI-compatible chat and speech connector

use actix_web::web;
use std::sync::Arc;

use crate::connectors::config::OpenAiConfig;

pub mod client;
pub mod connector;
#[cfg(test)]
pub mod mock;

pub use client::OpenAiClient;
pub use connector::{ChatConnector, SpeechConnector};

/// Builds the AI connectors and wraps them in web::Data for injection into the Actix app.
///
/// One HTTP client serves both traits.
pub fn init(
    config: &OpenAiConfig,
) -> (
    web::Data<Arc<dyn ChatConnector>>,
    web::Data<Arc<dyn SpeechConnector>>,
) {
    if config.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set - chat and voice requests will fail with 503");
    }
    tracing::info!("Initializing AI connector: {}", config.base_url);

    let client = Arc::new(OpenAiClient::new(config.clone()));
    let chat: Arc<dyn ChatConnector> = client.clone();
    let speech: Arc<dyn SpeechConnector> = client;

    (web::Data::new(chat), web::Data::new(speech))
}
