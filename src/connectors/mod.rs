//! External Service Connectors
//!
//! Adapters for the hosted services this backend proxies to. Routes depend on
//! the connector traits only, so tests inject mocks instead of HTTP clients.
//!
//! ## Usage in Routes
//!
//! ```ignore
//! pub async fn handler(
//!     chat: web::Data<Arc<dyn ChatConnector>>,
//! ) -> Result<impl Responder> {
//!     let answer = chat.complete(&system, &text).await?;
//! }
//! ```

pub mod config;
pub mod errors;
pub mod openai_service;

pub use config::OpenAiConfig;
pub use errors::ConnectorError;
pub use openai_service::{ChatConnector, OpenAiClient, SpeechConnector};

pub use openai_service::init as init_openai;
