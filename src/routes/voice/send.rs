use crate::connectors::{ChatConnector, SpeechConnector};
use crate::forms;
use crate::helpers::{prompt, JsonResponse};
use crate::models;
use actix_web::{post, web, HttpMessage, HttpRequest, Responder, Result};
use serde::Deserialize;
use std::sync::Arc;

const DEFAULT_AUDIO_TYPE: &str = "audio/ogg";

#[derive(Debug, Deserialize)]
pub struct Query {
    pub scenario: Option<String>,
}

/// Essence of the request's audio type; anything missing, unparsable or not audio is sent as ogg.
fn audio_content_type(req: &HttpRequest) -> String {
    match req.mime_type() {
        Ok(Some(mime)) if mime.type_() == "audio" || mime.essence_str() == "video/webm" => {
            mime.essence_str().to_string()
        }
        Ok(_) => DEFAULT_AUDIO_TYPE.to_string(),
        Err(err) => {
            tracing::debug!("unparsable audio content type: {}", err);
            DEFAULT_AUDIO_TYPE.to_string()
        }
    }
}

/// POST /voice?scenario={name}
/// Raw audio body; transcribed, then answered like a chat message.
#[tracing::instrument(
    name = "Voice message.",
    skip(req, body, speech, chat),
    fields(user_id = user.id, bytes = body.len())
)]
#[post("")]
pub async fn send(
    req: HttpRequest,
    user: web::ReqData<Arc<models::User>>,
    query: web::Query<Query>,
    body: web::Bytes,
    speech: web::Data<Arc<dyn SpeechConnector>>,
    chat: web::Data<Arc<dyn ChatConnector>>,
) -> Result<impl Responder> {
    if body.is_empty() {
        return Err(JsonResponse::build().bad_request("Empty audio"));
    }

    let transcript = speech
        .transcribe(body.to_vec(), &audio_content_type(&req))
        .await?;

    let system = prompt::system_prompt(query.scenario.as_deref());
    let answer = chat.complete(&system, &transcript).await?;

    Ok(web::Json(forms::ChatAnswer {
        answer,
        transcript: Some(transcript),
    }))
}
