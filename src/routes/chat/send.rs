use crate::connectors::ChatConnector;
use crate::forms;
use crate::helpers::{prompt, JsonResponse};
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

/// POST /chat
/// Sends the user's message, framed by the counsellor prompt, to the language model.
#[tracing::instrument(name = "Chat message.", skip(form, chat), fields(user_id = user.id))]
#[post("")]
pub async fn send(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::ChatForm>,
    chat: web::Data<Arc<dyn ChatConnector>>,
) -> Result<impl Responder> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    let system = prompt::system_prompt(form.scenario.as_deref());
    let answer = chat.complete(&system, &form.text).await?;

    Ok(web::Json(forms::ChatAnswer {
        answer,
        transcript: None,
    }))
}
