use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, HttpResponse, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

/// POST /diary
/// Stores one entry for the logged-in user.
#[tracing::instrument(name = "Add diary entry.", skip(form, pg_pool))]
#[post("")]
pub async fn add(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::DiaryForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        let errors = errors.to_string();
        tracing::debug!("Invalid diary entry received {:?}", &errors);
        return Err(JsonResponse::build().form_error(errors));
    }

    let entry = form.into_entry(user.id);
    db::diary::insert(pg_pool.get_ref(), entry)
        .await
        .map(|entry| {
            tracing::info!("Diary entry {} saved", entry.id);
            HttpResponse::Created().json(forms::DiarySaved {
                ok: true,
                id: entry.id,
            })
        })
        .map_err(|err| JsonResponse::build().internal_server_error(err))
}
