use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// GET /diary
/// Latest entries of the logged-in user, newest first.
#[tracing::instrument(name = "List diary entries.", skip(pg_pool))]
#[get("")]
pub async fn list(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::diary::fetch_latest(pg_pool.get_ref(), user.id, db::diary::DEFAULT_PAGE_SIZE)
        .await
        .map(|items| web::Json(forms::DiaryPage { items }))
        .map_err(|err| JsonResponse::build().internal_server_error(err))
}
