use crate::configuration::AuthSettings;
use crate::middleware::authentication::get_header;
use crate::middleware::authentication::init_data::{self, AuthError};
use actix_web::dev::ServiceRequest;
use actix_web::HttpMessage;
use std::sync::Arc;

pub const INIT_DATA_HEADER: &str = "x-telegram-initdata";

#[tracing::instrument(name = "Authenticate with session init data", skip(req, auth))]
pub fn try_init_data(req: &mut ServiceRequest, auth: &AuthSettings) -> Result<(), AuthError> {
    let secret = auth.bot_token.as_deref().ok_or(AuthError::Unconfigured)?;

    let payload = get_header::<String>(req, INIT_DATA_HEADER)
        .map_err(|err| {
            tracing::debug!("{}", err);
            AuthError::EmptyPayload
        })?
        .unwrap_or_default();

    let data = init_data::validate(&payload, secret)?;
    init_data::check_freshness(&data, auth.max_age_secs, chrono::Utc::now().timestamp())?;

    tracing::debug!(user_id = data.user_id, "session validated");
    if req.extensions_mut().insert(Arc::new(data.user)).is_some() {
        tracing::warn!("user was already set on the request");
    }

    Ok(())
}
