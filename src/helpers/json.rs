use actix_web::error::{Error, InternalError};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use std::fmt;

/// Body of every error answer: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct JsonResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct JsonResponseBuilder {
    message: String,
}

impl JsonResponse {
    pub fn build() -> JsonResponseBuilder {
        JsonResponseBuilder {
            message: String::new(),
        }
    }
}

impl JsonResponseBuilder {
    pub fn set_msg<I: Into<String>>(mut self, msg: I) -> Self {
        self.message = msg.into();
        self
    }

    fn to_json_response(self) -> JsonResponse {
        JsonResponse {
            message: self.message,
        }
    }

    fn error<I: Into<String>>(self, status: StatusCode, msg: I) -> Error {
        let builder = self.set_msg(msg);
        let message = builder.message.clone();
        InternalError::from_response(
            message,
            HttpResponse::build(status).json(builder.to_json_response()),
        )
        .into()
    }

    pub fn bad_request<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::BAD_REQUEST, msg)
    }

    pub fn form_error<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::UNPROCESSABLE_ENTITY, msg)
    }

    pub fn internal_server_error<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}

impl fmt::Display for JsonResponseBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", json)
    }
}
