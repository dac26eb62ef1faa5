use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;

/// Errors that can occur during external service communication
#[derive(Debug)]
pub enum ConnectorError {
    /// HTTP request/response error
    HttpError(String),
    /// Service unreachable, timed out or not configured
    ServiceUnavailable(String),
    /// Invalid response format from external service
    InvalidResponse(String),
    /// The service rejected our credentials (401/403)
    Unauthorized(String),
    /// Rate limited or exceeded quota
    RateLimited(String),
    /// Audio was transcribed but contained no speech
    NoSpeech,
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            Self::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            Self::NoSpeech => write!(f, "No speech detected"),
        }
    }
}

impl ConnectorError {
    /// Maps a non-success status of the upstream API.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        let msg = format!("HTTP {}: {}", status, body);
        match status.as_u16() {
            401 | 403 => Self::Unauthorized(msg),
            429 => Self::RateLimited(msg),
            500..=599 => Self::ServiceUnavailable(msg),
            _ => Self::HttpError(msg),
        }
    }
}

impl ResponseError for ConnectorError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::HttpError(_) => "External service error",
            Self::ServiceUnavailable(_) => "Service unavailable",
            Self::InvalidResponse(_) => "Invalid external service response",
            // our credentials towards the AI service, not the caller's
            Self::Unauthorized(_) => "External service rejected credentials",
            Self::RateLimited(_) => "Rate limit exceeded",
            Self::NoSpeech => "No speech detected",
        };

        tracing::warn!("connector error: {}", self);
        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::HttpError(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            Self::Unauthorized(_) => StatusCode::BAD_GATEWAY,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::NoSpeech => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}
