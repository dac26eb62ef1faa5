//! Verification of the signed session payload ("init data") the mini-app host
//! passes to the front-end.
//!
//! The payload is a URL query string. Its `hash` field is
//! `hex(HMAC-SHA256(HMAC-SHA256("WebAppData", bot_token), check_string))`,
//! where the check string is every other field rendered as `key=value`,
//! sorted by key and joined by `\n`.

use crate::models;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::BTreeMap;

type HmacSha256 = Hmac<Sha256>;

const KEY_DERIVATION_CONSTANT: &[u8] = b"WebAppData";
const SIGNATURE_FIELD: &str = "hash";
const USER_FIELD: &str = "user";
const AUTH_DATE_FIELD: &str = "auth_date";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Empty payload, or one that is not a well-formed query string.
    #[error("session payload is empty or malformed")]
    EmptyPayload,
    #[error("session payload is not signed")]
    MissingSignature,
    #[error("session signature does not match")]
    SignatureMismatch,
    #[error("user claim is missing or malformed")]
    MalformedUserClaim,
    #[error("session is older than {0} seconds")]
    Expired(u64),
    #[error("signing secret is not configured")]
    Unconfigured,
}

/// Result of a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitData {
    /// All signed fields except `hash`, keyed in check-string order.
    pub claims: BTreeMap<String, String>,
    pub user_id: i64,
    pub user: models::User,
}

/// Checks the signature of `payload` against `secret` and extracts the user.
///
/// Pure: the signing key is derived again on every call and nothing is cached.
pub fn validate(payload: &str, secret: &str) -> Result<InitData, AuthError> {
    if payload.is_empty() {
        return Err(AuthError::EmptyPayload);
    }

    let mut claims = parse_query(payload)?;
    let received = claims
        .remove(SIGNATURE_FIELD)
        .ok_or(AuthError::MissingSignature)?;

    let expected = sign(&check_string(&claims), secret)?;
    if !constant_time_eq(expected.as_bytes(), received.as_bytes()) {
        return Err(AuthError::SignatureMismatch);
    }

    let user = parse_user(&claims)?;

    Ok(InitData {
        user_id: user.id,
        user,
        claims,
    })
}

/// Rejects sessions whose `auth_date` is older than `max_age_secs`. Zero disables the check.
pub fn check_freshness(data: &InitData, max_age_secs: u64, now: i64) -> Result<(), AuthError> {
    if max_age_secs == 0 {
        return Ok(());
    }

    let auth_date = data
        .claims
        .get(AUTH_DATE_FIELD)
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or(AuthError::Expired(max_age_secs))?;

    let max_age = i64::try_from(max_age_secs).unwrap_or(i64::MAX);
    if now.saturating_sub(auth_date) > max_age {
        return Err(AuthError::Expired(max_age_secs));
    }

    Ok(())
}

/// Strict query-string parsing: every `&`-separated segment must contain `=`.
/// Later duplicates overwrite earlier ones; fields with blank values are skipped.
pub fn parse_query(payload: &str) -> Result<BTreeMap<String, String>, AuthError> {
    let mut fields = BTreeMap::new();

    for pair in payload.split('&') {
        let (key, value) = pair.split_once('=').ok_or(AuthError::EmptyPayload)?;
        let value = decode_component(value)?;
        if value.is_empty() {
            continue;
        }
        fields.insert(decode_component(key)?, value);
    }

    Ok(fields)
}

fn decode_component(raw: &str) -> Result<String, AuthError> {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| AuthError::EmptyPayload)
}

pub fn check_string(claims: &BTreeMap<String, String>) -> String {
    claims
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn sign(check_string: &str, secret: &str) -> Result<String, AuthError> {
    let mut mac = new_mac(KEY_DERIVATION_CONSTANT)?;
    mac.update(secret.as_bytes());
    let derived_key = mac.finalize().into_bytes();

    let mut mac = new_mac(&derived_key)?;
    mac.update(check_string.as_bytes());

    Ok(format!("{:x}", mac.finalize().into_bytes()))
}

fn new_mac(key: &[u8]) -> Result<HmacSha256, AuthError> {
    HmacSha256::new_from_slice(key).map_err(|err| {
        tracing::error!("error generating hmac {err:?}");
        AuthError::SignatureMismatch
    })
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

fn parse_user(claims: &BTreeMap<String, String>) -> Result<models::User, AuthError> {
    let raw = claims
        .get(USER_FIELD)
        .ok_or(AuthError::MalformedUserClaim)?;

    // derived Deserialize would also read a struct from a JSON array
    let object = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(raw)
        .map_err(|err| {
            tracing::debug!("user claim is not an object: {}", err);
            AuthError::MalformedUserClaim
        })?;

    serde_json::from_value::<models::User>(serde_json::Value::Object(object)).map_err(|err| {
        tracing::debug!("user claim rejected: {}", err);
        AuthError::MalformedUserClaim
    })
}
