//! # Extractors
//!
//! Request extractors that report failures through [`AppError`], so malformed
//! bodies and path ids get the same `{error, message}` body as every other error.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use lib_core::{AppError, Result};
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejection is a 400 `ValidationError`.
///
/// Covers malformed JSON, missing fields, wrong types, unknown enum values and
/// a missing `Content-Type: application/json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ValidJson(value))
    }
}

/// Parse a raw path segment as a record id: unsigned 32-bit decimal, no sign or padding.
///
/// `entity` names the resource in the error, e.g. "Asset ID must be a valid number".
pub fn parse_id(raw: &str, entity: &str) -> Result<i64> {
    let invalid = || AppError::InvalidInput(format!("{entity} ID must be a valid number"));

    if raw.starts_with('+') {
        return Err(invalid());
    }

    raw.parse::<u32>().map(i64::from).map_err(|_| invalid())
}
