use axum::{
    async_trait,
    extract::FromRequest,
    http::Request,
    Json, RequestExt,
};
use lazy_static::lazy_static;
use regex::Regex;
use validator::{Validate, ValidationErrors};

use super::AppError;
use crate::constants::*;

lazy_static! {
    static ref NON_PHONE_CHARS: Regex =
        Regex::new(r"[^0-9+]").expect("not able to compile phone cleanup regex");
}

/// Normalize a raw phone number: strip every character except digits
/// and a leading `+`, then check the length bounds.
pub fn normalize_phone(phone: &str) -> Result<String, AppError> {
    let stripped = NON_PHONE_CHARS.replace_all(phone, "");
    let mut normalized = String::with_capacity(stripped.len());
    for (idx, ch) in stripped.chars().enumerate() {
        if ch != '+' || idx == 0 {
            normalized.push(ch);
        }
    }
    if normalized.len() < PHONE_MIN_LEN || normalized.len() > PHONE_MAX_LEN {
        let err = AppError::Validation("Invalid phone number format".into());
        return Err(err);
    }
    Ok(normalized)
}

pub struct ValidatedBody<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for ValidatedBody<T>
where
    B: Send + 'static,
    S: Send + Sync,
    T: Validate + 'static,
    Json<T>: FromRequest<(), B>,
{
    type Rejection = AppError;

    async fn from_request(req: Request<B>, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = req
            .extract::<Json<T>, _>()
            .await
            .map_err(|_| AppError::Validation("Invalid JSON body".into()))?;
        data.validate()
            .map_err(|err| AppError::Validation(first_error_message(&err)))?;
        Ok(Self(data))
    }
}

/// Pick the first custom message out of the validator errors so the
/// client sees the field message instead of the full error dump
fn first_error_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|msg| msg.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
