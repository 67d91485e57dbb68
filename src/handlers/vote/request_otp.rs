use axum::Json;
use mongodb::bson::doc;
use mongodb::options::UpdateOptions;
use serde_json::{json, Value as JsonValue};

use super::VoteActionReq;
use crate::{
    app::AppState,
    constants::*,
    utils::{generate_otp, get_epoch_ts, normalize_phone, AppError},
};

/// Generate a fresh OTP for the phone and upsert the voter record.
/// Any previously pending code for the same phone is replaced and
/// the verified flag is reset. A single upsert keyed by the
/// normalized phone avoids a separate exists-then-write round trip.
pub async fn request_otp(
    state: &AppState,
    body: VoteActionReq,
) -> Result<Json<JsonValue>, AppError> {
    let phone = body
        .phone_number
        .as_deref()
        .ok_or(AppError::Validation("Phone number is required".into()))?;
    let phone = normalize_phone(phone)?;
    let otp = generate_otp();
    let ts = get_epoch_ts();
    let expires_at = ts + OTP_VALIDITY_MINS * 60;
    let filter = doc! {"phoneNumber": &phone};
    let update = doc! {
        "$set": {
            "otpCode": &otp,
            "otpExpiresAt": expires_at as i64,
            "verified": false,
            "updatedTs": ts as i64
        },
        "$setOnInsert": {"createdTs": ts as i64}
    };
    let mut options = UpdateOptions::default();
    options.upsert = Some(true);
    state
        .db
        .update_one(DB_NAME, COLL_VOTERS, filter, update, Some(options))
        .await?;
    send_otp(&phone, &otp);
    let mut res = json!({"success": true, "message": "OTP sent to your phone"});
    if state.config.otp_demo_mode {
        res["demo_otp"] = json!(otp);
    }
    Ok(Json(res))
}

// send otp to a given phone. SMS gateway API or SMS queue API to be called from here
fn send_otp(phone: &str, otp: &str) {
    tracing::debug!("Send otp {otp} to phone {phone}");
}
