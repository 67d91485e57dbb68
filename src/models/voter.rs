use mongodb::bson::serde_helpers::hex_string_as_object_id;
use serde::Deserialize;

/// A phone-verified (or pending) voter. The record is upserted on
/// every OTP request keyed by the normalized phone number, so there
/// is never more than one row per phone.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    #[serde(deserialize_with = "hex_string_as_object_id::deserialize")]
    #[serde(rename = "_id")]
    pub id: String,
    pub phone_number: String,
    pub otp_code: Option<String>,
    pub otp_expires_at: Option<u64>,
    #[serde(default)]
    pub verified: bool,
    pub created_ts: Option<u64>,
    pub updated_ts: Option<u64>,
}
