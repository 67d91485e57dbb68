use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    app::AppState,
    utils::{AppError, ValidatedBody},
};

pub mod check_vote_status;
pub mod get_results;
pub mod helper;
pub mod request_otp;
pub mod verify_and_vote;

/// Request body for the vote action endpoint. The `action` field
/// selects the operation; which of the remaining fields are required
/// depends on the action. Phone format is checked per action, a
/// malformed phone is a validation failure only where a code gets
/// issued for it.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VoteActionReq {
    pub action: Option<String>,
    pub phone_number: Option<String>,
    pub otp_code: Option<String>,
    pub contestant_id: Option<String>,
    pub category: Option<String>,
}

/// Vote endpoint
///
/// Single dispatch endpoint for all voter-facing operations:
/// `request_otp`, `verify_and_vote`, `get_results` and
/// `check_vote_status`
#[utoipa::path(
    post,
    path = "/api/v1/vote",
    request_body = VoteActionReq,
    responses(
        (status = 200, description = "Action executed successfully"),
        (status = 400, description = "Validation, OTP or duplicate vote failure", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Voting API"
)]
pub async fn vote_action_handler(
    State(state): State<AppState>,
    ValidatedBody(body): ValidatedBody<VoteActionReq>,
) -> Result<Json<JsonValue>, AppError> {
    match body.action.as_deref().unwrap_or_default() {
        "request_otp" => request_otp::request_otp(&state, body).await,
        "verify_and_vote" => verify_and_vote::verify_and_vote(&state, body).await,
        "get_results" => get_results::get_results(&state).await,
        "check_vote_status" => check_vote_status::check_vote_status(&state, body).await,
        _ => Err(AppError::Validation("Invalid action".into())),
    }
}
