use axum::Json;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

use super::helper::{check_voting_open, find_voter_by_phone};
use super::VoteActionReq;
use crate::{
    app::AppState,
    constants::*,
    models::{Category, Contestant, Vote, Voter},
    utils::{
        get_epoch_ts, is_duplicate_key_error, normalize_phone, parse_object_id, AppError,
    },
};

#[cfg(test)]
use mockall_double::double;

#[cfg_attr(test, double)]
use crate::database::AppDatabase;

/// Check the OTP for the phone and cast a vote in the given category.
/// The OTP is consumed before the vote insert is attempted, so a
/// failed insert requires a fresh OTP cycle before retrying.
pub async fn verify_and_vote(
    state: &AppState,
    body: VoteActionReq,
) -> Result<Json<JsonValue>, AppError> {
    let (Some(phone), Some(otp_code), Some(contestant_id), Some(category)) = (
        body.phone_number.as_deref(),
        body.otp_code.as_deref(),
        body.contestant_id.as_deref(),
        body.category.as_deref(),
    ) else {
        return Err(AppError::Validation("All fields are required".into()));
    };
    let category =
        Category::from_param(category).ok_or(AppError::Validation("Invalid category".into()))?;
    check_voting_open(&state.db).await?;
    // a phone that fails normalization can't match any voter row, so
    // it falls into the same class as an unknown voter
    let voter = match normalize_phone(phone) {
        Ok(phone) => find_voter_by_phone(&state.db, &phone).await?,
        Err(_) => None,
    };
    let voter = voter.ok_or(AppError::Auth("Please request an OTP first".into()))?;
    check_otp(&voter, otp_code)?;
    let voter_id = ObjectId::parse_str(&voter.id)
        .map_err(|err| anyhow::anyhow!("stored voter id {} is not an ObjectId: {err}", voter.id))?;
    consume_otp(&state.db, &voter_id).await?;
    check_not_voted(&state.db, &voter_id, category).await?;
    let contestant_id = check_contestant(&state.db, contestant_id, category).await?;
    insert_vote(&state.db, voter_id, contestant_id, category).await?;

    let res = json!({"success": true, "message": "Vote cast successfully!"});
    Ok(Json(res))
}

/// The stored code must match exactly and the expiry must be strictly
/// in the future. A voter whose code was already consumed has
/// otpCode = None and fails the match.
fn check_otp(voter: &Voter, otp_code: &str) -> Result<(), AppError> {
    let code_matches = voter
        .otp_code
        .as_deref()
        .map_or(false, |code| code == otp_code);
    if !code_matches {
        return Err(AppError::Auth("Invalid OTP code".into()));
    }
    let expired_msg = "OTP has expired. Please request a new one.";
    let expires_at = voter
        .otp_expires_at
        .ok_or(AppError::Auth(expired_msg.into()))?;
    if get_epoch_ts() >= expires_at {
        return Err(AppError::Auth(expired_msg.into()));
    }
    Ok(())
}

/// Mark the voter verified and clear the code so it cannot be
/// replayed for a second vote
async fn consume_otp(db: &Arc<AppDatabase>, voter_id: &ObjectId) -> Result<(), AppError> {
    let ts = get_epoch_ts() as i64;
    let filter = doc! {"_id": voter_id};
    let update = doc! {"$set": {"verified": true, "otpCode": Bson::Null, "updatedTs": ts}};
    db.update_one(DB_NAME, COLL_VOTERS, filter, update, None)
        .await?;
    Ok(())
}

/// Fast-path duplicate check. The unique index on (voterId, category)
/// remains the source of truth when two casts race.
async fn check_not_voted(
    db: &Arc<AppDatabase>,
    voter_id: &ObjectId,
    category: Category,
) -> Result<(), AppError> {
    let filter = doc! {"voterId": voter_id, "category": category.to_bson()?};
    let existing = db
        .find_one::<Document>(DB_NAME, COLL_VOTES, Some(filter), None)
        .await?;
    if existing.is_some() {
        let err = format!("You have already voted in the {category} category");
        return Err(AppError::Conflict(err));
    }
    Ok(())
}

/// The contestant must exist and belong to the requested category
async fn check_contestant(
    db: &Arc<AppDatabase>,
    contestant_id: &str,
    category: Category,
) -> Result<ObjectId, AppError> {
    let contestant_id = parse_object_id(contestant_id, "Invalid contestant for this category")?;
    let filter = doc! {"_id": contestant_id, "category": category.to_bson()?};
    db.find_one::<Contestant>(DB_NAME, COLL_CONTESTANTS, Some(filter), None)
        .await?
        .ok_or(AppError::NotFound(
            "Invalid contestant for this category".into(),
        ))?;
    Ok(contestant_id)
}

async fn insert_vote(
    db: &Arc<AppDatabase>,
    voter_id: ObjectId,
    contestant_id: ObjectId,
    category: Category,
) -> Result<(), AppError> {
    let vote = Vote::new(voter_id, contestant_id, category);
    db.insert_one::<Vote>(DB_NAME, COLL_VOTES, &vote, None)
        .await
        .map_err(|err| {
            if is_duplicate_key_error(&err) {
                let msg = format!("You have already voted in the {category} category");
                AppError::Conflict(msg)
            } else {
                err.into()
            }
        })?;
    Ok(())
}
