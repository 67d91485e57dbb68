use axum::Json;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use serde_json::{json, Value as JsonValue};

use super::helper::find_voter_by_phone;
use super::VoteActionReq;
use crate::{
    app::AppState,
    constants::*,
    models::{Category, VoteCategory},
    utils::{normalize_phone, AppError},
};

/// Report which categories already hold a vote for the phone. An
/// unknown phone is not an error, both flags read false; a phone
/// that fails normalization can't match any voter row either.
pub async fn check_vote_status(
    state: &AppState,
    body: VoteActionReq,
) -> Result<Json<JsonValue>, AppError> {
    let phone = body
        .phone_number
        .as_deref()
        .ok_or(AppError::Validation("Phone number required".into()))?;
    let Ok(phone) = normalize_phone(phone) else {
        let res = json!({"voted_miss": false, "voted_master": false});
        return Ok(Json(res));
    };
    let Some(voter) = find_voter_by_phone(&state.db, &phone).await? else {
        let res = json!({"voted_miss": false, "voted_master": false});
        return Ok(Json(res));
    };
    let voter_id = ObjectId::parse_str(&voter.id)
        .map_err(|err| anyhow::anyhow!("stored voter id {} is not an ObjectId: {err}", voter.id))?;
    let filter = Some(doc! {"voterId": voter_id});
    let mut options = FindOptions::default();
    options.projection = Some(doc! {"category": 1});
    let votes = state
        .db
        .find::<VoteCategory>(DB_NAME, COLL_VOTES, filter, Some(options))
        .await?;
    let voted_miss = votes.iter().any(|vote| vote.category == Category::Miss);
    let voted_master = votes.iter().any(|vote| vote.category == Category::Master);

    let res = json!({"voted_miss": voted_miss, "voted_master": voted_master});
    Ok(Json(res))
}
