use axum::Json;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use serde_json::{json, Value as JsonValue};
use std::collections::HashMap;

use crate::{app::AppState, constants::*, models::VoteContestant, utils::AppError};

/// Aggregate committed votes into per-contestant counts. Contestants
/// with zero votes do not appear; callers default missing keys to 0.
pub async fn get_results(state: &AppState) -> Result<Json<JsonValue>, AppError> {
    let mut options = FindOptions::default();
    options.projection = Some(doc! {"contestantId": 1});
    let votes = state
        .db
        .find::<VoteContestant>(DB_NAME, COLL_VOTES, None, Some(options))
        .await?;
    let mut results = HashMap::<String, u64>::new();
    for vote in votes {
        *results.entry(vote.contestant_id).or_insert(0) += 1;
    }

    let res = json!({ "results": results });
    Ok(Json(res))
}
