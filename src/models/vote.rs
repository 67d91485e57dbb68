use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::hex_string_as_object_id;
use serde::{Deserialize, Serialize};

use super::Category;
use crate::utils::get_epoch_ts;

/// A committed vote row. Immutable once inserted; the collection
/// carries a unique index on (voterId, category).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub voter_id: ObjectId,
    pub contestant_id: ObjectId,
    pub category: Category,
    pub created_ts: u64,
}

impl Vote {
    pub fn new(voter_id: ObjectId, contestant_id: ObjectId, category: Category) -> Self {
        Self {
            voter_id,
            contestant_id,
            category,
            created_ts: get_epoch_ts(),
        }
    }
}

/// Projection of a vote row onto its contestant, used by the tally
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteContestant {
    #[serde(deserialize_with = "hex_string_as_object_id::deserialize")]
    pub contestant_id: String,
}

/// Projection of a vote row onto its category, used by vote status
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteCategory {
    pub category: Category,
}
