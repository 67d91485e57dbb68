use mongodb::bson::serde_helpers::hex_string_as_object_id;
use serde::Deserialize;

/// An administrator-defined voting window. The vote path only asks
/// whether any session is currently active; keeping at most one
/// active session is enforced by the admin tooling, not here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingSession {
    #[serde(deserialize_with = "hex_string_as_object_id::deserialize")]
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub is_active: bool,
}
