use mongodb::bson::serde_helpers::hex_string_as_object_id;
use serde::Deserialize;

use super::Category;

/// Contestant lookup view. The full contestant lifecycle (creation,
/// photos, admin edits) lives outside this service; the vote path
/// only needs existence and category-match checks.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contestant {
    #[serde(deserialize_with = "hex_string_as_object_id::deserialize")]
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub category: Category,
}
