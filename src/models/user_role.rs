use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::utils::get_epoch_ts;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub user_id: String,
    pub role: String,
    pub created_ts: u64,
}

impl UserRole {
    pub fn new_admin(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_owned(),
            role: ADMIN_ROLE.to_owned(),
            created_ts: get_epoch_ts(),
        }
    }
}
