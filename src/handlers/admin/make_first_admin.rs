use axum::Json;
use mongodb::bson::{doc, Document};
use serde_json::{json, Value as JsonValue};

use super::AdminActionReq;
use crate::{app::AppState, constants::*, models::UserRole, utils::AppError};

/// Grant the admin role to the given user, but only when no admin
/// exists yet. Every later role change goes through an existing
/// admin, this endpoint only breaks the bootstrap deadlock of a
/// fresh deployment.
pub async fn make_first_admin(
    state: &AppState,
    body: AdminActionReq,
) -> Result<Json<JsonValue>, AppError> {
    let filter = Some(doc! {"role": ADMIN_ROLE});
    let existing = state
        .db
        .find_one::<Document>(DB_NAME, COLL_USER_ROLES, filter, None)
        .await?;
    if existing.is_some() {
        let err = AppError::Conflict("An admin already exists. Contact them for access.".into());
        return Err(err);
    }
    let user_id = body
        .user_id
        .as_deref()
        .ok_or(AppError::Validation("User ID is required".into()))?;
    let role = UserRole::new_admin(user_id);
    state
        .db
        .insert_one::<UserRole>(DB_NAME, COLL_USER_ROLES, &role, None)
        .await?;

    let res = json!({"success": true, "message": "Admin role granted"});
    Ok(Json(res))
}
