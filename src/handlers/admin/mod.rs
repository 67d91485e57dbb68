use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    app::AppState,
    utils::{AppError, ValidatedBody},
};

pub mod make_first_admin;

/// Request body for the admin action endpoint
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdminActionReq {
    pub action: Option<String>,
    #[validate(length(min = 1, message = "User ID is required"))]
    pub user_id: Option<String>,
}

/// Admin endpoint
///
/// Bootstrap dispatch endpoint, currently only `make_first_admin`.
/// Session and contestant management run through the regular admin
/// tooling behind external auth.
#[utoipa::path(
    post,
    path = "/api/v1/admin",
    request_body = AdminActionReq,
    responses(
        (status = 200, description = "Action executed successfully"),
        (status = 400, description = "Validation failure or an admin already exists", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Admin API"
)]
pub async fn admin_action_handler(
    State(state): State<AppState>,
    ValidatedBody(body): ValidatedBody<AdminActionReq>,
) -> Result<Json<JsonValue>, AppError> {
    match body.action.as_deref().unwrap_or_default() {
        "make_first_admin" => make_first_admin::make_first_admin(&state, body).await,
        _ => Err(AppError::Validation("Invalid action".into())),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::{body::Body, http::Request, routing::post, Router};
    use mockall_double::double;
    use serde_json::Value;
    use tower::ServiceExt; // for `oneshot` and `ready`

    use super::*;
    use crate::handlers::vote::test_helper::build_state;

    #[double]
    use crate::database::AppDatabase;

    #[tokio::test]
    async fn test_unknown_admin_action() {
        let state = build_state(AppDatabase::default(), false);
        let app = Router::new()
            .route("/api/v1/admin", post(admin_action_handler))
            .with_state(state);
        let req = Request::builder()
            .uri("/api/v1/admin")
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"action": "drop_roles"}"#))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Invalid action");
    }
}
