use axum::http::Uri;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Fallback handler for every route the router does not know
pub async fn global_404_handler(uri: Uri) -> impl IntoResponse {
    tracing::debug!("unknown route requested: {uri}");
    let msg = format!("Route `{}` does not exist", uri);
    let body = json!({"success": false, "message": msg});
    (StatusCode::NOT_FOUND, Json(body))
}
