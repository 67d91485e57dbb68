use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::models::GenericResponse;

/// Handler function for default route "/"
/// Returns a JSON response with 200 status code
pub async fn default_route_handler() -> impl IntoResponse {
    let response = GenericResponse {
        success: true,
        message: "PageantVote server is running".to_string(),
    };
    (StatusCode::OK, Json(response))
}
