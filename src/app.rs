use axum::routing::{get, post, IntoMakeService};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::constants::*;
use crate::handlers::{
    admin_action_handler, default_route_handler, global_404_handler, ping_handler,
    vote_action_handler,
};
use crate::swagger::ApiDoc;

#[cfg(test)]
use mockall_double::double;

#[cfg_attr(test, double)]
use crate::database::AppDatabase;

/// Shared state available to every request handler
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<AppDatabase>,
    pub config: Arc<AppConfig>,
}

pub fn build_app(db: Arc<AppDatabase>, config: AppConfig) -> IntoMakeService<Router> {
    tracing::debug!("Initializing the app");
    let state = AppState {
        db,
        config: Arc::new(config),
    };
    let app = Router::new()
        .route("/", get(default_route_handler))
        .route("/api/v1/ping", get(ping_handler))
        .route("/api/v1/vote", post(vote_action_handler))
        .route("/api/v1/admin", post(admin_action_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(global_404_handler)
        // browser clients call the vote endpoint cross-origin, answer
        // preflights and attach CORS headers on every response
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .with_state(state);
    app.into_make_service()
}
