use std::{net::SocketAddr, sync::Arc};

use dotenvy::dotenv;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::AppConfig;
use constants::*;

pub mod app;
pub mod config;
pub mod constants;
pub mod database;
pub mod handlers;
pub mod models;
pub mod swagger;
pub mod utils;

#[cfg(test)]
use mockall_double::double;

#[cfg_attr(test, double)]
use database::AppDatabase;

pub async fn start_web_server() {
    // import .env file
    dotenv().ok();
    initialize_logging();
    // resolve app configuration before anything else runs
    let config = AppConfig::from_env();
    if config.otp_demo_mode {
        tracing::warn!("OTP demo mode is enabled, generated codes are echoed in responses");
    }
    // create database client
    let db_client = AppDatabase::new()
        .await
        .expect("Unable to accquire database client");
    let db_client = Arc::new(db_client);
    initialize_indexes(&db_client)
        .await
        .expect("Unable to create database indexes");
    start_server(db_client, config).await;
}

fn initialize_logging() {
    // create default env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or("pageantvote_backend_rust=debug".into());

    // initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

/// The unique index on (voterId, category) is the actual one vote
/// per category guarantee, the handler-level existence check is only
/// a fast path. The phoneNumber index backs the OTP upsert.
async fn initialize_indexes(db: &Arc<AppDatabase>) -> anyhow::Result<()> {
    let options = IndexOptions::builder().unique(true).build();
    let index = IndexModel::builder()
        .keys(doc! {"voterId": 1, "category": 1})
        .options(options)
        .build();
    db.create_index(DB_NAME, COLL_VOTES, index, None).await?;

    let options = IndexOptions::builder().unique(true).build();
    let index = IndexModel::builder()
        .keys(doc! {"phoneNumber": 1})
        .options(options)
        .build();
    db.create_index(DB_NAME, COLL_VOTERS, index, None).await?;

    Ok(())
}

async fn start_server(db_client: Arc<AppDatabase>, config: AppConfig) {
    // read the port number from env variable
    let port = std::env::var("PORT").unwrap_or_default();
    let port = port.parse::<u16>().unwrap_or(3000);
    // build the socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    // create the app instance
    let app = app::build_app(db_client, config);
    tracing::debug!("Starting the app in: {addr}");
    // start serving the app in the socket address
    axum::Server::bind(&addr).serve(app).await.unwrap();
}
