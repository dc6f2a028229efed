use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use campus_core::config::Config;
use campus_core::tracing::init_tracing;
use campus_school::config::SchoolConfig;
use campus_school::router::build_router;
use campus_school::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing("info,sqlx=warn");

    let config = SchoolConfig::from_env().expect("failed to load config from environment");

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db: Arc::new(db) };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.school_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("school service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
