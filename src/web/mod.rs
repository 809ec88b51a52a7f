pub mod error;
pub mod forms;
pub mod handlers;
pub mod routes;
pub mod state;

use crate::{Config, Database};
use anyhow::Result;
use axum::Router;
use state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    let uploads_dir = state.assets.root().to_path_buf();

    Router::new()
        .nest("/api/website", routes::website_routes())
        .nest("/api/dashboard", routes::dashboard_routes())
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(config: Config, db: Database, addr: &str) -> Result<()> {
    let state = Arc::new(AppState::new(config, db));
    std::fs::create_dir_all(state.assets.root())?;

    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
