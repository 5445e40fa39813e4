pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod ui;
pub mod week;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::db::Database;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Full application: JSON API, HTML pages and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api::routes())
        .merge(ui::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
