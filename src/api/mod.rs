use axum::{Router, routing::get};
use minijinja::Environment;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::Config;

pub mod handlers;
pub mod models;

/// Shared, read-only state behind every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub page_title: String,
    pub static_dir: PathBuf,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(
        page_title: impl Into<String>,
        static_dir: impl Into<PathBuf>,
    ) -> Result<Self, minijinja::Error> {
        Ok(AppState {
            page_title: page_title.into(),
            static_dir: static_dir.into(),
            templates: models::templates()?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, minijinja::Error> {
        AppState::new(config.page_title.clone(), config.static_dir.clone())
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Search page and its data endpoint
        .route("/", get(handlers::page_handler))
        .route("/__data.json", get(handlers::data_handler))
        .with_state(state)
        // Anything else is looked up in the static directory
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
