use axum::{
    Json,
    extract::{RawQuery, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;

use crate::data_models::PageData;
use crate::query_loader;

use super::AppState;
use super::models::SearchPage;

pub async fn page_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, (StatusCode, String)> {
    let data = query_loader::load_query(query.as_deref());
    let html = SearchPage::new(&state.page_title, &data)
        .render(&state.templates)
        .map_err(|e| {
            tracing::error!("failed to render search page: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Render error: {}", e),
            )
        })?;
    Ok(Html(html))
}

pub async fn data_handler(RawQuery(query): RawQuery) -> Json<PageData> {
    Json(query_loader::load_query(query.as_deref()))
}
