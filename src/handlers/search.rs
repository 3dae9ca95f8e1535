use crate::error::{ApiError, StoreOp};
use crate::models::{SearchQuery, require};
use crate::render;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, response::Html};

/// GET /search handler - List items with an exact name
#[utoipa::path(
    get,
    path = routes::SEARCH,
    params(SearchQuery),
    responses(
        (status = 200, description = "HTML table of matching items", body = String, content_type = "text/html"),
        (status = 400, description = "Missing query parameter", body = String),
        (status = 500, description = "Database not initialized or query failed", body = String)
    ),
    tag = "items"
)]
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, ApiError> {
    let name = require("name", query.name)?;

    let store = state.store.get()?;
    let items = store
        .find_by_name(&name)
        .await
        .map_err(ApiError::store(StoreOp::Search))?;

    tracing::info!("Search for name {} matched {} item(s)", name, items.len());
    Ok(Html(render::item_table("Search Results", &items)))
}
