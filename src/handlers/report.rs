use crate::error::{ApiError, StoreOp};
use crate::render;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, response::Html};

/// GET /report handler - List every item
///
/// Rows appear in whatever order the store returns them.
#[utoipa::path(
    get,
    path = routes::REPORT,
    responses(
        (status = 200, description = "HTML table of all items", body = String, content_type = "text/html"),
        (status = 500, description = "Database not initialized or query failed", body = String)
    ),
    tag = "items"
)]
pub async fn report_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let store = state.store.get()?;
    let items = store
        .find_all()
        .await
        .map_err(ApiError::store(StoreOp::Report))?;

    tracing::info!("Report listed {} item(s)", items.len());
    Ok(Html(render::item_table("Report", &items)))
}
