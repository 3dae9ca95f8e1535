use crate::error::{ApiError, StoreOp};
use crate::handlers::redirect_to_form;
use crate::models::{InsertForm, Item, require};
use crate::routes;
use crate::state::AppState;
use axum::{Form, extract::State, response::Response};

/// POST /insert handler - Store a new item
///
/// Always inserts, even if an item with the same name already exists.
#[utoipa::path(
    post,
    path = routes::INSERT,
    request_body(content = InsertForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Item stored, redirect to the form page"),
        (status = 400, description = "Missing form field", body = String),
        (status = 500, description = "Database not initialized or insert failed", body = String)
    ),
    tag = "items"
)]
pub async fn insert_handler(
    State(state): State<AppState>,
    Form(form): Form<InsertForm>,
) -> Result<Response, ApiError> {
    let name = require("name", form.name)?;
    let description = require("description", form.description)?;

    let store = state.store.get()?;
    store
        .insert(Item::new(name, description))
        .await
        .map_err(ApiError::store(StoreOp::Insert))?;

    Ok(redirect_to_form())
}
