use crate::error::{ApiError, StoreOp};
use crate::handlers::redirect_to_form;
use crate::models::{Item, UpdateForm, require};
use crate::routes;
use crate::state::AppState;
use axum::{Form, extract::State, response::Response};

/// POST /update handler - Rename and redescribe one item
///
/// Matches on the current `name`; at most one item is changed. A missing
/// match is not reported back to the client.
#[utoipa::path(
    post,
    path = routes::UPDATE,
    request_body(content = UpdateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Update applied, redirect to the form page"),
        (status = 400, description = "Missing form field", body = String),
        (status = 500, description = "Database not initialized or update failed", body = String)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Form(form): Form<UpdateForm>,
) -> Result<Response, ApiError> {
    let name = require("name", form.name)?;
    let new_name = require("newName", form.new_name)?;
    let new_description = require("newDescription", form.new_description)?;

    let store = state.store.get()?;
    store
        .update_one(&name, Item::new(new_name, new_description))
        .await
        .map_err(ApiError::store(StoreOp::Update))?;

    Ok(redirect_to_form())
}
