use crate::error::{ApiError, StoreOp};
use crate::handlers::redirect_to_form;
use crate::models::{DeleteForm, require};
use crate::routes;
use crate::state::AppState;
use axum::{Form, extract::State, response::Response};

/// POST /delete handler - Remove one item by name
///
/// If several items share the name, only one of them is removed. Redirects
/// whether or not anything matched.
#[utoipa::path(
    post,
    path = routes::DELETE,
    request_body(content = DeleteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Delete applied, redirect to the form page"),
        (status = 400, description = "Missing form field", body = String),
        (status = 500, description = "Database not initialized or delete failed", body = String)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> Result<Response, ApiError> {
    let name = require("name", form.name)?;

    let store = state.store.get()?;
    store
        .delete_one(&name)
        .await
        .map_err(ApiError::store(StoreOp::Delete))?;

    Ok(redirect_to_form())
}
