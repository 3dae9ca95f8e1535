use utoipa::OpenApi;

use crate::error::{HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{DeleteForm, InsertForm, Item, UpdateForm};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "items-crud API",
        version = "1.0.0",
        description = "Form-driven CRUD over a MongoDB collection of named items"
    ),
    paths(
        handlers::index::index_handler,
        handlers::insert::insert_handler,
        handlers::delete::delete_handler,
        handlers::update::update_handler,
        handlers::search::search_handler,
        handlers::report::report_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            Item,
            InsertForm,
            DeleteForm,
            UpdateForm,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item form and table pages")
    )
)]
pub struct ApiDoc;
