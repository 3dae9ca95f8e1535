pub mod health;
pub mod index;
pub mod insert;
pub mod delete;
pub mod update;
pub mod search;
pub mod report;

pub use health::health_handler;
pub use index::index_handler;
pub use insert::insert_handler;
pub use delete::delete_handler;
pub use update::update_handler;
pub use search::search_handler;
pub use report::report_handler;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::routes;

/// 302 back to the form page, sent after every successful mutation
pub fn redirect_to_form() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, routes::INDEX)]).into_response()
}
