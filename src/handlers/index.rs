use crate::render::INDEX_HTML;
use crate::routes;
use axum::response::Html;

/// GET / handler - Serve the item form page
#[utoipa::path(
    get,
    path = routes::INDEX,
    responses(
        (status = 200, description = "Form page", body = String, content_type = "text/html")
    ),
    tag = "items"
)]
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{app_with, body_string, get};
    use crate::render::INDEX_HTML;
    use crate::store::StoreHandle;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_index_served_without_store() {
        let app = app_with(StoreHandle::new());

        let response = get(&app, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, INDEX_HTML);
    }
}
