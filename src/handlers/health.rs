use crate::error::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::Readiness;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// Reports the store connection state and, when connected, pings the
/// database to verify it is still reachable.
/// Returns 200 OK if the database is reachable, 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, Json<UnhealthyResponse>)> {
    let store = match state.store.current() {
        Readiness::Ready(store) => store,
        Readiness::Uninitialized => {
            return Err(unhealthy("Database not initialized".to_string()));
        }
        Readiness::Failed(reason) => {
            return Err(unhealthy(format!(
                "Cannot connect to database {}: {}",
                state.config.mongo_database, reason
            )));
        }
    };

    match store.ping().await {
        Ok(_) => {
            tracing::debug!("Health check passed");
            Ok((
                StatusCode::OK,
                Json(HealthResponse {
                    status: "healthy".to_string(),
                }),
            ))
        }
        Err(e) => Err(unhealthy(format!("Database ping failed: {}", e))),
    }
}

fn unhealthy(error: String) -> (StatusCode, Json<UnhealthyResponse>) {
    tracing::error!("Health check failed: {}", error);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(UnhealthyResponse {
            status: "unhealthy".to_string(),
            error,
        }),
    )
}
