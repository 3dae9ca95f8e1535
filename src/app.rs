use anyhow::{Context, Result};
use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::handlers;
use crate::mongo::MongoItemStore;
use crate::routes;
use crate::state::AppState;
use crate::store::{ItemStore, StoreHandle};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::INDEX, get(handlers::index_handler))
        .route(routes::INSERT, post(handlers::insert_handler))
        .route(routes::DELETE, post(handlers::delete_handler))
        .route(routes::UPDATE, post(handlers::update_handler))
        .route(routes::SEARCH, get(handlers::search_handler))
        .route(routes::REPORT, get(handlers::report_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::OPENAPI_JSON, get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Connect to MongoDB on a background task and settle `store` with the outcome.
///
/// The server does not wait for this: requests arriving before it finishes,
/// or after it failed, get `Database not initialized`.
pub fn connect_in_background(store: StoreHandle, config: Arc<Config>) -> JoinHandle<()> {
    tokio::spawn(async move {
        store
            .initialize(async {
                let mongo = MongoItemStore::connect(&config).await?;
                Ok::<_, anyhow::Error>(Arc::new(mongo) as Arc<dyn ItemStore>)
            })
            .await;
    })
}

/// Start the HTTP server and run until Ctrl+C or SIGTERM.
pub async fn serve(config: Config) -> Result<()> {
    let config = Arc::new(config);
    let state = AppState {
        store: StoreHandle::new(),
        config: config.clone(),
    };

    connect_in_background(state.store.clone(), config.clone());

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    tracing::info!("Server running at http://{}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
