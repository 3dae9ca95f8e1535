mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
#[cfg(test)]
mod memory_store;
mod models;
mod mongo;
mod render;
mod routes;
mod state;
mod store;

use config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("items-crud starting");

    let config = Config::from_env()?;
    config.log_startup();

    app::serve(config).await
}
