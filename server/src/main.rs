mod config;
mod data;
mod routes;

use config::{ConfigError, SiteConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("router setup failed: {0}")]
    Router(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to load .env");
        }
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "memorial site stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = SiteConfig::from_env()?;

    // Non-fatal: a broken data file only empties the catalog in the browser.
    data::report_memories(&config.memories_path).await;

    let app = routes::app(&config).map_err(ServerError::Router)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "memorial site listening");
    axum::serve(listener, app).await?;
    Ok(())
}
