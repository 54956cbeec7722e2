use std::sync::Arc;

use anyhow::Context;

use clubhub_activities::ActivityDirectory;
use clubhub_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    clubhub_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let directory = Arc::new(ActivityDirectory::seeded());

    let app = clubhub_api::app::build_app(&config, directory);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
