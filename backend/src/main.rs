use anyhow::Result;
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use backend::{config::Config, create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false),
        )
        .init();

    info!(
        database_url = %config.database_url,
        listen = %config.socket_addr(),
        cors_origin = %config.cors_origin,
        newspapers = config.newspapers.len(),
        "Loaded configuration"
    );

    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state, &config);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
