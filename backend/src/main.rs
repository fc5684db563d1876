use anyhow::Result;
use roster_backend::settings::Settings;
use roster_backend::{create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app_state = initialize_backend(&settings).await?;
    let app = create_router(app_state, &settings.frontend)?;

    let addr = settings.server.socket_addr()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
