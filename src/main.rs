use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use storefront::config::Config;
use storefront::router::create_app_router;
use storefront::session::AppState;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront state server")]
struct Cli {
    /// TOML config file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    config.logging.init();

    // Initialize application state
    let state = Arc::new(AppState::from_config(&config).context("initializing storefront")?);

    // Drop idle sessions in the background; their carts stay on disk
    let idle_timeout = config.session.idle_timeout();
    let sweeper = state.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(idle_timeout.min(Duration::from_secs(60)));
        loop {
            ticker.tick().await;
            sweeper.evict_idle(idle_timeout);
        }
    });

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr()?;
    tracing::info!(%addr, "storefront listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
