use daily_briefing::{
    AppConfig, AppState, day::DaySelector, load_seed, router, store::TaskStore,
    sync::HttpForwarder,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env()?;

    let store = TaskStore::new(load_seed(config.seed_path.as_deref()).await);
    let seeded: Vec<String> = store.dates().map(|date| date.to_string()).collect();
    info!("briefings seeded for {} day(s): {}", seeded.len(), seeded.join(", "));

    let forwarder = HttpForwarder::new(&config)?;
    info!("forwarding read-state changes to {}", forwarder.endpoint());

    let selector = DaySelector::today();
    let state = AppState::new(store, selector, Arc::new(forwarder));
    let app = router(state);

    let addr = config.listen_addr();
    info!("listening on http://{addr}, showing {}", selector.selected());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await
}

// A signal handler that cannot be installed must not stop the server.
async fn wait_for_shutdown(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(err) = signal.await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
