use clap::Parser;

use musiclist::store::Store;
use musiclist::{cli, config, http};

/// Resolve on the first Ctrl+C so the server can drain. A second Ctrl+C
/// during the drain force-exits.
async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down, draining in-flight requests...");
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nmusiclist: forced exit");
            std::process::exit(1);
        }
    });
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref())
        .and_then(|path| match config::load_config(&path) {
            Ok(cfg) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {}", path.display(), e);
                None
            }
        });

    let config = config::Config::resolve(file_config, &args);
    let addr = config.bind_addr();

    let state = http::state::AppState::new(Store::new());
    let app = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("error: failed to bind {}: {}", addr, e);
            std::process::exit(1);
        });

    tracing::info!("musiclist {} listening on http://{}", env!("CARGO_PKG_VERSION"), addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
    {
        tracing::error!("HTTP server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Goodbye.");
}
