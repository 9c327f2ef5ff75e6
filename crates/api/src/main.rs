use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dreamjournal_api::config::ServerConfig;
use dreamjournal_api::router::build_app_router;
use dreamjournal_api::state::AppState;
use dreamjournal_db::EntryStore;
use dreamjournal_interpreter::{GeminiClient, InterpretationService};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "dreamjournal_api=debug,dreamjournal_db=info,dreamjournal_interpreter=info,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(
        host = %config.host,
        port = config.port,
        data_file = %config.data_file.display(),
        model = %config.gemini.model,
        "Loaded server configuration"
    );

    // --- Journal store ---
    let store = EntryStore::new(&config.data_file);
    store
        .ensure_initialized()
        .await
        .expect("Failed to initialize journal file");
    tracing::info!("Journal store ready");

    // --- Interpreter ---
    let gemini = GeminiClient::new(config.gemini.clone()).expect("Failed to build Gemini client");
    let interpreter = Arc::new(InterpretationService::new(Arc::new(gemini)));

    // --- App state ---
    let state = AppState { store, interpreter };

    let app = build_app_router(state, Duration::from_secs(config.request_timeout_secs));

    // --- Start server ---
    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
