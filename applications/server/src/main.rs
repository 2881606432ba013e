/// Album Catalog Server - in-memory album catalog over HTTP
use anyhow::Context;
use catalog_core::AlbumStore;
use catalog_server::{api, config::ServerConfig, state::AppState};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tokio::signal;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "In-memory album catalog server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "CATALOG_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Load a seed file, print its albums and report problems
    CheckSeed {
        /// JSON file holding an array of albums
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::CheckSeed { path } => {
            check_seed(&path)?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting album catalog server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = config
        .catalog
        .open_store()
        .context("Failed to open album store")?;
    tracing::info!("Catalog ready with {} albums", store.count());

    let app_state = AppState::with_store(Arc::new(store));

    let mut app = api::create_router(app_state).layer(
        TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)),
    );
    if config.cors.permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn check_seed(path: &std::path::Path) -> anyhow::Result<()> {
    let albums = catalog_storage::load_seed_file(path)
        .with_context(|| format!("Seed file {} is not usable", path.display()))?;

    println!("Albums:");
    for album in &albums {
        println!(
            "  {} - {} by {} ({:.2})",
            album.id, album.title, album.artist, album.price
        );
    }
    println!("{} albums, no problems found.", albums.len());

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        },
        () = terminate => {
            tracing::info!("Received terminate signal, shutting down");
        },
    }
}
