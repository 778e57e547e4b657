mod app;
mod codec;
mod config;
mod handlers;
mod service;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    config::Config,
    service::UserService,
    state::AppState,
    storage::{dynamodb, DynamoDbStore, InMemoryStore, RecordStore},
};

/// Storage backend for user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StorageBackend {
    /// AWS DynamoDB (or DynamoDB Local via AWS_ENDPOINT_URL)
    Dynamodb,
    /// Process memory; data is lost on shutdown
    Memory,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

/// userbase - User records on DynamoDB
#[derive(Parser, Debug)]
#[command(name = "userbase")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value_t = StorageBackend::Dynamodb, env = "STORAGE_BACKEND")]
    storage: StorageBackend,

    /// Create the users table and email index if they do not exist
    #[arg(long, env = "CREATE_TABLE")]
    create_table: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, env = "LOG_FORMAT")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_format);

    let config = Config::from_env();
    let store = init_store(&cli, &config).await?;
    let service = UserService::new(store, config.service_config());

    let app = create_app(AppState::new(service));

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "userbase=debug,tower_http=debug".into()),
    );

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Build the record store selected on the command line.
async fn init_store(cli: &Cli, config: &Config) -> Result<Arc<dyn RecordStore>> {
    match cli.storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, records are lost on shutdown");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StorageBackend::Dynamodb => {
            let settings = config.aws_settings();
            let client = dynamodb::create_client(&settings).await;

            if cli.create_table {
                dynamodb::ensure_table(&client, &config.table_name, &config.email_index).await?;
            }

            let store = DynamoDbStore::new(client, &config.table_name);
            tracing::info!(
                target_env = %settings.target_display(),
                table = store.table_name(),
                index = %config.email_index,
                "Using DynamoDB storage"
            );
            Ok(Arc::new(store))
        }
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
