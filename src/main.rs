//! Book Haven Server
//!
//! REST API server for the book catalog.

use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::MakeWriter,
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    Layer,
};

use book_haven::{
    api,
    config::{AppConfig, LoggingConfig, StoreBackend},
    repository::{BookStore, MemoryBookStore, PgBookStore},
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    init_tracing(&config.logging);

    tracing::info!("Starting Book Haven v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn BookStore> = match config.database.backend {
        StoreBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .min_connections(config.database.min_connections)
                .connect(&config.database.url)
                .await
                .inspect_err(|e| tracing::error!("Failed to connect to database: {}", e))?;

            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .inspect_err(|e| tracing::error!("Failed to run database migrations: {}", e))?;

            tracing::info!("Database migrations completed");
            Arc::new(PgBookStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory book store, data will not survive a restart");
            Arc::new(MemoryBookStore::new())
        }
    };

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState::new(config, Services::new(store));
    let app = api::router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("book_haven={},tower_http=debug", logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(logging, std::io::stdout))
        .init();
}

/// `json` gives one JSON object per event, anything else the pretty layout
fn fmt_layer<S, W>(logging: &LoggingConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer().with_writer(writer);
    if logging.format == "json" {
        layer.json().boxed()
    } else {
        layer.pretty().boxed()
    }
}
