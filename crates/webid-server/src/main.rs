//! webid server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) and `WEBID_*`
//! environment variables, opens the SQLite link store, connects to the SPARQL
//! endpoint and serves the JSON API over HTTP.
//!
//! ```sh
//! WEBID_SPARQL_URL=http://localhost:8890/sparql cargo run -p webid-server --bin server
//! ```

mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use webid_api::AppState;
use webid_sparql::{SparqlClient, SparqlDataset};
use webid_store_sqlite::SqliteStore;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "WebID ↔ lblod linking API")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let server_cfg = ServerConfig::load(&cli.config)?;

  let store_path = server_cfg.store_path();
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let client = SparqlClient::new(server_cfg.sparql())
    .context("failed to build SPARQL client")?;
  tracing::info!(endpoint = client.endpoint(), "using SPARQL endpoint");

  let state = AppState::new(store, SparqlDataset::new(client));
  let app = webid_api::api_router(state)
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http());

  let address = server_cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
