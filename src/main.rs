use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vocab_master::config;
use vocab_master::content::build_catalog;
use vocab_master::db::{self, LogOnError};
use vocab_master::dictionary::DictionaryClient;
use vocab_master::handlers;
use vocab_master::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vocab_master=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let settings = config::load_settings();

  let pool = match db::init_db(&settings.database_path) {
    Ok(pool) => pool,
    Err(e) => {
      tracing::error!("Failed to initialize database at {}: {}", settings.database_path.display(), e);
      return ExitCode::FAILURE;
    }
  };

  let (ledger, saved) = {
    let Ok(conn) = db::try_lock(&pool) else {
      return ExitCode::FAILURE;
    };
    (
      db::load_ledger(&conn).log_warn_default("Failed to load ledger"),
      db::load_saved_words(&conn).log_warn_default("Failed to load saved words"),
    )
  };
  tracing::info!(
    "Loaded ledger with {} words, {} studied overall",
    ledger.performances.len(),
    ledger.total_words_studied
  );

  let dictionary = match DictionaryClient::new(&settings.dictionary_base_url, settings.request_timeout) {
    Ok(client) => client,
    Err(e) => {
      tracing::error!("Failed to build HTTP client: {}", e);
      return ExitCode::FAILURE;
    }
  };

  let catalog = build_catalog(&dictionary, &saved, &settings.catalog_words).await;
  tracing::info!("Catalog ready: {} words from {}", catalog.len(), catalog.source.as_str());

  let state = AppState::new(pool, ledger, catalog, dictionary, settings);
  let app = handlers::router(state);

  let bind_addr = config::server_bind_addr();
  let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
    Ok(listener) => listener,
    Err(e) => {
      tracing::error!("Failed to bind to {}: {}", bind_addr, e);
      return ExitCode::FAILURE;
    }
  };

  tracing::info!("Server running on http://{}", bind_addr);

  if let Err(e) = axum::serve(listener, app).await {
    tracing::error!("Server error: {}", e);
    return ExitCode::FAILURE;
  }
  ExitCode::SUCCESS
}
