use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};

use crate::content::{build_catalog, SavedWords};
use crate::db::{self, LogOnError};
use crate::state::AppState;

use super::db_error;

/// Rebuild the catalog from `saved` and swap it in
pub(crate) async fn refresh_catalog(state: &AppState, saved: &SavedWords) {
  let next = build_catalog(state.dictionary.as_ref(), saved, &state.settings.catalog_words).await;
  tracing::info!("Catalog reloaded: {} words from {}", next.len(), next.source.as_str());
  state.catalog_mut().replace(next);
}

/// POST /catalog/reload - retry loading the catalog
pub async fn reload_catalog(State(state): State<AppState>) -> Response {
  let saved = match db::try_lock(&state.db) {
    Ok(conn) => db::load_saved_words(&conn).log_warn_default("Failed to load saved words"),
    Err(_) => return db_error(),
  };

  refresh_catalog(&state, &saved).await;
  Redirect::to("/").into_response()
}

#[cfg(test)]
mod tests {
  use crate::content::{Catalog, CatalogError, CatalogSource};
  use crate::handlers::test_support::{test_server, test_state};
  use axum::http::StatusCode;

  #[tokio::test]
  async fn test_reload_recovers_sample_catalog() {
    let state = test_state(Catalog::fallback(&CatalogError::AllFailed(3)));
    let server = test_server(state.clone());

    let body = server.get("/").await.text();
    assert!(body.contains("Could not load vocabulary"));

    server.post("/catalog/reload").await.assert_status(StatusCode::SEE_OTHER);

    let catalog = state.catalog();
    assert_eq!(catalog.source, CatalogSource::Sample);
    assert_eq!(catalog.generation, 1);
    assert!(catalog.error.is_none());
  }
}
