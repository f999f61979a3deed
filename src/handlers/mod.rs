pub mod catalog;
pub mod insights;
pub mod quiz;
pub mod study;
pub mod words;

use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::db::{self, LogOnError};
use crate::paths;
use crate::session::{self, BrowserSession};
use crate::srs::DashboardStatus;
use crate::state::AppState;

pub use catalog::reload_catalog;
pub use insights::{analytics, insights};
pub use quiz::{quiz_answer, quiz_page, quiz_reset};
pub use study::{index, new_session, respond};
pub use words::{add_words, clear_words, remove_word, words_page};

/// All routes with their state attached
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/respond", post(respond))
    .route("/session/new", post(new_session))
    .route("/quiz", get(quiz_page))
    .route("/quiz/answer", post(quiz_answer))
    .route("/quiz/reset", post(quiz_reset))
    .route("/insights", get(insights))
    .route("/analytics", get(analytics))
    .route("/words", get(words_page).post(add_words))
    .route("/words/remove", post(remove_word))
    .route("/words/clear", post(clear_words))
    .route("/catalog/reload", post(reload_catalog))
    .nest_service("/static", ServeDir::new(paths::STATIC_DIR))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

pub(crate) fn db_error() -> Response {
  Html("<h1>Database Error</h1><p>Please refresh the page.</p>".to_string()).into_response()
}

/// Load the browser session and bring it in line with the current catalog
pub(crate) fn load_session(state: &AppState, session_id: &str) -> BrowserSession {
  let mut browser = session::get_session(session_id);
  browser.sync_catalog(state.catalog().generation);
  browser
}

/// Write the ledger back to storage.
///
/// A failed save is logged; the in-memory ledger stays authoritative.
pub(crate) fn save_ledger(state: &AppState, ledger: &crate::domain::Ledger) {
  match db::try_lock(&state.db) {
    Ok(conn) => {
      db::save_ledger(&conn, ledger).log_warn("Failed to save ledger");
    }
    Err(e) => tracing::warn!("Failed to save ledger: {}", e),
  }
}

/// Nudge shown while the insights dashboard is still locked
pub(crate) fn dashboard_hint(total_words_studied: u32) -> Option<String> {
  match crate::srs::dashboard_status(total_words_studied) {
    DashboardStatus::AlmostUnlocked { remaining } => Some(format!(
      "Keep going! After {} more word{}, you'll unlock your performance insights dashboard!",
      remaining,
      if remaining == 1 { "" } else { "s" }
    )),
    _ => None,
  }
}
