//! The saved word list page.
//!
//! Every change to the list rebuilds the catalog from it.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::content::{parse_word_input, SavedWords};
use crate::db::{self, LogOnError};
use crate::state::AppState;

use super::catalog::refresh_catalog;
use super::db_error;

#[derive(Template)]
#[template(path = "words.html")]
pub struct WordsTemplate {
  pub words: Vec<String>,
  pub catalog_size: usize,
  pub catalog_source: &'static str,
  pub catalog_error: String,
}

/// GET /words
pub async fn words_page(State(state): State<AppState>) -> Response {
  let saved = match db::try_lock(&state.db) {
    Ok(conn) => db::load_saved_words(&conn).log_warn_default("Failed to load saved words"),
    Err(_) => return db_error(),
  };

  let template = {
    let catalog = state.catalog();
    WordsTemplate {
      words: saved.words().to_vec(),
      catalog_size: catalog.len(),
      catalog_source: catalog.source.as_str(),
      catalog_error: catalog.error.clone().unwrap_or_default(),
    }
  };
  Html(template.render().unwrap_or_default()).into_response()
}

/// Load, change and store the list, then rebuild the catalog if it changed
async fn update_saved_words(state: &AppState, change: impl FnOnce(&mut SavedWords) -> bool) -> Response {
  let saved = {
    let conn = match db::try_lock(&state.db) {
      Ok(conn) => conn,
      Err(_) => return db_error(),
    };
    let mut saved = db::load_saved_words(&conn).log_warn_default("Failed to load saved words");
    if !change(&mut saved) {
      return Redirect::to("/words").into_response();
    }
    if let Err(e) = db::save_saved_words(&conn, &saved) {
      tracing::warn!("Failed to save word list: {}", e);
      return db_error();
    }
    saved
  };

  refresh_catalog(state, &saved).await;
  Redirect::to("/words").into_response()
}

#[derive(Deserialize)]
pub struct AddWordsForm {
  pub words: String,
}

/// POST /words - add comma, space or newline separated words
pub async fn add_words(State(state): State<AppState>, Form(form): Form<AddWordsForm>) -> Response {
  let words = parse_word_input(&form.words);
  update_saved_words(&state, |saved| saved.add_words(words.as_slice()) > 0).await
}

#[derive(Deserialize)]
pub struct RemoveWordForm {
  pub word: String,
}

/// POST /words/remove
pub async fn remove_word(State(state): State<AppState>, Form(form): Form<RemoveWordForm>) -> Response {
  update_saved_words(&state, |saved| saved.remove_word(&form.word)).await
}

/// POST /words/clear
pub async fn clear_words(State(state): State<AppState>) -> Response {
  update_saved_words(&state, |saved| {
    let had_words = !saved.is_empty();
    saved.clear_all();
    had_words
  })
  .await
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content::{Catalog, CatalogSource};
  use crate::handlers::test_support::{test_server, test_state};
  use axum::http::StatusCode;

  fn stored_words(state: &AppState) -> Vec<String> {
    let conn = db::try_lock(&state.db).unwrap();
    db::load_saved_words(&conn).unwrap().words().to_vec()
  }

  #[tokio::test]
  async fn test_add_words_persists_and_reloads() {
    let state = test_state(Catalog::sample());
    let server = test_server(state.clone());

    let response = server
      .post("/words")
      .form(&[("words", "Lucid, terse\nlucid")])
      .await;
    response.assert_status(StatusCode::SEE_OTHER);

    assert_eq!(stored_words(&state), vec!["lucid", "terse"]);
    // The test dictionary is unreachable, so the reload falls back
    let catalog = state.catalog();
    assert_eq!(catalog.source, CatalogSource::Fallback);
    assert_eq!(catalog.generation, 1);
  }

  #[tokio::test]
  async fn test_duplicate_add_does_not_reload() {
    let state = test_state(Catalog::sample());
    {
      let conn = db::try_lock(&state.db).unwrap();
      let mut saved = SavedWords::new();
      saved.add_words(&["lucid"]);
      db::save_saved_words(&conn, &saved).unwrap();
    }
    let server = test_server(state.clone());

    server.post("/words").form(&[("words", "LUCID")]).await;
    assert_eq!(state.catalog().generation, 0);
  }

  #[tokio::test]
  async fn test_clear_returns_to_sample() {
    let state = test_state(Catalog::sample());
    {
      let conn = db::try_lock(&state.db).unwrap();
      let mut saved = SavedWords::new();
      saved.add_words(&["lucid", "terse"]);
      db::save_saved_words(&conn, &saved).unwrap();
    }
    let server = test_server(state.clone());

    let body = server.get("/words").await.text();
    assert!(body.contains("lucid"));
    assert!(body.contains("terse"));

    server.post("/words/remove").form(&[("word", "Terse")]).await;
    assert_eq!(stored_words(&state), vec!["lucid"]);

    server.post("/words/clear").await;
    assert!(stored_words(&state).is_empty());
    assert_eq!(state.catalog().source, CatalogSource::Sample);
  }
}
