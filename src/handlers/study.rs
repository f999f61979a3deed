//! Flashcard study: show a word, reveal it, rate it.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;

use crate::content::{Catalog, CatalogSource};
use crate::domain::{Ledger, Rating, VocabularyEntry};
use crate::session;
use crate::srs::{dashboard_status, DashboardStatus, SessionPhase, StudySession};
use crate::state::AppState;

use super::{dashboard_hint, load_session, save_ledger};

pub struct SenseView {
  pub part_of_speech: String,
  pub definition: String,
  pub example: String,
}

/// The displayed word, flattened for the template
pub struct CardView {
  pub id: String,
  pub word: String,
  pub category: String,
  pub pronunciation: String,
  pub audio_url: String,
  pub image_url: String,
  pub senses: Vec<SenseView>,
  pub synonyms: String,
  pub antonyms: String,
}

impl CardView {
  fn new(entry: &VocabularyEntry) -> Self {
    Self {
      id: entry.id.clone(),
      word: entry.word.clone(),
      category: entry.category.clone(),
      pronunciation: entry.pronunciation.clone().unwrap_or_default(),
      audio_url: entry.audio_url.clone().unwrap_or_default(),
      image_url: entry.image_url.clone().unwrap_or_default(),
      senses: entry
        .senses
        .iter()
        .map(|s| SenseView {
          part_of_speech: s.part_of_speech.clone(),
          definition: s.definition.clone(),
          example: s.example.clone().unwrap_or_default(),
        })
        .collect(),
      synonyms: entry.synonyms.join(", "),
      antonyms: entry.antonyms.join(", "),
    }
  }
}

#[derive(Template)]
#[template(path = "study.html")]
pub struct StudyTemplate {
  pub card: Option<CardView>,
  pub exhausted: bool,
  /// The catalog failed to load; nothing can be studied
  pub unavailable: bool,
  pub answered: u32,
  pub session_length: u32,
  pub progress_percent: u32,
  pub easy: u32,
  pub medium: u32,
  pub hard: u32,
  pub accuracy_percent: u32,
  pub total_words_studied: u32,
  pub catalog_size: usize,
  pub catalog_error: String,
  pub dashboard_hint: String,
  pub dashboard_unlocked: bool,
}

impl StudyTemplate {
  fn new(study: &StudySession, catalog: &Catalog, ledger: &Ledger) -> Self {
    let stats = study.stats();
    let session_length = study.config.session_length;
    Self {
      card: study.current(&catalog.entries).map(CardView::new),
      exhausted: study.phase() == SessionPhase::Exhausted,
      unavailable: catalog.source == CatalogSource::Fallback,
      answered: stats.answered,
      session_length,
      progress_percent: stats.progress_percent(session_length),
      easy: stats.easy,
      medium: stats.medium,
      hard: stats.hard,
      accuracy_percent: stats.accuracy_percent(),
      total_words_studied: ledger.total_words_studied,
      catalog_size: catalog.len(),
      catalog_error: catalog.error.clone().unwrap_or_default(),
      dashboard_hint: dashboard_hint(ledger.total_words_studied).unwrap_or_default(),
      dashboard_unlocked: dashboard_status(ledger.total_words_studied) == DashboardStatus::Unlocked,
    }
  }
}

/// GET / - current flashcard, picking one if none is displayed
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Response {
  let (jar, session_id) = session::session_id(jar);
  let mut browser = load_session(&state, &session_id);

  let template = {
    let catalog = state.catalog();
    let ledger = state.ledger();
    let study = &mut browser.study;
    if catalog.source != CatalogSource::Fallback
      && study.phase() != SessionPhase::Exhausted
      && study.current(&catalog.entries).is_none()
    {
      study.pick_next(&catalog.entries, &ledger, Utc::now(), &mut rand::rng());
    }
    StudyTemplate::new(study, &catalog, &ledger)
  };

  session::update_session(&session_id, browser);
  (jar, Html(template.render().unwrap_or_default())).into_response()
}

#[derive(Deserialize)]
pub struct RespondForm {
  pub word_id: String,
  pub rating: String,
}

/// POST /respond - rate the displayed word and advance.
///
/// Ignored unless `word_id` is still the current card.
pub async fn respond(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<RespondForm>,
) -> Response {
  let Some(rating) = Rating::parse(&form.rating) else {
    return (StatusCode::BAD_REQUEST, "Unknown rating").into_response();
  };

  let (jar, session_id) = session::session_id(jar);
  let mut browser = load_session(&state, &session_id);

  {
    let catalog = state.catalog();
    if catalog.source == CatalogSource::Fallback {
      tracing::debug!("Ignoring rating while the catalog is unavailable");
      return (jar, Redirect::to("/")).into_response();
    }
    if browser.study.current_id() != Some(form.word_id.as_str()) {
      tracing::debug!("Ignoring stale rating for '{}'", form.word_id);
      return (jar, Redirect::to("/")).into_response();
    }

    let mut ledger = state.ledger();
    let outcome = browser.study.record_response(
      &catalog.entries,
      &mut ledger,
      rating,
      Utc::now(),
      &mut rand::rng(),
    );
    match outcome {
      Some(outcome) => {
        if outcome.was_first_attempt {
          tracing::info!(
            "First attempt at '{}', {} words studied",
            outcome.performance.word_id,
            ledger.total_words_studied
          );
        }
        save_ledger(&state, &ledger);
      }
      None => tracing::debug!("Ignoring rating with no word displayed"),
    }
  }

  session::update_session(&session_id, browser);
  (jar, Redirect::to("/")).into_response()
}

/// POST /session/new - discard the current session and start over
pub async fn new_session(State(state): State<AppState>, jar: CookieJar) -> Response {
  let (jar, session_id) = session::session_id(jar);
  let mut browser = load_session(&state, &session_id);
  browser.study.reset();
  session::update_session(&session_id, browser);
  (jar, Redirect::to("/")).into_response()
}
