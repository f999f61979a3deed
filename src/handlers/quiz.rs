//! Multiple-choice quiz over the catalog. Answers never touch the ledger.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::config;
use crate::session::{self, QuizFeedback, QuizState};
use crate::srs::{random_question, QuizKind};
use crate::state::AppState;

use super::load_session;

#[derive(Template)]
#[template(path = "quiz.html")]
pub struct QuizTemplate {
  pub kind: &'static str,
  pub other_kind: &'static str,
  pub prompt: String,
  pub options: Vec<String>,
  pub has_question: bool,
  pub min_words: usize,
  pub catalog_size: usize,
  pub answered: u32,
  pub correct: u32,
  pub accuracy_percent: u32,
  pub feedback: Option<QuizFeedback>,
  pub catalog_error: String,
}

impl QuizTemplate {
  fn new(quiz: &QuizState, catalog_size: usize, catalog_error: String) -> Self {
    let (prompt, options) = match &quiz.question {
      Some(q) => (q.prompt.clone(), q.options.clone()),
      None => (String::new(), Vec::new()),
    };
    Self {
      kind: quiz.kind.as_str(),
      other_kind: quiz.kind.other().as_str(),
      prompt,
      options,
      has_question: quiz.question.is_some(),
      min_words: config::MIN_QUIZ_CATALOG,
      catalog_size,
      answered: quiz.score.answered,
      correct: quiz.score.correct,
      accuracy_percent: quiz.score.accuracy_percent(),
      feedback: quiz.feedback.clone(),
      catalog_error,
    }
  }
}

#[derive(Deserialize)]
pub struct QuizQuery {
  pub kind: Option<String>,
}

/// GET /quiz - current question, generating one when needed
pub async fn quiz_page(
  State(state): State<AppState>,
  jar: CookieJar,
  Query(query): Query<QuizQuery>,
) -> Response {
  let (jar, session_id) = session::session_id(jar);
  let mut browser = load_session(&state, &session_id);
  let quiz = &mut browser.quiz;

  if let Some(kind) = query.kind.as_deref().and_then(QuizKind::parse) {
    if kind != quiz.kind {
      quiz.kind = kind;
      quiz.question = None;
    }
  }

  let template = {
    let catalog = state.catalog();
    if quiz.question.is_none() {
      quiz.question = random_question(&catalog.entries, quiz.kind, &mut rand::rng());
      if quiz.question.is_none() {
        tracing::debug!("Not enough words for a quiz ({} in catalog)", catalog.len());
      }
    }
    QuizTemplate::new(quiz, catalog.len(), catalog.error.clone().unwrap_or_default())
  };

  session::update_session(&session_id, browser);
  (jar, Html(template.render().unwrap_or_default())).into_response()
}

#[derive(Deserialize)]
pub struct AnswerForm {
  pub answer: String,
}

/// POST /quiz/answer - score the answer; the next GET draws a new question
pub async fn quiz_answer(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<AnswerForm>,
) -> Response {
  let (jar, session_id) = session::session_id(jar);
  let mut browser = load_session(&state, &session_id);
  let quiz = &mut browser.quiz;

  if let Some(question) = quiz.question.take() {
    let was_correct = question.is_correct(&form.answer);
    quiz.score.record(was_correct);
    quiz.feedback = Some(QuizFeedback {
      chosen: form.answer,
      correct_answer: question.correct_answer,
      was_correct,
    });
  }

  session::update_session(&session_id, browser);
  (jar, Redirect::to("/quiz")).into_response()
}

/// POST /quiz/reset - zero the running score
pub async fn quiz_reset(State(state): State<AppState>, jar: CookieJar) -> Response {
  let (jar, session_id) = session::session_id(jar);
  let mut browser = load_session(&state, &session_id);
  browser.quiz = QuizState {
    kind: browser.quiz.kind,
    ..QuizState::default()
  };
  session::update_session(&session_id, browser);
  (jar, Redirect::to("/quiz")).into_response()
}
