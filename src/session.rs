//! Simple in-memory session storage for browser sessions.
//!
//! Stores the study session and quiz state keyed by session ID (from cookie).
//! Sessions auto-expire after a configurable duration of inactivity.

use crate::config;
use crate::srs::{QuizKind, QuizQuestion, QuizScore, StudySession};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

pub const SESSION_COOKIE_NAME: &str = "vm_session";

/// Outcome of the last quiz answer, shown above the next question
#[derive(Debug, Clone, PartialEq)]
pub struct QuizFeedback {
  pub chosen: String,
  pub correct_answer: String,
  pub was_correct: bool,
}

#[derive(Debug, Clone, Default)]
pub struct QuizState {
  pub kind: QuizKind,
  pub question: Option<QuizQuestion>,
  pub score: QuizScore,
  pub feedback: Option<QuizFeedback>,
}

/// Everything one browser keeps between requests
#[derive(Debug, Clone, Default)]
pub struct BrowserSession {
  pub study: StudySession,
  pub quiz: QuizState,
  /// Catalog generation the study session was built against
  pub catalog_generation: u64,
}

impl BrowserSession {
  /// Start over if the catalog was replaced since this session last ran
  pub fn sync_catalog(&mut self, generation: u64) {
    if self.catalog_generation != generation {
      self.study.reset();
      self.quiz.question = None;
      self.quiz.feedback = None;
      self.catalog_generation = generation;
    }
  }
}

/// Session entry with last access time for expiration
struct SessionEntry {
  session: BrowserSession,
  last_access: DateTime<Utc>,
}

/// Global session store
static SESSIONS: LazyLock<Mutex<HashMap<String, SessionEntry>>> =
  LazyLock::new(|| Mutex::new(HashMap::new()));

fn lock_sessions() -> MutexGuard<'static, HashMap<String, SessionEntry>> {
  // Entries are plain values; a panic elsewhere cannot leave one half-written
  SESSIONS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Get or create a session for the given ID
pub fn get_session(session_id: &str) -> BrowserSession {
  let mut sessions = lock_sessions();

  // Clean up expired sessions occasionally (~10% chance)
  if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
    cleanup_expired(&mut sessions);
  }

  let entry = sessions
    .entry(session_id.to_string())
    .or_insert_with(|| SessionEntry {
      session: BrowserSession::default(),
      last_access: Utc::now(),
    });
  entry.last_access = Utc::now();
  entry.session.clone()
}

/// Update a session
pub fn update_session(session_id: &str, session: BrowserSession) {
  lock_sessions().insert(
    session_id.to_string(),
    SessionEntry {
      session,
      last_access: Utc::now(),
    },
  );
}

/// Clean up expired sessions
fn cleanup_expired(sessions: &mut HashMap<String, SessionEntry>) {
  let expiry = Utc::now() - Duration::hours(config::SESSION_EXPIRY_HOURS);
  sessions.retain(|_, entry| entry.last_access > expiry);
}

/// Generate a new session ID
pub fn generate_session_id() -> String {
  use rand::Rng;
  let mut rng = rand::rng();
  (0..32)
    .map(|_| {
      let idx = rng.random_range(0..36);
      if idx < 10 {
        (b'0' + idx) as char
      } else {
        (b'a' + idx - 10) as char
      }
    })
    .collect()
}

/// Session ID from the cookie jar, issuing a new cookie if there is none
pub fn session_id(jar: CookieJar) -> (CookieJar, String) {
  if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
    let id = cookie.value().to_string();
    return (jar, id);
  }

  let id = generate_session_id();
  let cookie = Cookie::build((SESSION_COOKIE_NAME, id.clone()))
    .path("/")
    .http_only(true)
    .secure(false)
    .max_age(time::Duration::hours(config::SESSION_EXPIRY_HOURS))
    .build();
  (jar.add(cookie), id)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_session_round_trip() {
    let id = generate_session_id();
    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

    let mut session = get_session(&id);
    assert_eq!(session.quiz.score.answered, 0);
    session.quiz.score.record(true);
    update_session(&id, session);

    assert_eq!(get_session(&id).quiz.score.correct, 1);
  }

  #[test]
  fn test_sync_catalog_resets_on_new_generation() {
    let mut session = BrowserSession::default();
    session.quiz.feedback = Some(QuizFeedback {
      chosen: "a".into(),
      correct_answer: "b".into(),
      was_correct: false,
    });
    session.quiz.score.record(false);

    session.sync_catalog(0);
    assert!(session.quiz.feedback.is_some());

    session.sync_catalog(3);
    assert_eq!(session.catalog_generation, 3);
    assert!(session.quiz.feedback.is_none());
    // Score survives a catalog swap
    assert_eq!(session.quiz.score.answered, 1);
  }

  #[test]
  fn test_session_id_reuses_cookie() {
    let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE_NAME, "abc"));
    let (_, id) = session_id(jar);
    assert_eq!(id, "abc");

    let (jar, id) = session_id(CookieJar::new());
    assert_eq!(jar.get(SESSION_COOKIE_NAME).map(|c| c.value().to_string()), Some(id));
  }
}
