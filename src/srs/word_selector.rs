//! Priority-based word selection for flashcard sessions.
//!
//! Each pick scores the whole catalog, skips the words shown most recently,
//! and draws uniformly from the few highest-priority candidates so the order
//! is never fully predictable.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::config;
use crate::domain::{Ledger, Rating, RecordOutcome, VocabularyEntry};

use super::priority::{word_priority, PriorityWeights};

/// Fixed sizes that shape a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
  /// Responses after which the session is exhausted
  pub session_length: u32,
  /// Trailing history size excluded from the next pick
  pub no_repeat_window: usize,
  /// Candidates the random draw is made from
  pub top_k: usize,
}

impl Default for PickerConfig {
  fn default() -> Self {
    Self {
      session_length: config::SESSION_LENGTH,
      no_repeat_window: config::NO_REPEAT_WINDOW,
      top_k: config::TOP_K_CANDIDATES,
    }
  }
}

/// A catalog word with its calculated priority
#[derive(Debug, Clone)]
pub struct ScoredWord<'c> {
  pub entry: &'c VocabularyEntry,
  pub priority: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
  #[default]
  Idle,
  InProgress,
  /// Terminal until the session is reset
  Exhausted,
}

/// Per-session response counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
  pub answered: u32,
  pub easy: u32,
  pub medium: u32,
  pub hard: u32,
}

impl SessionStats {
  fn record(&mut self, rating: Rating) {
    self.answered += 1;
    match rating {
      Rating::Easy => self.easy += 1,
      Rating::Medium => self.medium += 1,
      Rating::Hard => self.hard += 1,
    }
  }

  /// Share of easy responses, rounded percent
  pub fn accuracy_percent(&self) -> u32 {
    if self.answered == 0 {
      return 0;
    }
    (self.easy as f64 / self.answered as f64 * 100.0).round() as u32
  }

  /// Progress through a session of `session_length` responses, rounded percent
  pub fn progress_percent(&self, session_length: u32) -> u32 {
    if session_length == 0 {
      return 100;
    }
    (self.answered as f64 / session_length as f64 * 100.0).round().min(100.0) as u32
  }
}

/// Ephemeral state of one study session. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct StudySession {
  pub config: PickerConfig,
  pub weights: PriorityWeights,
  phase: SessionPhase,
  stats: SessionStats,
  /// Ids in the order they were shown
  history: Vec<String>,
  current: Option<String>,
}

impl StudySession {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: PickerConfig) -> Self {
    Self {
      config,
      ..Self::default()
    }
  }

  pub fn phase(&self) -> SessionPhase {
    self.phase
  }

  pub fn stats(&self) -> SessionStats {
    self.stats
  }

  pub fn history(&self) -> &[String] {
    &self.history
  }

  pub fn current_id(&self) -> Option<&str> {
    self.current.as_deref()
  }

  /// The displayed word, looked up in `catalog`
  pub fn current<'c>(&self, catalog: &'c [VocabularyEntry]) -> Option<&'c VocabularyEntry> {
    let id = self.current.as_deref()?;
    catalog.iter().find(|e| e.id == id)
  }

  /// Ids inside the no-repeat window
  pub fn recent(&self) -> &[String] {
    let start = self.history.len().saturating_sub(self.config.no_repeat_window);
    &self.history[start..]
  }

  /// Back to Idle with empty counters and history
  pub fn reset(&mut self) {
    self.phase = SessionPhase::Idle;
    self.stats = SessionStats::default();
    self.history.clear();
    self.current = None;
  }

  fn exhaust(&mut self) {
    self.phase = SessionPhase::Exhausted;
    self.current = None;
  }

  /// Select the next word to show.
  ///
  /// Returns None once the session cap is reached or no word is eligible;
  /// the session then stays exhausted until [`StudySession::reset`].
  pub fn pick_next<'c, R: Rng>(
    &mut self,
    catalog: &'c [VocabularyEntry],
    ledger: &Ledger,
    now: DateTime<Utc>,
    rng: &mut R,
  ) -> Option<&'c VocabularyEntry> {
    if self.phase == SessionPhase::Exhausted {
      return None;
    }
    if self.stats.answered >= self.config.session_length {
      self.exhaust();
      return None;
    }

    let candidates = rank_candidates(catalog, ledger, self.recent(), &self.weights, now);
    let Some(chosen) = choose_from_top(&candidates, self.config.top_k, rng) else {
      self.exhaust();
      return None;
    };

    self.phase = SessionPhase::InProgress;
    self.history.push(chosen.id.clone());
    self.current = Some(chosen.id.clone());
    Some(chosen)
  }

  /// Apply a rating to the displayed word and move on to the next one.
  ///
  /// Does nothing and returns None when no word is displayed. The caller is
  /// responsible for persisting `ledger` afterwards.
  pub fn record_response<R: Rng>(
    &mut self,
    catalog: &[VocabularyEntry],
    ledger: &mut Ledger,
    rating: Rating,
    now: DateTime<Utc>,
    rng: &mut R,
  ) -> Option<RecordOutcome> {
    let entry = self.current(catalog)?;
    let outcome = ledger.record(entry, rating, now);
    self.stats.record(rating);

    tracing::debug!(
      "Recorded {} for '{}' ({}/{})",
      rating.as_str(),
      entry.id,
      self.stats.answered,
      self.config.session_length
    );

    self.pick_next(catalog, ledger, now, rng);
    Some(outcome)
  }
}

/// Score every catalog word and order by descending priority.
///
/// Words in `recent` are left out unless that would leave nothing to pick.
/// Ties keep catalog order.
pub fn rank_candidates<'c>(
  catalog: &'c [VocabularyEntry],
  ledger: &Ledger,
  recent: &[String],
  weights: &PriorityWeights,
  now: DateTime<Utc>,
) -> Vec<ScoredWord<'c>> {
  let score = |entry: &'c VocabularyEntry| ScoredWord {
    entry,
    priority: word_priority(entry, ledger, weights, now),
  };

  let mut candidates: Vec<ScoredWord<'c>> = catalog
    .iter()
    .filter(|e| !recent.contains(&e.id))
    .map(score)
    .collect();

  if candidates.is_empty() {
    candidates = catalog.iter().map(score).collect();
  }

  candidates.sort_by(|a, b| b.priority.total_cmp(&a.priority));
  candidates
}

/// Uniform draw among the first `top_k` ranked candidates
pub fn choose_from_top<'c, R: Rng>(
  ranked: &[ScoredWord<'c>],
  top_k: usize,
  rng: &mut R,
) -> Option<&'c VocabularyEntry> {
  let top = &ranked[..ranked.len().min(top_k.max(1))];
  if top.is_empty() {
    return None;
  }
  let idx = rng.random_range(0..top.len());
  Some(top[idx].entry)
}
