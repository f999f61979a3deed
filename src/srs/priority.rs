//! Priority scoring for word selection.
//!
//! An additive heuristic re-evaluated on every pick. It has no per-word due
//! date: harder, less accurate and longer-unseen words simply score higher.

use chrono::{DateTime, Utc};

use crate::config;
use crate::domain::{Ledger, VocabularyEntry, WordPerformance};

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Weights of the priority formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityWeights {
  pub new_word: f64,
  pub base: f64,
  pub difficulty: f64,
  pub recency_per_day: f64,
  pub recency_cap: f64,
  pub accuracy: f64,
  pub max: f64,
}

impl Default for PriorityWeights {
  fn default() -> Self {
    Self {
      new_word: config::NEW_WORD_PRIORITY,
      base: config::BASE_PRIORITY,
      difficulty: config::DIFFICULTY_WEIGHT,
      recency_per_day: config::RECENCY_RATE_PER_DAY,
      recency_cap: config::RECENCY_CAP,
      accuracy: config::ACCURACY_WEIGHT,
      max: config::MAX_PRIORITY,
    }
  }
}

impl PriorityWeights {
  /// Priority for a single performance record, or the new-word priority if there is none
  pub fn score(&self, performance: Option<&WordPerformance>, now: DateTime<Utc>) -> f64 {
    let Some(perf) = performance.filter(|p| !p.is_new()) else {
      return self.new_word;
    };

    let days_since = (now - perf.last_seen).num_milliseconds() as f64 / MILLIS_PER_DAY;
    let recency = (days_since * self.recency_per_day).min(self.recency_cap);

    let priority = self.base
      + perf.difficulty_score * self.difficulty
      + recency
      + (1.0 - perf.accuracy) * self.accuracy;

    priority.clamp(0.0, self.max)
  }
}

/// Higher means "show me sooner"
pub fn word_priority(
  entry: &VocabularyEntry,
  ledger: &Ledger,
  weights: &PriorityWeights,
  now: DateTime<Utc>,
) -> f64 {
  weights.score(ledger.get(&entry.id), now)
}
