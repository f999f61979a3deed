use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::entry::VocabularyEntry;

/// Difficulty score a word starts from before its first response
pub const INITIAL_DIFFICULTY: f64 = 0.5;

/// Self-reported recall difficulty for a flashcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
  Easy,
  Medium,
  Hard,
}

impl Rating {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "easy" => Some(Self::Easy),
      "medium" => Some(Self::Medium),
      "hard" => Some(Self::Hard),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Easy => "easy",
      Self::Medium => "medium",
      Self::Hard => "hard",
    }
  }

  /// Value folded into the running difficulty average
  pub fn difficulty_contribution(&self) -> f64 {
    match self {
      Self::Easy => 0.1,
      Self::Medium => 0.5,
      Self::Hard => 0.9,
    }
  }

  /// Only an easy recall counts as a correct attempt (no partial credit)
  pub fn is_correct(&self) -> bool {
    matches!(self, Self::Easy)
  }
}

/// Accumulated statistics for one word, keyed by entry id in the [`Ledger`].
///
/// The serialized shape (camelCase, `lastSeen` in epoch milliseconds) is the
/// persisted storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPerformance {
  #[serde(default)]
  pub word_id: String,
  #[serde(default)]
  pub attempts: u32,
  #[serde(default)]
  pub correct_attempts: u32,
  #[serde(default = "default_difficulty")]
  pub difficulty_score: f64,
  #[serde(default)]
  pub accuracy: f64,
  #[serde(with = "chrono::serde::ts_milliseconds", default = "epoch")]
  pub last_seen: DateTime<Utc>,
  #[serde(default)]
  pub category: String,
}

fn default_difficulty() -> f64 {
  INITIAL_DIFFICULTY
}

fn epoch() -> DateTime<Utc> {
  DateTime::<Utc>::UNIX_EPOCH
}

impl WordPerformance {
  pub fn new(word_id: &str, category: &str) -> Self {
    Self {
      word_id: word_id.to_string(),
      attempts: 0,
      correct_attempts: 0,
      difficulty_score: INITIAL_DIFFICULTY,
      accuracy: 0.0,
      last_seen: epoch(),
      category: category.to_string(),
    }
  }

  /// A record with no attempts is treated exactly like a missing one
  pub fn is_new(&self) -> bool {
    self.attempts == 0
  }

  /// Fold one response into the record
  pub fn apply(&mut self, rating: Rating, now: DateTime<Utc>) {
    self.attempts += 1;
    if rating.is_correct() {
      self.correct_attempts += 1;
    }
    self.accuracy = self.correct_attempts as f64 / self.attempts as f64;
    self.difficulty_score = (self.difficulty_score + rating.difficulty_contribution()) / 2.0;
    self.last_seen = now;
  }

  /// Restore invariants on a record read back from storage
  fn sanitize(&mut self) {
    if self.correct_attempts > self.attempts {
      self.correct_attempts = self.attempts;
    }
    self.accuracy = if self.attempts > 0 {
      self.correct_attempts as f64 / self.attempts as f64
    } else {
      0.0
    };
    self.difficulty_score = if self.difficulty_score.is_finite() {
      self.difficulty_score.clamp(0.0, 1.0)
    } else {
      INITIAL_DIFFICULTY
    };
  }
}

/// Result of recording one response
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
  /// True when the word had no attempts before this response
  pub was_first_attempt: bool,
  pub performance: WordPerformance,
}

/// Per-word performance history plus the lifetime words-studied counter.
///
/// Records keep their first-insertion order, which is the order categories
/// are discovered in by the insights aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
  #[serde(default)]
  pub performances: IndexMap<String, WordPerformance>,
  #[serde(default)]
  pub total_words_studied: u32,
}

impl Ledger {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, word_id: &str) -> Option<&WordPerformance> {
    self.performances.get(word_id)
  }

  /// Record a response for `entry`.
  ///
  /// The first-attempt flag is taken from the record as it was before the
  /// update and is the only input to the lifetime counter.
  pub fn record(&mut self, entry: &VocabularyEntry, rating: Rating, now: DateTime<Utc>) -> RecordOutcome {
    let previous = self.performances.get(&entry.id);
    let was_first_attempt = previous.is_none_or(WordPerformance::is_new);

    let mut performance = previous
      .cloned()
      .unwrap_or_else(|| WordPerformance::new(&entry.id, &entry.category));
    performance.apply(rating, now);

    self.performances.insert(entry.id.clone(), performance.clone());
    self.count_studied(was_first_attempt);

    RecordOutcome {
      was_first_attempt,
      performance,
    }
  }

  fn count_studied(&mut self, was_first_attempt: bool) {
    if was_first_attempt {
      self.total_words_studied += 1;
    }
  }

  /// Words with at least one attempt
  pub fn attempted(&self) -> impl Iterator<Item = &WordPerformance> {
    self.performances.values().filter(|p| !p.is_new())
  }

  pub fn total_attempts(&self) -> u64 {
    self.performances.values().map(|p| p.attempts as u64).sum()
  }

  pub fn total_correct(&self) -> u64 {
    self.performances.values().map(|p| p.correct_attempts as u64).sum()
  }

  /// Overall accuracy in percent, 0 when nothing has been attempted
  pub fn overall_accuracy(&self) -> f64 {
    let attempts = self.total_attempts();
    if attempts == 0 {
      return 0.0;
    }
    self.total_correct() as f64 / attempts as f64 * 100.0
  }

  /// Repair records loaded from storage so every invariant holds again
  pub fn sanitize(&mut self) {
    for (id, performance) in self.performances.iter_mut() {
      if performance.word_id.is_empty() {
        performance.word_id = id.clone();
      }
      performance.sanitize();
    }
  }
}
