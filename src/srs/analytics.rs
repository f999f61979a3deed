//! Catalog-wide learning statistics for the analytics page.

use indexmap::IndexMap;

use crate::config;
use crate::domain::{Ledger, VocabularyEntry, WordPerformance};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStats {
  pub name: String,
  pub total_attempts: u64,
  pub correct_attempts: u64,
  pub words_studied: usize,
  difficulty_sum: f64,
}

impl CategoryStats {
  pub fn accuracy_percent(&self) -> u32 {
    if self.total_attempts == 0 {
      return 0;
    }
    (self.correct_attempts as f64 / self.total_attempts as f64 * 100.0).round() as u32
  }

  /// Mean difficulty score of the studied words, 0-1
  pub fn average_difficulty(&self) -> f64 {
    if self.words_studied == 0 {
      return 0.0;
    }
    self.difficulty_sum / self.words_studied as f64
  }

  pub fn average_difficulty_percent(&self) -> u32 {
    (self.average_difficulty() * 100.0).round() as u32
  }
}

/// A studied word as listed on the analytics page
#[derive(Debug, Clone, PartialEq)]
pub struct WordSummary {
  pub id: String,
  pub word: String,
  pub category: String,
  pub attempts: u32,
  pub accuracy_percent: u32,
  pub difficulty: f64,
}

impl WordSummary {
  fn new(entry: &VocabularyEntry, perf: &WordPerformance) -> Self {
    Self {
      id: entry.id.clone(),
      word: entry.word.clone(),
      category: entry.category.clone(),
      attempts: perf.attempts,
      accuracy_percent: (perf.accuracy * 100.0).round() as u32,
      difficulty: perf.difficulty_score,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analytics {
  pub total_attempts: u64,
  pub total_correct: u64,
  /// Rounded percent over the whole ledger
  pub overall_accuracy: u32,
  pub total_words_studied: u32,
  pub categories: Vec<CategoryStats>,
  pub challenging_words: Vec<WordSummary>,
  pub mastered_words: Vec<WordSummary>,
}

/// Join the ledger against the current catalog.
///
/// Totals cover the whole ledger; category and word lists only cover words
/// present in `catalog`, grouped by the catalog's categories.
pub fn build_analytics(catalog: &[VocabularyEntry], ledger: &Ledger) -> Analytics {
  let studied: Vec<(&VocabularyEntry, &WordPerformance)> = catalog
    .iter()
    .filter_map(|entry| ledger.get(&entry.id).map(|perf| (entry, perf)))
    .collect();

  let mut categories: IndexMap<&str, CategoryStats> = IndexMap::new();
  for (entry, perf) in studied.iter().filter(|(_, p)| !p.is_new()) {
    let stats = categories
      .entry(entry.category.as_str())
      .or_insert_with(|| CategoryStats {
        name: entry.category.clone(),
        ..CategoryStats::default()
      });
    stats.total_attempts += perf.attempts as u64;
    stats.correct_attempts += perf.correct_attempts as u64;
    stats.words_studied += 1;
    stats.difficulty_sum += perf.difficulty_score;
  }

  let mut challenging: Vec<&(&VocabularyEntry, &WordPerformance)> = studied
    .iter()
    .filter(|(_, p)| p.attempts >= config::CHALLENGING_MIN_ATTEMPTS)
    .collect();
  challenging.sort_by(|(_, a), (_, b)| b.difficulty_score.total_cmp(&a.difficulty_score));

  let mastered = studied.iter().filter(|(_, p)| {
    p.attempts >= config::MASTERED_MIN_ATTEMPTS && p.accuracy >= config::MASTERED_MIN_ACCURACY
  });

  Analytics {
    total_attempts: ledger.total_attempts(),
    total_correct: ledger.total_correct(),
    overall_accuracy: ledger.overall_accuracy().round() as u32,
    total_words_studied: ledger.total_words_studied,
    categories: categories.into_values().collect(),
    challenging_words: challenging
      .into_iter()
      .take(config::WORD_LIST_LIMIT)
      .map(|(e, p)| WordSummary::new(e, p))
      .collect(),
    mastered_words: mastered
      .take(config::WORD_LIST_LIMIT)
      .map(|(e, p)| WordSummary::new(e, p))
      .collect(),
  }
}
