//! Category rollups and study recommendations derived from the ledger.

use indexmap::IndexMap;

use crate::config;
use crate::domain::Ledger;

/// Accuracy summary for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryInsight {
  pub name: String,
  /// Percent, 0-100
  pub accuracy: f64,
  pub word_count: usize,
}

impl CategoryInsight {
  pub fn rounded_accuracy(&self) -> u32 {
    self.accuracy.round() as u32
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceInsights {
  pub strong_categories: Vec<CategoryInsight>,
  pub weak_categories: Vec<CategoryInsight>,
  pub recommendations: Vec<String>,
}

impl PerformanceInsights {
  /// Mean of the reported category accuracies, rounded percent
  pub fn average_category_accuracy(&self) -> u32 {
    let reported: Vec<f64> = self
      .strong_categories
      .iter()
      .chain(self.weak_categories.iter())
      .map(|c| c.accuracy)
      .collect();
    if reported.is_empty() {
      return 0;
    }
    (reported.iter().sum::<f64>() / reported.len() as f64).round() as u32
  }
}

#[derive(Default)]
struct CategoryTotals {
  attempts: u64,
  correct: u64,
  words: usize,
}

/// Group the ledger by stored category and split into strong and weak.
///
/// Categories appear in the order their first word entered the ledger;
/// there is no further sorting.
pub fn performance_insights(ledger: &Ledger) -> PerformanceInsights {
  let mut totals: IndexMap<&str, CategoryTotals> = IndexMap::new();
  for perf in ledger.attempted() {
    let entry = totals.entry(perf.category.as_str()).or_default();
    entry.attempts += perf.attempts as u64;
    entry.correct += perf.correct_attempts as u64;
    entry.words += 1;
  }

  let categories: Vec<CategoryInsight> = totals
    .into_iter()
    .filter(|(_, t)| t.words >= config::MIN_CATEGORY_WORDS)
    .map(|(name, t)| CategoryInsight {
      name: name.to_string(),
      accuracy: t.correct as f64 / t.attempts as f64 * 100.0,
      word_count: t.words,
    })
    .collect();

  let (strong, weak): (Vec<_>, Vec<_>) = categories
    .into_iter()
    .partition(|c| c.accuracy >= config::STRONG_ACCURACY_THRESHOLD);

  let mut recommendations = Vec::new();
  if let Some(weakest) = weak.first() {
    recommendations.push(format!(
      "Focus on {} words - you're at {}% accuracy.",
      weakest.name,
      weakest.rounded_accuracy()
    ));
  }
  if let Some(strongest) = strong.first() {
    recommendations.push(format!(
      "Great job with {}! You're excelling at {}% accuracy.",
      strongest.name,
      strongest.rounded_accuracy()
    ));
  }
  if ledger.total_words_studied >= config::REVIEW_RECOMMENDATION_THRESHOLD {
    recommendations.push("Consider reviewing your difficult words from previous sessions.".to_string());
  } else {
    recommendations.push("Keep practicing daily to build your vocabulary foundation.".to_string());
  }

  PerformanceInsights {
    strong_categories: strong.into_iter().take(config::CATEGORY_LIST_LIMIT).collect(),
    weak_categories: weak.into_iter().take(config::CATEGORY_LIST_LIMIT).collect(),
    recommendations,
  }
}

/// Whether the insights dashboard is open for a learner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardStatus {
  Locked,
  /// Close to unlocking; `remaining` words to go
  AlmostUnlocked { remaining: u32 },
  Unlocked,
}

pub fn dashboard_status(total_words_studied: u32) -> DashboardStatus {
  if total_words_studied >= config::DASHBOARD_UNLOCK_WORDS {
    DashboardStatus::Unlocked
  } else if total_words_studied >= config::DASHBOARD_HINT_WORDS {
    DashboardStatus::AlmostUnlocked {
      remaining: config::DASHBOARD_UNLOCK_WORDS - total_words_studied,
    }
  } else {
    DashboardStatus::Locked
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Rating, Sense, VocabularyEntry};
  use chrono::Utc;

  fn entry(id: &str, category: &str) -> VocabularyEntry {
    VocabularyEntry::new(id, id, category, vec![Sense::new("noun", "d", None)])
  }

  fn record(ledger: &mut Ledger, id: &str, category: &str, ratings: &[Rating]) {
    let e = entry(id, category);
    for r in ratings {
      ledger.record(&e, *r, Utc::now());
    }
  }

  #[test]
  fn test_empty_ledger_only_encourages() {
    let insights = performance_insights(&Ledger::new());
    assert!(insights.strong_categories.is_empty());
    assert!(insights.weak_categories.is_empty());
    assert_eq!(
      insights.recommendations,
      vec!["Keep practicing daily to build your vocabulary foundation.".to_string()]
    );
  }

  #[test]
  fn test_single_word_category_excluded() {
    let mut ledger = Ledger::new();
    record(&mut ledger, "a", "Sensory", &[Rating::Easy, Rating::Easy]);
    let insights = performance_insights(&ledger);
    assert!(insights.strong_categories.is_empty());
    assert!(insights.weak_categories.is_empty());
  }

  #[test]
  fn test_strong_and_weak_partition() {
    let mut ledger = Ledger::new();
    // Descriptive: 3 of 4 correct = 75%
    record(&mut ledger, "a", "Descriptive", &[Rating::Easy, Rating::Easy]);
    record(&mut ledger, "b", "Descriptive", &[Rating::Easy, Rating::Hard]);
    // Sensory: 1 of 3 correct = 33%
    record(&mut ledger, "c", "Sensory", &[Rating::Hard, Rating::Medium]);
    record(&mut ledger, "d", "Sensory", &[Rating::Easy]);

    let insights = performance_insights(&ledger);
    assert_eq!(insights.strong_categories.len(), 1);
    assert_eq!(insights.strong_categories[0].name, "Descriptive");
    assert_eq!(insights.strong_categories[0].accuracy, 75.0);
    assert_eq!(insights.strong_categories[0].word_count, 2);

    assert_eq!(insights.weak_categories.len(), 1);
    assert_eq!(insights.weak_categories[0].name, "Sensory");
    assert_eq!(insights.weak_categories[0].rounded_accuracy(), 33);

    assert_eq!(
      insights.recommendations,
      vec![
        "Focus on Sensory words - you're at 33% accuracy.".to_string(),
        "Great job with Descriptive! You're excelling at 75% accuracy.".to_string(),
        "Keep practicing daily to build your vocabulary foundation.".to_string(),
      ]
    );
    assert_eq!(insights.average_category_accuracy(), 54);
  }

  #[test]
  fn test_seventy_percent_is_strong() {
    let mut ledger = Ledger::new();
    // 7 correct out of 10 attempts across two words
    record(&mut ledger, "a", "Behavior", &[Rating::Easy; 5]);
    record(
      &mut ledger,
      "b",
      "Behavior",
      &[Rating::Easy, Rating::Easy, Rating::Hard, Rating::Hard, Rating::Hard],
    );
    let insights = performance_insights(&ledger);
    assert_eq!(insights.strong_categories.len(), 1);
    assert!(insights.weak_categories.is_empty());
  }

  #[test]
  fn test_lists_capped_in_discovery_order() {
    let mut ledger = Ledger::new();
    for i in 0..7 {
      let category = format!("Cat{}", i);
      record(&mut ledger, &format!("{}-a", i), &category, &[Rating::Hard]);
      record(&mut ledger, &format!("{}-b", i), &category, &[Rating::Hard]);
    }
    let insights = performance_insights(&ledger);
    let names: Vec<&str> = insights.weak_categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Cat0", "Cat1", "Cat2", "Cat3", "Cat4"]);
    assert_eq!(insights.recommendations[0], "Focus on Cat0 words - you're at 0% accuracy.");
  }

  #[test]
  fn test_review_recommendation_after_hundred_words() {
    let mut ledger = Ledger::new();
    ledger.total_words_studied = 100;
    let insights = performance_insights(&ledger);
    assert_eq!(
      insights.recommendations,
      vec!["Consider reviewing your difficult words from previous sessions.".to_string()]
    );
  }

  #[test]
  fn test_dashboard_status() {
    assert_eq!(dashboard_status(0), DashboardStatus::Locked);
    assert_eq!(dashboard_status(39), DashboardStatus::Locked);
    assert_eq!(dashboard_status(40), DashboardStatus::AlmostUnlocked { remaining: 10 });
    assert_eq!(dashboard_status(49), DashboardStatus::AlmostUnlocked { remaining: 1 });
    assert_eq!(dashboard_status(50), DashboardStatus::Unlocked);
  }
}
