//! The in-memory word catalog and how it gets loaded.

use futures::future::join_all;
use std::collections::HashSet;
use thiserror::Error;

use crate::dictionary::WordSource;
use crate::domain::VocabularyEntry;

use super::sample::{placeholder_entry, sample_catalog};
use super::saved_words::SavedWords;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
  #[error("No words were requested")]
  NoWordsRequested,

  #[error("Failed to load any of {0} words from the dictionary")]
  AllFailed(usize),
}

/// Where the current catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
  Sample,
  Dictionary,
  /// Every lookup failed; only the placeholder entry is present
  Fallback,
}

impl CatalogSource {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Sample => "sample",
      Self::Dictionary => "dictionary",
      Self::Fallback => "fallback",
    }
  }
}

#[derive(Debug, Clone)]
pub struct Catalog {
  pub entries: Vec<VocabularyEntry>,
  pub source: CatalogSource,
  /// Message shown with a retry action after a failed load
  pub error: Option<String>,
  /// Bumped on every replacement so sessions can notice a new catalog
  pub generation: u64,
}

impl Catalog {
  pub fn sample() -> Self {
    Self::new(sample_catalog(), CatalogSource::Sample)
  }

  pub fn new(entries: Vec<VocabularyEntry>, source: CatalogSource) -> Self {
    Self {
      entries,
      source,
      error: None,
      generation: 0,
    }
  }

  pub fn fallback(error: &CatalogError) -> Self {
    Self {
      entries: vec![placeholder_entry()],
      source: CatalogSource::Fallback,
      error: Some(error.to_string()),
      generation: 0,
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn find(&self, id: &str) -> Option<&VocabularyEntry> {
    self.entries.iter().find(|e| e.id == id)
  }

  /// Swap in a freshly loaded catalog
  pub fn replace(&mut self, next: Catalog) {
    let generation = self.generation + 1;
    *self = Catalog { generation, ..next };
  }
}

/// Fetch every word concurrently and keep the ones that resolve.
///
/// Individual failures are logged and dropped. Duplicate ids keep the first
/// occurrence.
pub async fn load_catalog<S: WordSource + Sync>(
  source: &S,
  words: &[String],
) -> Result<Vec<VocabularyEntry>, CatalogError> {
  if words.is_empty() {
    return Err(CatalogError::NoWordsRequested);
  }

  let results = join_all(words.iter().map(|word| async move {
    let result = source.fetch_word(word).await.and_then(|data| data.into_entry());
    (word, result)
  }))
  .await;

  let mut seen = HashSet::new();
  let mut entries = Vec::with_capacity(words.len());
  for (word, result) in results {
    match result {
      Ok(entry) => {
        if seen.insert(entry.id.clone()) {
          entries.push(entry);
        }
      }
      Err(e) => tracing::warn!("Skipping '{}': {}", word, e),
    }
  }

  if entries.is_empty() {
    return Err(CatalogError::AllFailed(words.len()));
  }

  tracing::info!("Loaded {} of {} words from the dictionary", entries.len(), words.len());
  Ok(entries)
}

/// Build the catalog for the current word lists.
///
/// The saved list wins over the configured one; with neither the built-in
/// sample catalog is used. A failed load yields the placeholder catalog.
pub async fn build_catalog<S: WordSource + Sync>(
  source: &S,
  saved: &SavedWords,
  configured: &[String],
) -> Catalog {
  let words: &[String] = if !saved.is_empty() {
    saved.words()
  } else {
    configured
  };

  if words.is_empty() {
    return Catalog::sample();
  }

  match load_catalog(source, words).await {
    Ok(entries) => Catalog::new(entries, CatalogSource::Dictionary),
    Err(e) => {
      tracing::warn!("Catalog load failed: {}", e);
      Catalog::fallback(&e)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dictionary::{DictionaryError, WordData};
  use crate::domain::Sense;
  use std::collections::HashMap;
  use std::future::Future;

  /// In-memory dictionary keyed by lower-cased word
  struct FakeSource {
    words: HashMap<String, &'static str>,
  }

  impl FakeSource {
    fn new(pairs: &[(&str, &'static str)]) -> Self {
      Self {
        words: pairs.iter().map(|(w, d)| (w.to_string(), *d)).collect(),
      }
    }
  }

  impl WordSource for FakeSource {
    fn fetch_word(&self, word: &str) -> impl Future<Output = Result<WordData, DictionaryError>> + Send {
      let result = match self.words.get(&word.to_lowercase()) {
        Some(definition) => Ok(WordData {
          word: word.to_string(),
          senses: vec![Sense::new("noun", definition, None)],
          ..WordData::default()
        }),
        None => Err(DictionaryError::NotFound(word.to_string())),
      };
      async move { result }
    }
  }

  fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
  }

  #[tokio::test]
  async fn test_partial_failure_keeps_successes() {
    let source = FakeSource::new(&[("apple", "a fruit"), ("pear", "another fruit")]);
    let entries = load_catalog(&source, &words(&["apple", "zzzz", "pear"])).await.unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["apple", "pear"]);
  }

  #[tokio::test]
  async fn test_total_failure() {
    let source = FakeSource::new(&[]);
    let err = load_catalog(&source, &words(&["x", "y"])).await.unwrap_err();
    assert_eq!(err, CatalogError::AllFailed(2));

    let err = load_catalog(&source, &[]).await.unwrap_err();
    assert_eq!(err, CatalogError::NoWordsRequested);
  }

  #[tokio::test]
  async fn test_duplicate_ids_dropped() {
    let source = FakeSource::new(&[("apple", "a fruit")]);
    let entries = load_catalog(&source, &words(&["apple", "Apple"])).await.unwrap();
    assert_eq!(entries.len(), 1);
  }

  #[tokio::test]
  async fn test_build_catalog_prefers_saved_words() {
    let source = FakeSource::new(&[("apple", "a fruit"), ("kale", "a leaf")]);
    let mut saved = SavedWords::new();
    saved.add_words(&["kale"]);

    let catalog = build_catalog(&source, &saved, &words(&["apple"])).await;
    assert_eq!(catalog.source, CatalogSource::Dictionary);
    assert_eq!(catalog.entries[0].id, "kale");

    let catalog = build_catalog(&source, &SavedWords::new(), &words(&["apple"])).await;
    assert_eq!(catalog.entries[0].id, "apple");
  }

  #[tokio::test]
  async fn test_build_catalog_defaults_to_sample() {
    let source = FakeSource::new(&[]);
    let catalog = build_catalog(&source, &SavedWords::new(), &[]).await;
    assert_eq!(catalog.source, CatalogSource::Sample);
    assert_eq!(catalog.len(), 10);
    assert!(catalog.error.is_none());
  }

  #[tokio::test]
  async fn test_build_catalog_falls_back_to_placeholder() {
    let source = FakeSource::new(&[]);
    let catalog = build_catalog(&source, &SavedWords::new(), &words(&["nope"])).await;
    assert_eq!(catalog.source, CatalogSource::Fallback);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.error.is_some());
  }

  #[test]
  fn test_replace_bumps_generation() {
    let mut catalog = Catalog::sample();
    assert_eq!(catalog.generation, 0);
    catalog.replace(Catalog::fallback(&CatalogError::AllFailed(1)));
    assert_eq!(catalog.generation, 1);
    assert_eq!(catalog.source, CatalogSource::Fallback);
    catalog.replace(Catalog::sample());
    assert_eq!(catalog.generation, 2);
    assert!(catalog.find("ephemeral").is_some());
  }
}
