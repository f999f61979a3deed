//! The user's own word list, fetched from the dictionary instead of the
//! built-in catalog when non-empty.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedWords {
  words: Vec<String>,
}

/// Trimmed, lower-cased, NFC form used for storage and comparison
pub fn normalize_word(word: &str) -> String {
  word.trim().nfc().collect::<String>().to_lowercase()
}

/// Split free text into candidate words on commas and whitespace
pub fn parse_word_input(input: &str) -> Vec<String> {
  input
    .split(|c: char| c == ',' || c.is_whitespace())
    .filter(|w| !w.is_empty())
    .map(str::to_string)
    .collect()
}

impl SavedWords {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn words(&self) -> &[String] {
    &self.words
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn contains(&self, word: &str) -> bool {
    self.words.contains(&normalize_word(word))
  }

  /// Append new words in order. Returns how many were added.
  pub fn add_words<S: AsRef<str>>(&mut self, words: &[S]) -> usize {
    let before = self.words.len();
    for word in words {
      let word = normalize_word(word.as_ref());
      if !word.is_empty() && !self.words.contains(&word) {
        self.words.push(word);
      }
    }
    self.words.len() - before
  }

  /// Returns false if the word was not in the list
  pub fn remove_word(&mut self, word: &str) -> bool {
    let word = normalize_word(word);
    let before = self.words.len();
    self.words.retain(|w| *w != word);
    self.words.len() != before
  }

  pub fn clear_all(&mut self) {
    self.words.clear();
  }

  /// Drop entries that are blank or repeated, as a stored list may contain
  pub fn sanitize(&mut self) {
    let words = std::mem::take(&mut self.words);
    self.add_words(words.as_slice());
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_add_words_normalizes_and_dedups() {
    let mut saved = SavedWords::new();
    let added = saved.add_words(&["  Apple ", "banana", "", "APPLE", "banana", "cherry"]);
    assert_eq!(added, 3);
    assert_eq!(saved.words(), &["apple", "banana", "cherry"]);

    assert_eq!(saved.add_words(&["Cherry", "date"]), 1);
    assert_eq!(saved.words(), &["apple", "banana", "cherry", "date"]);
  }

  #[test]
  fn test_remove_and_clear() {
    let mut saved = SavedWords::new();
    saved.add_words(&["one", "two", "three"]);
    assert!(saved.remove_word("Two"));
    assert!(!saved.remove_word("missing"));
    assert_eq!(saved.words(), &["one", "three"]);

    saved.clear_all();
    assert!(saved.is_empty());
  }

  #[test]
  fn test_parse_word_input() {
    let words = parse_word_input("alpha, beta\ngamma  delta,,\tepsilon");
    assert_eq!(words, vec!["alpha", "beta", "gamma", "delta", "epsilon"]);
    assert!(parse_word_input(" , \n").is_empty());
  }

  #[test]
  fn test_nfc_normalization() {
    let mut saved = SavedWords::new();
    // "café" precomposed and decomposed
    saved.add_words(&["caf\u{e9}", "cafe\u{301}"]);
    assert_eq!(saved.len(), 1);
    assert!(saved.contains("CAFÉ"));
  }

  #[test]
  fn test_serializes_as_plain_array() {
    let mut saved = SavedWords::new();
    saved.add_words(&["a", "b"]);
    assert_eq!(serde_json::to_string(&saved).unwrap(), r#"["a","b"]"#);

    let mut parsed: SavedWords = serde_json::from_str(r#"["x", " X ", ""]"#).unwrap();
    parsed.sanitize();
    assert_eq!(parsed.words(), &["x"]);
  }
}
