//! Dictionary lookups that feed the word catalog.
//!
//! [`WordSource`] is the seam between catalog loading and the remote
//! dictionary; [`DictionaryClient`] is the dictionaryapi.dev implementation.

pub mod client;

use std::future::Future;
use thiserror::Error;

use crate::config;
use crate::domain::{Sense, VocabularyEntry};

pub use client::DictionaryClient;

#[derive(Error, Debug)]
pub enum DictionaryError {
  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("API request failed: {0}")]
  Status(u16),

  #[error("No data found for '{0}'")]
  NotFound(String),

  #[error("No definitions for '{0}'")]
  NoDefinitions(String),
}

/// Normalized dictionary data for one word
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordData {
  pub word: String,
  pub pronunciation: Option<String>,
  pub audio_url: Option<String>,
  pub senses: Vec<Sense>,
  pub synonyms: Vec<String>,
  pub antonyms: Vec<String>,
}

impl WordData {
  /// Catalog entry for this word.
  ///
  /// The id is the lower-cased word; the category is the first part of
  /// speech, capitalized, since the dictionary has no notion of categories.
  pub fn into_entry(self) -> Result<VocabularyEntry, DictionaryError> {
    if self.senses.iter().all(|s| s.definition.trim().is_empty()) {
      return Err(DictionaryError::NoDefinitions(self.word));
    }

    let category = self
      .senses
      .first()
      .map(|s| capitalize(&s.part_of_speech))
      .filter(|c| !c.is_empty())
      .unwrap_or_else(|| config::DEFAULT_CATEGORY.to_string());

    Ok(VocabularyEntry {
      id: self.word.to_lowercase(),
      word: self.word,
      senses: self.senses,
      category,
      synonyms: self.synonyms,
      antonyms: self.antonyms,
      pronunciation: self.pronunciation,
      audio_url: self.audio_url,
      image_url: None,
    })
  }
}

fn capitalize(s: &str) -> String {
  let mut chars = s.trim().chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Anything that can look a word up
pub trait WordSource {
  fn fetch_word(&self, word: &str) -> impl Future<Output = Result<WordData, DictionaryError>> + Send;
}
