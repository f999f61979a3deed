use serde::{Deserialize, Serialize};

/// One meaning of a word: part of speech, definition and an optional example sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sense {
  pub part_of_speech: String,
  pub definition: String,
  #[serde(default)]
  pub example: Option<String>,
}

impl Sense {
  pub fn new(part_of_speech: &str, definition: &str, example: Option<&str>) -> Self {
    Self {
      part_of_speech: part_of_speech.to_string(),
      definition: definition.to_string(),
      example: example.map(|s| s.to_string()),
    }
  }
}

/// A word in the catalog. Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
  pub id: String,
  pub word: String,
  pub senses: Vec<Sense>,
  /// Free-text grouping used by insights and analytics
  pub category: String,
  #[serde(default)]
  pub synonyms: Vec<String>,
  #[serde(default)]
  pub antonyms: Vec<String>,
  #[serde(default)]
  pub pronunciation: Option<String>,
  #[serde(default)]
  pub audio_url: Option<String>,
  #[serde(default)]
  pub image_url: Option<String>,
}

impl VocabularyEntry {
  pub fn new(id: &str, word: &str, category: &str, senses: Vec<Sense>) -> Self {
    Self {
      id: id.to_string(),
      word: word.to_string(),
      senses,
      category: category.to_string(),
      synonyms: Vec::new(),
      antonyms: Vec::new(),
      pronunciation: None,
      audio_url: None,
      image_url: None,
    }
  }

  /// Definition of the first sense, if it has a non-empty one
  pub fn primary_definition(&self) -> Option<&str> {
    self
      .senses
      .first()
      .map(|s| s.definition.as_str())
      .filter(|d| !d.trim().is_empty())
  }

  pub fn primary_part_of_speech(&self) -> Option<&str> {
    self.senses.first().map(|s| s.part_of_speech.as_str())
  }
}
