//! dictionaryapi.dev client.

use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

use crate::domain::Sense;

use super::{DictionaryError, WordData, WordSource};

#[derive(Debug, Deserialize)]
pub struct ApiDefinition {
  pub definition: String,
  #[serde(default)]
  pub synonyms: Vec<String>,
  #[serde(default)]
  pub antonyms: Vec<String>,
  #[serde(default)]
  pub example: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMeaning {
  pub part_of_speech: String,
  #[serde(default)]
  pub definitions: Vec<ApiDefinition>,
  #[serde(default)]
  pub synonyms: Vec<String>,
  #[serde(default)]
  pub antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiPhonetic {
  #[serde(default)]
  pub text: Option<String>,
  #[serde(default)]
  pub audio: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiEntry {
  pub word: String,
  #[serde(default)]
  pub phonetic: Option<String>,
  #[serde(default)]
  pub phonetics: Vec<ApiPhonetic>,
  #[serde(default)]
  pub meanings: Vec<ApiMeaning>,
}

fn non_empty(s: &Option<String>) -> Option<String> {
  s.as_ref().filter(|s| !s.is_empty()).cloned()
}

fn push_unique(list: &mut Vec<String>, items: &[String]) {
  for item in items {
    if !list.contains(item) {
      list.push(item.clone());
    }
  }
}

/// Flatten an API entry into [`WordData`].
///
/// Synonyms and antonyms are gathered from meanings and their definitions,
/// de-duplicated in first-seen order. The pronunciation prefers a phonetic
/// that carries audio.
pub fn normalize(entry: ApiEntry) -> WordData {
  let mut senses = Vec::new();
  let mut synonyms = Vec::new();
  let mut antonyms = Vec::new();

  for meaning in &entry.meanings {
    push_unique(&mut synonyms, &meaning.synonyms);
    push_unique(&mut antonyms, &meaning.antonyms);
    for def in &meaning.definitions {
      push_unique(&mut synonyms, &def.synonyms);
      push_unique(&mut antonyms, &def.antonyms);
      senses.push(Sense {
        part_of_speech: meaning.part_of_speech.clone(),
        definition: def.definition.clone(),
        example: def.example.clone(),
      });
    }
  }

  let with_audio = entry.phonetics.iter().find(|p| non_empty(&p.audio).is_some());
  let pronunciation = with_audio
    .and_then(|p| non_empty(&p.text))
    .or_else(|| non_empty(&entry.phonetic))
    .or_else(|| entry.phonetics.first().and_then(|p| non_empty(&p.text)));

  WordData {
    word: entry.word,
    pronunciation,
    audio_url: with_audio.and_then(|p| non_empty(&p.audio)),
    senses,
    synonyms,
    antonyms,
  }
}

/// Async client for the free dictionary API
#[derive(Debug, Clone)]
pub struct DictionaryClient {
  client: Client,
  base_url: String,
}

impl DictionaryClient {
  pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DictionaryError> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
    })
  }

  pub fn word_url(&self, word: &str) -> String {
    format!("{}/{}", self.base_url, urlencoding::encode(word.trim()))
  }

  async fn request(&self, word: &str) -> Result<Vec<ApiEntry>, DictionaryError> {
    let response = self.client.get(self.word_url(word)).send().await?;
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
      return Err(DictionaryError::NotFound(word.to_string()));
    }
    if !status.is_success() {
      return Err(DictionaryError::Status(status.as_u16()));
    }
    Ok(response.json().await?)
  }

  pub async fn get_word_data(&self, word: &str) -> Result<WordData, DictionaryError> {
    let entries = self.request(word).await?;
    let first = entries
      .into_iter()
      .next()
      .ok_or_else(|| DictionaryError::NotFound(word.to_string()))?;
    Ok(normalize(first))
  }
}

impl WordSource for DictionaryClient {
  fn fetch_word(&self, word: &str) -> impl Future<Output = Result<WordData, DictionaryError>> + Send {
    self.get_word_data(word)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const SAMPLE_RESPONSE: &str = r#"[
    {
      "word": "ephemeral",
      "phonetic": "/ɪˈfɛm(ə)ɹəl/",
      "phonetics": [
        {"text": "/ɪˈfɛməɹəl/", "audio": ""},
        {"text": "/əˈfɛməɹəl/", "audio": "https://example.org/ephemeral-us.mp3"}
      ],
      "meanings": [
        {
          "partOfSpeech": "adjective",
          "definitions": [
            {"definition": "Lasting for a short period of time.", "synonyms": ["fleeting"], "antonyms": [],
             "example": "an ephemeral pleasure"}
          ],
          "synonyms": ["transient", "fleeting"],
          "antonyms": ["permanent"]
        },
        {
          "partOfSpeech": "noun",
          "definitions": [
            {"definition": "Something which lasts for a short period of time.", "synonyms": [], "antonyms": []}
          ],
          "synonyms": [],
          "antonyms": []
        }
      ],
      "license": {"name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0"},
      "sourceUrls": ["https://en.wiktionary.org/wiki/ephemeral"]
    }
  ]"#;

  #[test]
  fn test_normalize_response() {
    let entries: Vec<ApiEntry> = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
    let data = normalize(entries.into_iter().next().unwrap());

    assert_eq!(data.word, "ephemeral");
    assert_eq!(data.pronunciation.as_deref(), Some("/əˈfɛməɹəl/"));
    assert_eq!(data.audio_url.as_deref(), Some("https://example.org/ephemeral-us.mp3"));
    assert_eq!(data.senses.len(), 2);
    assert_eq!(data.senses[0].part_of_speech, "adjective");
    assert_eq!(data.senses[0].example.as_deref(), Some("an ephemeral pleasure"));
    assert_eq!(data.senses[1].part_of_speech, "noun");
    assert_eq!(data.synonyms, vec!["transient", "fleeting"]);
    assert_eq!(data.antonyms, vec!["permanent"]);
  }

  #[test]
  fn test_pronunciation_falls_back_to_phonetic() {
    let json = r#"{"word": "cat", "phonetic": "/kæt/", "phonetics": [{"text": "/kat/"}], "meanings": []}"#;
    let data = normalize(serde_json::from_str(json).unwrap());
    assert_eq!(data.pronunciation.as_deref(), Some("/kæt/"));
    assert!(data.audio_url.is_none());

    let json = r#"{"word": "cat", "phonetics": [{"text": "/kat/"}]}"#;
    let data = normalize(serde_json::from_str(json).unwrap());
    assert_eq!(data.pronunciation.as_deref(), Some("/kat/"));
  }

  #[test]
  fn test_word_url_encodes_word() {
    let client = DictionaryClient::new("http://localhost:1/api/", Duration::from_secs(1)).unwrap();
    assert_eq!(client.word_url("ice cream"), "http://localhost:1/api/ice%20cream");
  }
}
