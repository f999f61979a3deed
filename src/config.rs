//! Application configuration constants.
//!
//! Tunables for the picker, quiz and insights live here as constants.
//! Deployment settings (database path, dictionary endpoint, startup word
//! list) are loaded at runtime from `config.toml`, `.env` or defaults.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;

// ==================== Runtime Settings ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct AppConfig {
  database: Option<DatabaseConfig>,
  dictionary: Option<DictionaryConfig>,
  catalog: Option<CatalogConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct DatabaseConfig {
  path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DictionaryConfig {
  base_url: Option<String>,
  timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogConfig {
  words: Option<Vec<String>>,
}

/// Settings resolved once at startup
#[derive(Debug, Clone)]
pub struct Settings {
  pub database_path: PathBuf,
  pub dictionary_base_url: String,
  pub request_timeout: Duration,
  /// Words fetched from the dictionary when the saved list is empty.
  /// Empty means the built-in sample catalog is used.
  pub catalog_words: Vec<String>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      database_path: PathBuf::from(paths::db_path()),
      dictionary_base_url: DICTIONARY_API_BASE_URL.to_string(),
      request_timeout: Duration::from_secs(DICTIONARY_TIMEOUT_SECS),
      catalog_words: Vec::new(),
    }
  }
}

/// Load settings with priority: config.toml > .env / environment > default
pub fn load_settings() -> Settings {
  // Load .env file if present
  let _ = dotenvy::dotenv();

  let file_config = match std::fs::read_to_string("config.toml") {
    Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
      Ok(config) => config,
      Err(e) => {
        tracing::warn!("Ignoring malformed config.toml: {}", e);
        AppConfig::default()
      }
    },
    Err(_) => AppConfig::default(),
  };

  resolve_settings(file_config, |key| std::env::var(key).ok())
}

fn resolve_settings(file_config: AppConfig, env: impl Fn(&str) -> Option<String>) -> Settings {
  let mut settings = Settings::default();

  let database = file_config.database.unwrap_or_default();
  if let Some(path) = database.path {
    tracing::info!("Using database from config.toml: {}", path);
    settings.database_path = PathBuf::from(path);
  } else if let Some(path) = env("DATABASE_PATH") {
    tracing::info!("Using database from DATABASE_PATH env: {}", path);
    settings.database_path = PathBuf::from(path);
  } else {
    tracing::info!("Using default database path: {}", settings.database_path.display());
  }

  let dictionary = file_config.dictionary.unwrap_or_default();
  if let Some(url) = dictionary.base_url.or_else(|| env("DICTIONARY_API_URL")) {
    settings.dictionary_base_url = url;
  }
  if let Some(secs) = dictionary
    .timeout_secs
    .or_else(|| env("DICTIONARY_TIMEOUT_SECS").and_then(|s| s.parse().ok()))
  {
    settings.request_timeout = Duration::from_secs(secs);
  }

  let catalog = file_config.catalog.unwrap_or_default();
  if let Some(words) = catalog.words {
    settings.catalog_words = words;
  } else if let Some(list) = env("CATALOG_WORDS") {
    settings.catalog_words = list
      .split(',')
      .map(|w| w.trim().to_string())
      .filter(|w| !w.is_empty())
      .collect();
  }

  settings
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Get the full server bind address (PORT env overrides the default port)
pub fn server_bind_addr() -> String {
  let port = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .unwrap_or(SERVER_PORT);
  format!("{}:{}", SERVER_ADDR, port)
}

// ==================== Browser Session Configuration ====================

/// Session expiration time in hours
pub const SESSION_EXPIRY_HOURS: i64 = 1;

/// Probability threshold for session cleanup (0-255, lower = more frequent)
/// Value of 25 means ~10% chance (25/256) on each session access
pub const SESSION_CLEANUP_THRESHOLD: u8 = 25;

// ==================== Study Session Configuration ====================

/// Responses per study session
pub const SESSION_LENGTH: u32 = 20;

/// Number of most recently shown words excluded from the next pick
pub const NO_REPEAT_WINDOW: usize = 5;

/// The next word is drawn at random from this many highest-priority candidates
pub const TOP_K_CANDIDATES: usize = 3;

// ==================== Priority Weights ====================

/// Priority of a word that has never been answered
pub const NEW_WORD_PRIORITY: f64 = 100.0;

/// Starting priority for a word with history
pub const BASE_PRIORITY: f64 = 50.0;

pub const DIFFICULTY_WEIGHT: f64 = 30.0;

/// Priority gained per day since the word was last seen
pub const RECENCY_RATE_PER_DAY: f64 = 10.0;

pub const RECENCY_CAP: f64 = 50.0;

pub const ACCURACY_WEIGHT: f64 = 20.0;

pub const MAX_PRIORITY: f64 = 100.0;

// ==================== Quiz Configuration ====================

/// Number of distractor choices in a quiz question
pub const DISTRACTOR_COUNT: usize = 3;

/// Smallest catalog a quiz can be built from (distractors + the answer)
pub const MIN_QUIZ_CATALOG: usize = DISTRACTOR_COUNT + 1;

// ==================== Insights Configuration ====================

/// Categories need this many attempted words before they are reported
pub const MIN_CATEGORY_WORDS: usize = 2;

/// Accuracy (percent) at or above which a category counts as strong
pub const STRONG_ACCURACY_THRESHOLD: f64 = 70.0;

/// Strong and weak category lists are each cut to this length
pub const CATEGORY_LIST_LIMIT: usize = 5;

/// Lifetime words studied after which review of old words is recommended
pub const REVIEW_RECOMMENDATION_THRESHOLD: u32 = 100;

/// Lifetime words studied needed to open the insights dashboard
pub const DASHBOARD_UNLOCK_WORDS: u32 = 50;

/// Lifetime words studied from which the dashboard hint is shown
pub const DASHBOARD_HINT_WORDS: u32 = 40;

// ==================== Analytics Configuration ====================

/// Attempts needed before a word can be listed as challenging
pub const CHALLENGING_MIN_ATTEMPTS: u32 = 2;

/// Attempts needed before a word can be listed as mastered
pub const MASTERED_MIN_ATTEMPTS: u32 = 3;

/// Accuracy (0-1) needed before a word can be listed as mastered
pub const MASTERED_MIN_ACCURACY: f64 = 0.8;

/// Length of the challenging and mastered word lists
pub const WORD_LIST_LIMIT: usize = 5;

// ==================== Dictionary Configuration ====================

/// Free dictionary API endpoint (one request per word)
pub const DICTIONARY_API_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Request timeout for the dictionary API
pub const DICTIONARY_TIMEOUT_SECS: u64 = 10;

/// Category used when the dictionary gives no part of speech
pub const DEFAULT_CATEGORY: &str = "General";

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn test_defaults_without_config() {
    let settings = resolve_settings(AppConfig::default(), env_from(&[]));
    assert_eq!(settings.dictionary_base_url, DICTIONARY_API_BASE_URL);
    assert_eq!(settings.request_timeout, Duration::from_secs(DICTIONARY_TIMEOUT_SECS));
    assert!(settings.catalog_words.is_empty());
  }

  #[test]
  fn test_config_file_wins_over_env() {
    let config: AppConfig = toml::from_str(
      r#"
      [database]
      path = "/tmp/from-file.db"

      [catalog]
      words = ["serendipity", "ephemeral"]
      "#,
    )
    .unwrap();
    let settings = resolve_settings(
      config,
      env_from(&[("DATABASE_PATH", "/tmp/from-env.db"), ("CATALOG_WORDS", "cat")]),
    );
    assert_eq!(settings.database_path, PathBuf::from("/tmp/from-file.db"));
    assert_eq!(settings.catalog_words, vec!["serendipity", "ephemeral"]);
  }

  #[test]
  fn test_env_values() {
    let settings = resolve_settings(
      AppConfig::default(),
      env_from(&[
        ("DATABASE_PATH", "/tmp/from-env.db"),
        ("DICTIONARY_API_URL", "http://localhost:9999"),
        ("DICTIONARY_TIMEOUT_SECS", "3"),
        ("CATALOG_WORDS", " cat, ,dog "),
      ]),
    );
    assert_eq!(settings.database_path, PathBuf::from("/tmp/from-env.db"));
    assert_eq!(settings.dictionary_base_url, "http://localhost:9999");
    assert_eq!(settings.request_timeout, Duration::from_secs(3));
    assert_eq!(settings.catalog_words, vec!["cat", "dog"]);
  }
}
