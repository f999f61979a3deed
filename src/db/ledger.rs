use rusqlite::{Connection, Result};

use crate::domain::Ledger;

use super::storage::{get_json, put_json};

/// Storage key of the performance ledger
pub const LEDGER_KEY: &str = "vocabulary-performance";

/// Load the ledger, or an empty one if nothing usable is stored
pub fn load_ledger(conn: &Connection) -> Result<Ledger> {
    let mut ledger: Ledger = get_json(conn, LEDGER_KEY)?.unwrap_or_default();
    ledger.sanitize();
    Ok(ledger)
}

pub fn save_ledger(conn: &Connection, ledger: &Ledger) -> Result<()> {
    put_json(conn, LEDGER_KEY, ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::put_record;
    use crate::domain::{Rating, Sense, VocabularyEntry};
    use crate::testing::TestEnv;
    use chrono::Utc;

    #[test]
    fn test_empty_store_loads_empty_ledger() {
        let env = TestEnv::new().unwrap();
        let ledger = load_ledger(&env.conn).unwrap();
        assert!(ledger.performances.is_empty());
        assert_eq!(ledger.total_words_studied, 0);
    }

    #[test]
    fn test_save_and_load() {
        let env = TestEnv::new().unwrap();
        let entry = VocabularyEntry::new("vivid", "Vivid", "Descriptive", vec![Sense::new("adjective", "bright", None)]);
        let mut ledger = Ledger::new();
        ledger.record(&entry, Rating::Easy, Utc::now());
        ledger.record(&entry, Rating::Hard, Utc::now());

        save_ledger(&env.conn, &ledger).unwrap();
        let loaded = load_ledger(&env.conn).unwrap();

        let perf = loaded.get("vivid").unwrap();
        assert_eq!(perf.attempts, 2);
        assert_eq!(perf.correct_attempts, 1);
        assert_eq!(perf.category, "Descriptive");
        assert_eq!(loaded.total_words_studied, 1);
    }

    #[test]
    fn test_corrupt_ledger_loads_empty() {
        let env = TestEnv::new().unwrap();
        put_record(&env.conn, LEDGER_KEY, "[1, 2").unwrap();
        let ledger = load_ledger(&env.conn).unwrap();
        assert!(ledger.performances.is_empty());
    }

    #[test]
    fn test_stored_json_uses_camel_case() {
        let env = TestEnv::new().unwrap();
        put_record(
            &env.conn,
            LEDGER_KEY,
            r#"{"performances": {"w": {"wordId": "w", "attempts": 2, "correctAttempts": 5,
                "lastSeen": 0, "difficultyScore": 1.7, "category": "X", "accuracy": 3.0}},
                "totalWordsStudied": 4}"#,
        )
        .unwrap();

        let ledger = load_ledger(&env.conn).unwrap();
        let perf = ledger.get("w").unwrap();
        assert!(perf.correct_attempts <= perf.attempts);
        assert!((0.0..=1.0).contains(&perf.difficulty_score));
        assert!((0.0..=1.0).contains(&perf.accuracy));
        assert_eq!(ledger.total_words_studied, 4);
    }
}
