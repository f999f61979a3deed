use rusqlite::{Connection, Result};

use crate::content::SavedWords;

use super::storage::{get_json, put_json};

/// Storage key of the saved word list
pub const SAVED_WORDS_KEY: &str = "user-saved-vocab-list";

pub fn load_saved_words(conn: &Connection) -> Result<SavedWords> {
    let mut saved: SavedWords = get_json(conn, SAVED_WORDS_KEY)?.unwrap_or_default();
    saved.sanitize();
    Ok(saved)
}

pub fn save_saved_words(conn: &Connection, saved: &SavedWords) -> Result<()> {
    put_json(conn, SAVED_WORDS_KEY, saved)
}
