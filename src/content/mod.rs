//! Word catalog content: the built-in sample words, the user's saved word
//! list, and catalog loading from a [`crate::dictionary::WordSource`].

pub mod catalog;
pub mod sample;
pub mod saved_words;

pub use catalog::{build_catalog, load_catalog, Catalog, CatalogError, CatalogSource};
pub use sample::{placeholder_entry, sample_catalog};
pub use saved_words::{normalize_word, parse_word_input, SavedWords};
