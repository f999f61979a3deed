pub mod entry;
pub mod performance;

pub use entry::{Sense, VocabularyEntry};
pub use performance::{Ledger, Rating, RecordOutcome, WordPerformance, INITIAL_DIFFICULTY};
