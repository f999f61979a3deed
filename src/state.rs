//! Application state shared by all handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::Settings;
use crate::content::Catalog;
use crate::db::DbPool;
use crate::dictionary::DictionaryClient;
use crate::domain::Ledger;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,

    /// Loaded once at startup, written back after every response
    pub ledger: Arc<Mutex<Ledger>>,

    /// Replaced wholesale on reload
    pub catalog: Arc<RwLock<Catalog>>,

    pub dictionary: Arc<DictionaryClient>,

    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(
        db: DbPool,
        ledger: Ledger,
        catalog: Catalog,
        dictionary: DictionaryClient,
        settings: Settings,
    ) -> Self {
        Self {
            db,
            ledger: Arc::new(Mutex::new(ledger)),
            catalog: Arc::new(RwLock::new(catalog)),
            dictionary: Arc::new(dictionary),
            settings: Arc::new(settings),
        }
    }

    // Poisoned locks are recovered instead of failing the request

    pub fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn catalog_mut(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().unwrap_or_else(PoisonError::into_inner)
    }
}
