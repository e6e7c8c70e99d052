//! Key-value persistence media backing the record store.

/// In-memory medium, the substitution point for tests.
pub mod memory;
/// SQLite-backed medium.
pub mod sqlite;

use thiserror::Error;

/// Entry holding the JSON-serialized record list.
pub const ITEMS_KEY: &str = "items";
/// Entry holding the decimal next-id counter, persisted independently of the
/// record list so that deletes never cause id reuse.
pub const COUNTER_KEY: &str = "items_next_id";

/// Errors surfaced by a persistence medium.
#[derive(Debug, Error)]
pub enum MediumError {
    /// SQLite-level read or write failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result alias for medium operations.
pub type MediumResult<T> = Result<T, MediumError>;

/// Minimal string key-value surface, the shape of browser local storage.
pub trait Medium {
    /// Reads the entry at `key`, `None` when absent.
    fn get(&self, key: &str) -> MediumResult<Option<String>>;

    /// Writes `value` at `key`, replacing any previous entry.
    fn set(&mut self, key: &str, value: &str) -> MediumResult<()>;
}
