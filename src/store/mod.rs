//! Record store seam and the key-value production implementation.

/// Store over a key-value [`crate::persist::Medium`].
pub mod kv;

use thiserror::Error;

use crate::{export::ExportError, item::ItemRecord, persist::MediumError, types::ItemId};

/// Errors surfaced by store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying medium rejected a read or write.
    #[error("medium error: {0}")]
    Medium(#[from] MediumError),
    /// The record list could not be serialized.
    #[error("serialize error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Injectable record-store abstraction.
///
/// One implementation backs the widget; tests substitute a store over an
/// in-memory medium.
pub trait ItemStore {
    /// Returns every record in insertion order.
    ///
    /// Fails soft: an absent or unparseable items entry reads as an empty
    /// list.
    fn list_all(&self) -> Vec<ItemRecord>;

    /// Replaces the stored list with `items` as a single write, then feeds
    /// the attached export sink when the list is non-empty.
    ///
    /// Sink failures are logged and never fail the persist.
    fn persist(&mut self, items: &[ItemRecord]) -> StoreResult<()>;

    /// Allocates the next id: current counter plus one, written back before
    /// returning.
    ///
    /// The counter is persisted independently of the record list, so ids stay
    /// monotonic across deletes.
    fn next_id(&mut self) -> StoreResult<ItemId>;

    /// Runs the attached export sink on the current list, on demand.
    fn export_now(&mut self) -> Result<usize, ExportError>;
}
