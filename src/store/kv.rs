//! Key-value record store.

use tracing::warn;

use crate::{
    export::{ExportError, ExportSink},
    item::ItemRecord,
    persist::{COUNTER_KEY, ITEMS_KEY, Medium},
    types::ItemId,
};

use super::{ItemStore, StoreResult};

/// Store persisting the record list and the id counter as two named entries
/// of a [`Medium`], optionally feeding an export sink after every persist.
pub struct KvItemStore<M> {
    medium: M,
    sink: Option<Box<dyn ExportSink>>,
}

impl<M: Medium> KvItemStore<M> {
    /// Creates a store with no export sink attached.
    pub fn new(medium: M) -> Self {
        Self { medium, sink: None }
    }

    /// Creates a store that feeds `sink` after every non-empty persist.
    pub fn with_sink(medium: M, sink: Box<dyn ExportSink>) -> Self {
        Self {
            medium,
            sink: Some(sink),
        }
    }

    /// Read access to the underlying medium.
    pub fn medium(&self) -> &M {
        &self.medium
    }
}

impl<M: Medium> ItemStore for KvItemStore<M> {
    fn list_all(&self) -> Vec<ItemRecord> {
        let payload = match self.medium.get(ITEMS_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("item list read failed, treating store as empty: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(items) => items,
            Err(err) => {
                warn!("item list does not parse, treating store as empty: {err}");
                Vec::new()
            }
        }
    }

    fn persist(&mut self, items: &[ItemRecord]) -> StoreResult<()> {
        let payload = serde_json::to_string(items)?;
        self.medium.set(ITEMS_KEY, &payload)?;

        if items.is_empty() {
            return Ok(());
        }
        if let Some(sink) = self.sink.as_mut() {
            if let Err(err) = sink.export(items) {
                warn!("auto-export failed after persist: {err}");
            }
        }
        Ok(())
    }

    fn next_id(&mut self) -> StoreResult<ItemId> {
        let current = match self.medium.get(COUNTER_KEY)? {
            Some(raw) => raw.trim().parse::<ItemId>().unwrap_or_else(|_| {
                warn!("id counter does not parse, restarting at 0: {raw:?}");
                0
            }),
            None => 0,
        };

        let next = current + 1;
        self.medium.set(COUNTER_KEY, &next.to_string())?;
        Ok(next)
    }

    fn export_now(&mut self) -> Result<usize, ExportError> {
        let items = self.list_all();
        let sink = self.sink.as_mut().ok_or(ExportError::Unavailable)?;
        if items.is_empty() {
            return Err(ExportError::Nothing);
        }
        sink.export(&items)
    }
}
