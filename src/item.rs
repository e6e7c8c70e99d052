//! Item domain record and draft types.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::types::{ItemId, TimestampMs};

/// Fully materialized, persisted item record.
///
/// Serializes with the wire field names the stored JSON entry uses
/// (`empCode`, `talukName`, `dateCreated`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Stable item identifier, assigned by the store.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Employee code.
    pub emp_code: String,
    /// Taluk name.
    pub taluk_name: String,
    /// Free-form description, may be empty.
    pub description: String,
    /// Creation timestamp in milliseconds, set once and never updated.
    #[serde(rename = "dateCreated")]
    pub created_at_ms: TimestampMs,
}

impl ItemRecord {
    /// Human-readable creation timestamp.
    ///
    /// Shared by the table projection and the export rows so both surfaces
    /// show the same text.
    pub fn created_at_label(&self) -> String {
        match DateTime::from_timestamp_millis(self.created_at_ms as i64) {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => String::new(),
        }
    }
}

/// Validated, trimmed field set used to create or update a record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemDraft {
    /// Display name, non-empty.
    pub name: String,
    /// Employee code, non-empty.
    pub emp_code: String,
    /// Taluk name, non-empty.
    pub taluk_name: String,
    /// Free-form description, possibly empty.
    pub description: String,
}

impl ItemDraft {
    /// Materializes a new record with a fresh id and creation timestamp.
    pub fn into_record(self, id: ItemId, created_at_ms: TimestampMs) -> ItemRecord {
        ItemRecord {
            id,
            name: self.name,
            emp_code: self.emp_code,
            taluk_name: self.taluk_name,
            description: self.description,
            created_at_ms,
        }
    }

    /// Overwrites the editable fields of `rec`.
    ///
    /// `id` and `created_at_ms` are kept as they are.
    pub fn apply_to(&self, rec: &mut ItemRecord) {
        rec.name = self.name.clone();
        rec.emp_code = self.emp_code.clone();
        rec.taluk_name = self.taluk_name.clone();
        rec.description = self.description.clone();
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> TimestampMs {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
