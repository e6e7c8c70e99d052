//! Outcome notices surfaced after completed user actions.

use std::fmt;

use crate::types::ItemId;

/// Notice emitted once per successful user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A new item was appended.
    Created {
        /// Assigned item id.
        id: ItemId,
    },
    /// An existing item was rewritten in place.
    Updated {
        /// Updated item id.
        id: ItemId,
    },
    /// An item was removed.
    Deleted {
        /// Removed item id.
        id: ItemId,
    },
    /// The record list was exported on demand.
    Exported {
        /// Number of data rows written.
        rows: usize,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Created { .. } => write!(f, "Item added successfully!"),
            Notice::Updated { .. } => write!(f, "Item updated successfully!"),
            Notice::Deleted { .. } => write!(f, "Item deleted successfully!"),
            Notice::Exported { rows } => write!(f, "Exported {rows} items."),
        }
    }
}
