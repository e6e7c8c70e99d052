//! Local record book: CRUD over a key-value medium with a rendered table
//! projection and spreadsheet export.
//!
//! # Examples
//!
//! In-memory usage with [`store::kv::KvItemStore`]:
//! ```
//! use itembook::{
//!     persist::memory::MemoryMedium,
//!     store::kv::KvItemStore,
//!     ui::{app::App, form::FormInput},
//! };
//!
//! let mut app = App::new(KvItemStore::new(MemoryMedium::new()));
//! app.submit(&FormInput {
//!     name: "Alice".to_string(),
//!     emp_code: "E1".to_string(),
//!     taluk_name: "North".to_string(),
//!     description: String::new(),
//! }).expect("submit");
//! assert_eq!(app.table().count_label, "Total items: 1");
//! ```
//!
//! SQLite-backed usage with a CSV export sink:
//! ```no_run
//! use itembook::{
//!     export::csv::CsvFileSink,
//!     persist::sqlite::SqliteMedium,
//!     store::kv::KvItemStore,
//!     ui::app::App,
//! };
//!
//! let medium = SqliteMedium::open("itembook.db").expect("open sqlite");
//! let sink = CsvFileSink::new(".");
//! let mut app = App::new(KvItemStore::with_sink(medium, Box::new(sink)));
//! app.refresh();
//! ```
#![deny(missing_docs)]

/// Spreadsheet export sink and shared row model.
pub mod export;
/// Item domain records and drafts.
pub mod item;
/// Key-value persistence media.
pub mod persist;
/// Record store seam and key-value implementation.
pub mod store;
/// Shared primitive types.
pub mod types;
/// Form state machine, table projection, and the action synchronizer.
pub mod ui;
