//! SQLite-backed key-value medium.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::{Medium, MediumResult};

/// SQLite implementation of [`crate::persist::Medium`].
///
/// All entries live in a single `kv(key, value)` table.
pub struct SqliteMedium {
    conn: Connection,
}

impl SqliteMedium {
    /// Opens or creates a SQLite-backed medium at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> MediumResult<Self> {
        let conn = Connection::open(path)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory SQLite medium.
    pub fn open_in_memory() -> MediumResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> MediumResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self { conn })
    }
}

impl Medium for SqliteMedium {
    fn get(&self, key: &str) -> MediumResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> MediumResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv(key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
