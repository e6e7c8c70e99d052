//! Hash-map medium used as the in-memory fake.

use hashbrown::HashMap;

use super::{Medium, MediumResult};

/// Medium holding its entries in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: HashMap<String, String>,
}

impl MemoryMedium {
    /// Creates an empty medium.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes an entry directly, bypassing the store.
    ///
    /// Lets tests stage pre-existing or deliberately corrupt payloads.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl Medium for MemoryMedium {
    fn get(&self, key: &str) -> MediumResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> MediumResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
