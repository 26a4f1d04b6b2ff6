use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::capabilities::SettingsStorage;
use crate::error::Error;

/// Clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

}

impl SettingsStorage for MemoryStorage {
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>, Error> {
        let entries = self.entries.lock()?;

        entries
            .get(name)
            .cloned()
            .ok_or_else(|| Error(format!("no value stored for {}", name)))
    }

    fn write_bytes(&mut self, name: &str, data: &[u8]) -> Result<(), Error> {
        let mut entries = self.entries.lock()?;

        entries.insert(name.to_string(), data.to_vec());

        Ok(())
    }
}
