use std::fs;
use std::path::PathBuf;

use bullets_shared::capabilities::SettingsStorage;
use bullets_shared::error::Error;

/// One file per setting under `root`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, Error> {
        let root = root.into();

        fs::create_dir_all(&root)?;

        Ok(Self { root })
    }
}

impl SettingsStorage for FileStorage {
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>, Error> {
        Ok(fs::read(self.root.join(name))?)
    }

    fn write_bytes(&mut self, name: &str, data: &[u8]) -> Result<(), Error> {
        Ok(fs::write(self.root.join(name), data)?)
    }
}
