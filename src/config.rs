use std::path::PathBuf;

const LEGACY_FILE: &str = "CDInventory.txt";
const DATA_FILE: &str = "CDInventory.dat";

/// File locations used by a session. Built once in `main` and handed to the
/// shell; nothing reads it globally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub legacy_file: PathBuf,
    pub data_file: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        Self {
            legacy_file: PathBuf::from(LEGACY_FILE),
            data_file: PathBuf::from(DATA_FILE),
        }
    }

    #[cfg(test)]
    pub fn with_legacy_file(mut self, path: impl AsRef<std::path::Path>) -> Self {
        self.legacy_file = path.as_ref().to_path_buf();
        self
    }

    #[cfg(test)]
    pub fn with_data_file(mut self, path: impl AsRef<std::path::Path>) -> Self {
        self.data_file = path.as_ref().to_path_buf();
        self
    }
}
