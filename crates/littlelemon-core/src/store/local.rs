use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Store file name in the data directory
const STORE_FILE: &str = "preferences.json";

/// Key/value store persisted as one JSON object.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl LocalStore {
    /// Open the store in `data_dir`, creating the directory if needed.
    /// A missing or unreadable file opens as an empty store.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        let path = data_dir.join(STORE_FILE);

        let values = match Self::load(&path) {
            Ok(values) => values,
            Err(e) => {
                warn!(error = %e, "Discarding unreadable preferences file");
                Map::new()
            }
        };

        debug!(path = %path.display(), keys = values.len(), "Local store opened");
        Ok(Self { path, values })
    }

    fn load(path: &Path) -> Result<Map<String, Value>> {
        if !path.exists() {
            return Ok(Map::new());
        }
        let contents = std::fs::read_to_string(path).context("Failed to read preferences file")?;
        serde_json::from_str(&contents).context("Failed to parse preferences file")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set a value and write the store through to disk.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.set_many([(key, value.into())])
    }

    /// Set several values with a single write. Nothing changes, in memory
    /// or on disk, if the write fails.
    pub fn set_many<'a>(&mut self, entries: impl IntoIterator<Item = (&'a str, Value)>) -> Result<()> {
        let mut values = self.values.clone();
        for (key, value) in entries {
            values.insert(key.to_string(), value);
        }
        self.save(&values)?;
        self.values = values;
        Ok(())
    }

    /// String value, or empty when absent or not a string.
    pub fn get_string(&self, key: &str) -> String {
        self.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// Bool value, or false when absent or not a bool.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    fn save(&self, values: &Map<String, Value>) -> Result<()> {
        let contents = serde_json::to_string_pretty(values)?;
        // Write next to the target and rename so a crash never leaves half a file
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, contents).context("Failed to write preferences file")?;
        std::fs::rename(&tmp, &self.path).context("Failed to replace preferences file")?;
        Ok(())
    }
}
