use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::models::Dish;

use super::{CachedData, MenuQuery};

/// Snapshot file name in the data directory
const MENU_FILE: &str = "menu.json";

/// The table of dish rows, persisted as a single JSON snapshot.
#[derive(Debug)]
pub struct MenuCache {
    path: PathBuf,
    rows: Vec<Dish>,
    cached_at: Option<DateTime<Utc>>,
}

impl MenuCache {
    /// Open the cache in `data_dir`. A missing or unreadable snapshot opens
    /// as an empty cache.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        let path = data_dir.join(MENU_FILE);

        let (rows, cached_at) = match Self::load(&path) {
            Ok(Some(cached)) => (cached.data, Some(cached.cached_at)),
            Ok(None) => (Vec::new(), None),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable menu snapshot");
                (Vec::new(), None)
            }
        };

        debug!(rows = rows.len(), "Menu cache opened");
        Ok(Self {
            path,
            rows,
            cached_at,
        })
    }

    fn load(path: &Path) -> Result<Option<CachedData<Vec<Dish>>>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path).context("Failed to read menu snapshot")?;
        let cached = serde_json::from_str(&contents).context("Failed to parse menu snapshot")?;
        Ok(Some(cached))
    }

    /// Write `rows` as the new snapshot, returning its timestamp.
    fn save(&self, rows: &[Dish]) -> Result<DateTime<Utc>> {
        let cached = CachedData::new(rows);
        let contents = serde_json::to_string_pretty(&cached)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, contents).context("Failed to write menu snapshot")?;
        std::fs::rename(&tmp, &self.path).context("Failed to replace menu snapshot")?;
        Ok(cached.cached_at)
    }

    /// Discard every row and insert `rows` in their place, then commit.
    /// No dedup and no id-based merging. The cache is unchanged if the
    /// snapshot cannot be written.
    pub fn replace_all(&mut self, rows: Vec<Dish>) -> Result<()> {
        debug!(rows = rows.len(), "Replacing menu cache contents");
        let cached_at = self.save(&rows)?;
        self.rows = rows;
        self.cached_at = Some(cached_at);
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.replace_all(Vec::new())
    }

    /// Rows matching `query`, sorted by title.
    pub fn query(&self, query: &MenuQuery) -> Vec<Dish> {
        query.apply(&self.rows)
    }

    /// All rows in insertion order.
    pub fn rows(&self) -> &[Dish] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Dish> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// When the snapshot was last committed, if ever.
    pub fn cached_at(&self) -> Option<DateTime<Utc>> {
        self.cached_at
    }

    /// "just now", "5m ago", ... or "never".
    pub fn age_display(&self) -> String {
        match self.cached_at {
            Some(cached_at) => CachedData { data: (), cached_at }.age_display(),
            None => "never".to_string(),
        }
    }
}
