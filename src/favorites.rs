//! Favorite movie ids.
//!
//! The set is loaded once when [`Favorites`] is constructed and written back
//! in full on every toggle. Ids keep the order in which they were added.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::Result;
use crate::{fs, paths};

/// Persistence backend for the favorites id list
pub trait FavoritesStore: Send {
    fn load(&self) -> Result<Vec<i64>>;
    fn save(&self, ids: &[i64]) -> Result<()>;
}

/// JSON array of ids in a single file; a missing file reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `favorites.json` in the movieseek home
    pub fn default_location() -> Self {
        Self::new(paths::favorites_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> Result<Vec<i64>> {
        match fs::read_file_if_exists(&self.path)? {
            Some(content) if !content.trim().is_empty() => Ok(serde_json::from_str(&content)?),
            _ => Ok(Vec::new()),
        }
    }

    fn save(&self, ids: &[i64]) -> Result<()> {
        let content = serde_json::to_string(ids)?;
        fs::write_file_atomic(&self.path, &content)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    ids: Mutex<Vec<i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: Vec<i64>) -> Self {
        Self {
            ids: Mutex::new(ids),
        }
    }

    /// What was last saved
    pub fn saved(&self) -> Vec<i64> {
        self.ids.lock().clone()
    }
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> Result<Vec<i64>> {
        Ok(self.ids.lock().clone())
    }

    fn save(&self, ids: &[i64]) -> Result<()> {
        *self.ids.lock() = ids.to_vec();
        Ok(())
    }
}

pub struct Favorites<S: FavoritesStore> {
    store: S,
    ids: Vec<i64>,
}

impl<S: FavoritesStore> Favorites<S> {
    /// Load the persisted set. An unreadable store starts empty rather than failing.
    pub fn open(store: S) -> Self {
        let ids = match store.load() {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("could not read favorites, starting empty: {e}");
                Vec::new()
            }
        };
        Self { store, ids }
    }

    /// Load the persisted set, surfacing read errors.
    pub fn try_open(store: S) -> Result<Self> {
        let ids = store.load()?;
        Ok(Self { store, ids })
    }

    pub fn get(&self) -> &[i64] {
        &self.ids
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id` if absent, remove it if present, then persist.
    /// Returns whether `id` is a favorite afterwards.
    ///
    /// The in-memory set only changes once the store accepted the new list.
    pub fn toggle(&mut self, id: i64) -> Result<bool> {
        let mut next = self.ids.clone();
        let now_favorite = if let Some(pos) = next.iter().position(|&f| f == id) {
            next.remove(pos);
            false
        } else {
            next.push(id);
            true
        };

        self.store.save(&next)?;
        self.ids = next;
        Ok(now_favorite)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
