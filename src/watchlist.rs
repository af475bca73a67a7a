use crate::models::WatchlistEntry;
use crate::storage::Storage;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const STORAGE_KEY: &str = "watchlist";

/// The saved-titles collection: ordered, unique by id, mirrored to storage
/// after every mutation.
pub struct Watchlist {
    storage: Arc<dyn Storage>,
    entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    /// Hydrates the collection from storage. An absent key starts empty;
    /// so does a failed read or a malformed stored value, logged at warn —
    /// a broken storage medium must never block startup.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let entries = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<WatchlistEntry>>(&raw) {
                Ok(entries) => {
                    info!("Hydrated watchlist with {} saved titles", entries.len());
                    entries
                }
                Err(e) => {
                    warn!("Stored watchlist is malformed, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read stored watchlist, starting empty: {}", e);
                Vec::new()
            }
        };
        Self { storage, entries }
    }

    /// Appends `entry` and writes the collection back. Adding an id that is
    /// already saved is a no-op: the existing entry keeps its fields and no
    /// write happens. Returns whether the entry was added.
    pub fn add(&mut self, entry: WatchlistEntry) -> Result<bool> {
        if self.contains(&entry.id) {
            debug!("'{}' is already on the watchlist, ignoring", entry.id);
            return Ok(false);
        }
        info!(
            "Saving '{}' ({}) to the watchlist",
            entry.display_title().unwrap_or(&entry.id),
            entry.category
        );
        self.entries.push(entry);
        self.persist()?;
        Ok(true)
    }

    /// Drops the entry with the given id, if any, and writes the collection
    /// back either way. Returns whether an entry was removed.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            info!("Removed '{}' from the watchlist", id);
        }
        self.persist()?;
        Ok(removed)
    }

    /// Save-or-remove, the button's click behavior: removes the title if it
    /// is saved, adds it otherwise. Returns whether the title is on the list
    /// after the call.
    pub fn toggle(&mut self, entry: WatchlistEntry) -> Result<bool> {
        if self.contains(&entry.id) {
            self.remove(&entry.id)?;
            Ok(false)
        } else {
            self.add(entry)?;
            Ok(true)
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the whole collection and overwrites the stored value.
    /// Unlike hydration, a failure here propagates to the caller.
    pub fn persist(&self) -> Result<()> {
        let encoded =
            serde_json::to_string(&self.entries).context("Failed to serialize watchlist")?;
        self.storage.set(STORAGE_KEY, &encoded)
    }
}
