//! Storage Bridge
//!
//! Persists the list as a JSON array of `{id, title}` under one
//! key-value entry. The store sits behind `KeyValueStore` so tests run
//! against memory instead of `window.localStorage`.

use std::collections::HashSet;

use log::{debug, warn};
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::config::WidgetConfig;
use crate::error::StorageError;
use crate::models::{truncate_chars, IdGenerator, TodoId, TodoItem, MAX_SAFE_ID};

/// A string key-value store
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Backend(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl KeyValueStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}

/// Entry shape as found on disk. Older versions of the widget wrote
/// fractional ids (`Date.now() + Math.random() * 1e6`), so any JSON
/// number is accepted here.
#[derive(Debug, Deserialize)]
struct StoredItem {
    id: serde_json::Number,
    title: String,
}

#[derive(Debug, Clone)]
pub struct StorageBridge<S> {
    store: S,
    key: &'static str,
    max_title_len: usize,
}

impl<S: KeyValueStore> StorageBridge<S> {
    pub fn new(store: S, config: &WidgetConfig) -> Self {
        Self {
            store,
            key: config.storage_key,
            max_title_len: config.max_input_length,
        }
    }

    /// Load the saved list; anything unreadable becomes an empty list
    pub fn load(&self) -> Vec<TodoItem> {
        match self.try_load() {
            Ok(items) => {
                debug!(target: "STORAGE", "Loaded {} items from '{}'", items.len(), self.key);
                items
            }
            Err(err) => {
                warn!(target: "STORAGE", "Starting with an empty list: {}", err);
                Vec::new()
            }
        }
    }

    pub fn try_load(&self) -> Result<Vec<TodoItem>, StorageError> {
        let Some(text) = self.store.read(self.key)? else {
            return Ok(Vec::new());
        };
        // A stored `null` reads as "no list"
        let stored: Option<Vec<StoredItem>> =
            serde_json::from_str(&text).map_err(StorageError::Decode)?;
        Ok(stored
            .map(|stored| normalize(stored, self.max_title_len))
            .unwrap_or_default())
    }

    /// Write the list; failures are logged and otherwise ignored
    pub fn save(&self, items: &[TodoItem]) {
        match self.try_save(items) {
            Ok(()) => debug!(target: "STORAGE", "Saved {} items", items.len()),
            Err(err) => warn!(target: "STORAGE", "Could not save list: {}", err),
        }
    }

    pub fn try_save(&self, items: &[TodoItem]) -> Result<(), StorageError> {
        let text = serde_json::to_string(items).map_err(StorageError::Encode)?;
        self.store.write(self.key, &text)
    }
}

/// Keep unique integer ids in `1..=MAX_SAFE_ID`; give every other entry
/// a fresh id. Order is preserved.
fn normalize(stored: Vec<StoredItem>, max_title_len: usize) -> Vec<TodoItem> {
    let mut taken = HashSet::new();
    let keyed: Vec<(Option<TodoId>, String)> = stored
        .into_iter()
        .map(|entry| {
            let id = entry
                .id
                .as_u64()
                .filter(|id| (1..=MAX_SAFE_ID).contains(id))
                .map(TodoId)
                .filter(|id| taken.insert(*id));
            let title = truncate_chars(&entry.title, max_title_len).to_string();
            (id, title)
        })
        .collect();

    let mut ids = IdGenerator::above(taken.iter().copied().max());
    keyed
        .into_iter()
        .map(|(id, title)| {
            let id = id.unwrap_or_else(|| {
                let id = ids.next_id(|id| taken.contains(&id));
                taken.insert(id);
                id
            });
            TodoItem::new(id, title)
        })
        .collect()
}
