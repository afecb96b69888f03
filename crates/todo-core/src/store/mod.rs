//! Todo Collection Store
//!
//! Owns the ordered list of items for the session and rewrites the whole
//! list into its durable slot after every mutation.


use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::config::StoreConfig;
use crate::domain::{generate_id, TodoItem};
use crate::repository::{DurableSlot, SlotError};

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
///
/// A mutation that fails here has already been applied in memory; only the
/// write to the slot is lost.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to persist todos: {0}")]
    Slot(#[from] SlotError),
    #[error("failed to serialize todos: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The todo collection plus the slot mirroring it
#[derive(Debug)]
pub struct TodoStore<S> {
    slot: S,
    items: Vec<TodoItem>,
    rng: StdRng,
    id_length: usize,
}

impl<S: DurableSlot> TodoStore<S> {
    /// Build a store from whatever the slot currently holds
    pub fn load(slot: S, config: &StoreConfig) -> Self {
        Self::load_with_rng(slot, config, StdRng::from_entropy())
    }

    /// Same as [`TodoStore::load`] with a caller-supplied id generator
    pub fn load_with_rng(slot: S, config: &StoreConfig, rng: StdRng) -> Self {
        let items = read_items(&slot);
        debug!("[STORE] Loaded {} todos", items.len());
        Self {
            slot,
            items,
            rng,
            id_length: config.id_length,
        }
    }

    /// Items in display order
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// First item with the given id
    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items marked finished
    pub fn finished_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_finished).count()
    }

    /// Append a new item, returning it
    ///
    /// An empty description creates nothing and returns `Ok(None)`.
    pub fn create(&mut self, description: &str) -> StoreResult<Option<TodoItem>> {
        if description.is_empty() {
            return Ok(None);
        }
        let id = generate_id(&mut self.rng, self.id_length);
        let item = TodoItem::new(id, description.to_string());
        debug!("[STORE] Create {}", item.id);
        self.items.push(item.clone());
        self.persist()?;
        Ok(Some(item))
    }

    /// Replace every item with the same id in place
    ///
    /// Returns whether an item matched. No match is not an error.
    pub fn update(&mut self, replacement: TodoItem) -> StoreResult<bool> {
        let replacement = replacement.normalized();
        let mut found = false;
        for item in self.items.iter_mut().filter(|item| item.id == replacement.id) {
            *item = replacement.clone();
            found = true;
        }
        if !found {
            debug!("[STORE] Update ignored, no todo {}", replacement.id);
        }
        self.persist()?;
        Ok(found)
    }

    /// Remove finished items with the given id, returning how many went
    pub fn delete(&mut self, id: &str) -> StoreResult<usize> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id || !item.is_finished);
        let removed = before - self.items.len();
        debug!("[STORE] Delete {}: removed {}", id, removed);
        self.persist()?;
        Ok(removed)
    }

    /// Overwrite the slot with the full collection
    pub fn persist(&self) -> StoreResult<()> {
        let text = serde_json::to_string(&self.items)?;
        self.slot.write(&text)?;
        Ok(())
    }
}

/// Read and decode the slot, falling back to an empty list
fn read_items<S: DurableSlot>(slot: &S) -> Vec<TodoItem> {
    let text = match slot.read() {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("[STORE] Could not read stored todos, starting empty: {}", e);
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<TodoItem>>(&text) {
        Ok(items) => items.into_iter().map(TodoItem::normalized).collect(),
        Err(e) => {
            warn!("[STORE] Stored todos are malformed, starting empty: {}", e);
            Vec::new()
        }
    }
}
