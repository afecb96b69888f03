//! Global Application State Store
//!
//! The todo collection lives in one signal provided through context. The
//! helpers below run a store operation inside that signal and log failures.

use leptos::prelude::*;
use todo_core::{StoreResult, TodoItem, TodoStore};

use crate::storage::BrowserSlot;

/// Type alias for the store
pub type AppStore = RwSignal<TodoStore<BrowserSlot>>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new item; empty descriptions are ignored
pub fn store_create_item(store: &AppStore, description: &str) -> Option<TodoItem> {
    store
        .try_update(|todos| todos.create(description))
        .and_then(|result| report("create", result).flatten())
}

/// Replace an item in the store by ID
pub fn store_update_item(store: &AppStore, updated_item: TodoItem) {
    let id = updated_item.id.clone();
    if let Some(result) = store.try_update(|todos| todos.update(updated_item)) {
        if report("update", result) == Some(false) {
            log::debug!("[STORE] No todo {} to update", id);
        }
    }
}

/// Remove a finished item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: &str) {
    if let Some(result) = store.try_update(|todos| todos.delete(item_id)) {
        report("delete", result);
    }
}

fn report<T>(op: &str, result: StoreResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("[STORE] {} failed: {}", op, e);
            None
        }
    }
}
