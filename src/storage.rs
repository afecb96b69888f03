//! Browser Storage
//!
//! `localStorage` backed durable slot.

use todo_core::{DurableSlot, SlotError, SlotResult};

/// One `localStorage` key
///
/// Holds only the key; the storage object is looked up on every access.
#[derive(Debug, Clone)]
pub struct BrowserSlot {
    key: String,
}

impl BrowserSlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> SlotResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| SlotError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| SlotError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| SlotError::Unavailable("localStorage disabled".to_string()))
}

impl DurableSlot for BrowserSlot {
    fn read(&self) -> SlotResult<Option<String>> {
        local_storage()?
            .get_item(&self.key)
            .map_err(|e| SlotError::Unavailable(format!("{:?}", e)))
    }

    fn write(&self, text: &str) -> SlotResult<()> {
        local_storage()?
            .set_item(&self.key, text)
            .map_err(|e| SlotError::WriteRejected(format!("{:?}", e)))
    }
}
