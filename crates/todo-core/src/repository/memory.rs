//! In-Memory Slot
//!
//! Clones share one value, so a second store built over a clone sees what
//! the first persisted, the same way a page reload sees local storage.

use std::sync::{Arc, Mutex};

use super::traits::{DurableSlot, SlotError, SlotResult};

#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(text.into()))),
        }
    }
}

impl DurableSlot for MemorySlot {
    fn read(&self) -> SlotResult<Option<String>> {
        let guard = self
            .value
            .lock()
            .map_err(|e| SlotError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }

    fn write(&self, text: &str) -> SlotResult<()> {
        let mut guard = self
            .value
            .lock()
            .map_err(|e| SlotError::WriteRejected(e.to_string()))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_reads_none() {
        assert_eq!(MemorySlot::new().read().unwrap(), None);
    }

    #[test]
    fn test_clones_share_value() {
        let slot = MemorySlot::new();
        let other = slot.clone();
        slot.write("[]").unwrap();
        assert_eq!(other.read().unwrap().as_deref(), Some("[]"));
    }
}
