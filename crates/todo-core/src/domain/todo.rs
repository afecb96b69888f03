//! Todo Entity
//!
//! A task with a free-form description and a completion percentage.

use serde::{Deserialize, Serialize};

/// Progress at which an item may be marked finished
pub const MAX_PROGRESS: u8 = 100;

/// A single todo entry
///
/// Serialized with camelCase keys, so the stored record reads
/// `{"id", "description", "progress", "isFinished"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Opaque identifier, fixed at creation
    pub id: String,
    /// Task text
    pub description: String,
    /// Completion percentage in [0, 100]
    pub progress: u8,
    /// Only true while `progress == 100`
    pub is_finished: bool,
}

impl TodoItem {
    /// Create a fresh item with no progress
    pub fn new(id: String, description: String) -> Self {
        Self {
            id,
            description,
            progress: 0,
            is_finished: false,
        }
    }

    /// Whether the completion flag may be set
    pub fn can_finish(&self) -> bool {
        self.progress == MAX_PROGRESS
    }

    /// Clamp progress and clear `is_finished` below 100%
    pub fn normalized(mut self) -> Self {
        self.progress = self.progress.min(MAX_PROGRESS);
        if !self.can_finish() {
            self.is_finished = false;
        }
        self
    }
}
