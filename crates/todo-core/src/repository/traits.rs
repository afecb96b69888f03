//! Repository Layer - Core Traits
//!
//! A durable slot is a single named text value that survives reloads.
//! Implementations can use browser local storage, memory, etc.

use thiserror::Error;

/// Result type for slot access
pub type SlotResult<T> = Result<T, SlotError>;

/// Slot access errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// The backing storage cannot be reached
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backing storage refused the write (quota, privacy mode)
    #[error("write rejected: {0}")]
    WriteRejected(String),
}

/// One named text value in durable storage
///
/// Every write replaces the whole value.
pub trait DurableSlot {
    /// Read the stored text, `None` when nothing has been written yet
    fn read(&self) -> SlotResult<Option<String>>;

    /// Overwrite the stored text
    fn write(&self, text: &str) -> SlotResult<()>;
}
