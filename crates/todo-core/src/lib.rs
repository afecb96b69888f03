//! Todo Core
//!
//! Domain layer for the progress todo app: the todo item, the collection
//! store that mirrors every mutation to a durable text slot, and the
//! per-item view/edit state machine.

pub mod config;
pub mod domain;
pub mod editor;
pub mod repository;
pub mod store;

pub use config::StoreConfig;
pub use domain::{generate_id, TodoItem, ALPHANUM, MAX_PROGRESS};
pub use editor::{Draft, EditorMode, ItemEditor};
pub use repository::{DurableSlot, MemorySlot, SlotError, SlotResult};
pub use store::{StoreError, StoreResult, TodoStore};
