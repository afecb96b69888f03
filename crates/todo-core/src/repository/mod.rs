//! Repository Layer
//!
//! Durable text slots the store persists into.

mod memory;
mod traits;

pub use memory::MemorySlot;
pub use traits::{DurableSlot, SlotError, SlotResult};
