//! Domain Layer
//!
//! Core entities and id generation.

mod id;
mod todo;

pub use id::{generate_id, ALPHANUM, DEFAULT_ID_LENGTH};
pub use todo::{TodoItem, MAX_PROGRESS};
