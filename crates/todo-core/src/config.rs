//! Store Configuration

use crate::domain::DEFAULT_ID_LENGTH;

/// Name of the durable slot holding the serialized collection
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Settings for a [`crate::TodoStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key of the durable slot
    pub storage_key: String,
    /// Length of generated item ids
    pub id_length: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            id_length: DEFAULT_ID_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.id_length, 8);
    }
}
