//! High score persistence
//!
//! A tiny integer key-value port. Browsers back it with LocalStorage
//! (`platform::storage`), native builds with a JSON file, tests with memory.
//! Keys look like `artikeldrop-highscore-A1`; missing keys read as 0.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed score file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("value for '{key}' is not an integer: {value:?}")]
    Corrupt { key: String, value: String },
}

/// Integer key-value store
///
/// Methods take `&self`; stores are shared by the hub and the live arena on a
/// single thread.
pub trait ScoreStore {
    fn get(&self, key: &str) -> Result<Option<u64>, StoreError>;
    fn set(&self, key: &str, value: u64) -> Result<(), StoreError>;
}

pub type SharedStore = Rc<dyn ScoreStore>;

/// Parse a stored decimal string
pub fn parse_value(key: &str, raw: &str) -> Result<u64, StoreError> {
    raw.trim().parse().map_err(|_| StoreError::Corrupt {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

/// Volatile store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, u64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.values.borrow().get(key).copied())
    }

    fn set(&self, key: &str, value: u64) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", 40).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(40));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("k", " 120 ").unwrap(), 120);
        let err = parse_value("k", "lots").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert!(err.to_string().contains("lots"));
    }
}
