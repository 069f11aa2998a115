//! LocalStorage-backed score store
//!
//! Values are plain decimal strings so the page's own scripts can read them.

use web_sys::Storage;

use crate::persistence::{ScoreStore, StoreError, parse_value};

#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("localStorage".into()))
    }
}

impl ScoreStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<u64>, StoreError> {
        let raw = self
            .storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
        raw.map(|raw| parse_value(key, &raw)).transpose()
    }

    fn set(&self, key: &str, value: u64) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, &value.to_string())
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}
