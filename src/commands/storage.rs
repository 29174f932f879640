//! localStorage Backend
//!
//! Persists the ledger snapshot in `window.localStorage`.

use bud_ledger_core::{KeyValueStore, LedgerError, LedgerResult, MemoryStore};
use wasm_bindgen::JsValue;

/// Key-value store backed by `window.localStorage`
///
/// Falls back to memory when localStorage is unavailable (private mode,
/// disabled storage), so the app keeps working for the session.
#[derive(Debug, Default)]
pub struct BrowserStorage {
    fallback: Option<MemoryStore>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        if local_storage().is_some() {
            Self { fallback: None }
        } else {
            log::warn!("localStorage unavailable, changes will not survive a reload");
            Self { fallback: Some(MemoryStore::new()) }
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.fallback.is_none()
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn require_storage() -> LedgerResult<web_sys::Storage> {
    local_storage().ok_or_else(|| LedgerError::Storage("localStorage unavailable".to_string()))
}

fn js_error(e: JsValue) -> LedgerError {
    LedgerError::Storage(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        match &self.fallback {
            Some(memory) => memory.get(key),
            None => require_storage()?.get_item(key).map_err(js_error),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        match &mut self.fallback {
            Some(memory) => memory.set(key, value),
            None => require_storage()?.set_item(key, value).map_err(js_error),
        }
    }

    fn remove(&mut self, key: &str) -> LedgerResult<()> {
        match &mut self.fallback {
            Some(memory) => memory.remove(key),
            None => require_storage()?.remove_item(key).map_err(js_error),
        }
    }
}
