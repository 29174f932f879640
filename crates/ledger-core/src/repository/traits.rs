//! Repository Layer - Core Traits
//!
//! Defines the key-value interface snapshots are persisted through.
//! Implementations can use browser localStorage, SQLite, in-memory, etc.

use crate::error::LedgerResult;

/// Synchronous string key-value store
///
/// Mirrors the browser `localStorage` contract: one string value per key,
/// writes overwrite.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> LedgerResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> LedgerResult<()> {
        (**self).remove(key)
    }
}
