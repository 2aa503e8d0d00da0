//! Cache Store Module
//!
//! Main store combining HashMap storage with insertion order tracking and
//! collision policy.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::cache::{shallow_merge, InsertionOrder, KeyGenerator};
use crate::error::{CacheError, Result};

// == Store Options ==
/// Behavior switches fixed at construction time.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOptions {
    /// Merge into the existing entry when `create` hits a used key
    pub allow_override: bool,
    /// Log every mutation; never changes results
    pub debug: bool,
}

// == Entry ==
/// A key together with its (merged) value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub key: String,
    pub data: Value,
}

// == Upsert Outcome ==
/// Result of [`CacheStore::upsert`].
#[derive(Debug, Clone, PartialEq)]
pub enum Upserted {
    /// Key existed; the value was shallow-merged
    Updated(Entry),
    /// Key was absent; the value was inserted as-is
    Created(String),
}

// == Cache Store ==
/// In-memory key-value storage.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, Value>,
    /// Insertion order for listings
    order: InsertionOrder,
    /// Source of keys for entries created without one
    keygen: KeyGenerator,
    options: StoreOptions,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the given options.
    pub fn new(options: StoreOptions) -> Self {
        Self::with_key_generator(options, KeyGenerator::new())
    }

    /// Creates an empty store drawing auto-generated keys from `keygen`.
    pub fn with_key_generator(options: StoreOptions, keygen: KeyGenerator) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            keygen,
            options,
        }
    }

    // == Get ==
    /// Retrieves the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    // == Create ==
    /// Stores `value` under `key`, or under a generated key when `key` is None.
    ///
    /// A used key fails with `AlreadyExists`, unless overriding is enabled, in
    /// which case `value` is shallow-merged into the existing entry.
    ///
    /// Returns the key the value ended up under.
    pub fn create(&mut self, value: Value, key: Option<String>) -> Result<String> {
        let key = match key {
            Some(key) => key,
            None => {
                let entries = &self.entries;
                self.keygen.next_key(|candidate| entries.contains_key(candidate))
            }
        };
        self.log(format_args!("Creating key: {} {}", key, value));

        if self.contains(&key) {
            if !self.options.allow_override {
                self.log(format_args!("Key {} already exists, not overriding.", key));
                return Err(CacheError::AlreadyExists(key));
            }
            self.log(format_args!("Key {} already exists, overriding.", key));
            if let Some(existing) = self.entries.get_mut(&key) {
                *existing = shallow_merge(std::mem::take(existing), value);
            }
        } else {
            self.insert_new(key.clone(), value);
        }

        self.log_entries();
        Ok(key)
    }

    // == Update ==
    /// Shallow-merges `value` into the entry under `key`.
    ///
    /// Returns the key together with the merged value.
    pub fn update(&mut self, key: &str, value: Value) -> Result<Entry> {
        let slot = self
            .entries
            .get_mut(key)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;

        let merged = shallow_merge(std::mem::take(slot), value);
        *slot = merged.clone();

        self.log(format_args!("Overriding {} {}", key, merged));
        self.log_entries();

        Ok(Entry {
            key: key.to_string(),
            data: merged,
        })
    }

    // == Upsert ==
    /// Updates the entry if `key` exists, otherwise creates it.
    ///
    /// Check and write happen in one call, so callers holding the store lock
    /// see no interleaving between them.
    pub fn upsert(&mut self, key: String, value: Value) -> Result<Upserted> {
        if self.contains(&key) {
            self.update(&key, value).map(Upserted::Updated)
        } else {
            self.create(value, Some(key)).map(Upserted::Created)
        }
    }

    // == Remove ==
    /// Removes the entry under `key`.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            self.log(format_args!("Removed key: {}", key));
            Ok(())
        } else {
            Err(CacheError::NotFound(key.to_string()))
        }
    }

    // == List ==
    /// Returns all keys, oldest insertion first.
    pub fn list(&self) -> Vec<String> {
        self.order.iter().cloned().collect()
    }

    // == Values ==
    /// Returns all values in the same order as [`CacheStore::list`].
    pub fn values(&self) -> Vec<Value> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key))
            .cloned()
            .collect()
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.log(format_args!("Cache cleared"));
    }

    // == Contains ==
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert_new(&mut self, key: String, value: Value) {
        self.order.push(&key);
        self.entries.insert(key, value);
    }

    // == Diagnostics ==
    fn log(&self, message: std::fmt::Arguments<'_>) {
        if self.options.debug {
            info!(target: "kv_cache::store", "[Cache] {}", message);
        }
    }

    fn log_entries(&self) {
        if self.options.debug {
            for key in self.order.iter() {
                if let Some(value) = self.entries.get(key) {
                    info!(target: "kv_cache::store", "[Cache]   {} = {}", key, value);
                }
            }
        }
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(StoreOptions::default())
    }
}
