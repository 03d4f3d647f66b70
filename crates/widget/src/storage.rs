//! Cart persistence through a key-value store.
//!
//! The widget reads the cart once at mount and writes it back after every
//! mutation. [`FileStore`] keeps the store as a single JSON object document
//! on disk, written atomically (temp file + rename). [`MemoryStore`] is the
//! non-persisted variant and the test double.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use carrito_core::Cart;
use thiserror::Error;

/// Errors reading or writing the store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store document could not be (de)serialized.
    #[error("invalid storage document: {0}")]
    InvalidFormat(String),
}

/// String key to string value store, the local-storage contract.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed store: one JSON object document holding all keys.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    document: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, reading the existing document if present.
    ///
    /// A missing file starts an empty document. An unreadable document also
    /// starts empty, with a logged warning - the host page must keep working
    /// even when stored state is damaged.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let document = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(document) => document,
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "discarding unreadable store document");
                    BTreeMap::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => return Err(error.into()),
        };
        Ok(Self { path, document })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.document)
            .map_err(|e| StorageError::InvalidFormat(e.to_string()))?;
        // Write-then-rename so a crash mid-write can't truncate the document.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.document.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.document.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Cart (de)serialization over a key-value store under a fixed key.
#[derive(Debug)]
pub struct CartStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartStorage<S> {
    /// Wrap `store`, keeping the cart under `key`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Restore the persisted cart.
    ///
    /// A missing key yields an empty cart. An unparseable payload also
    /// yields an empty cart, with a logged warning.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store itself cannot be read.
    pub fn load(&self) -> Result<Cart, StorageError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Cart::new());
        };
        match serde_json::from_str(&raw) {
            Ok(cart) => Ok(cart),
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "discarding unparseable persisted cart");
                Ok(Cart::new())
            }
        }
    }

    /// Persist the cart, replacing the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the store write fails.
    pub fn save(&mut self, cart: &Cart) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(cart).map_err(|e| StorageError::InvalidFormat(e.to_string()))?;
        self.store.set(&self.key, &json)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn temp_store_path() -> PathBuf {
        std::env::temp_dir().join(format!("carrito-store-{}.json", uuid::Uuid::new_v4()))
    }

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item("Pan", Decimal::from(500), 3).unwrap();
        cart.add_item("Aceite", Decimal::from(7000), 2).unwrap();
        cart
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut storage = CartStorage::new(MemoryStore::new(), "cart");
        let cart = sample_cart();

        storage.save(&cart).unwrap();
        assert_eq!(storage.load().unwrap(), cart);
    }

    #[test]
    fn test_load_missing_key_is_empty_cart() {
        let storage = CartStorage::new(MemoryStore::new(), "cart");
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_corrupt_payload_is_empty_cart() {
        let mut store = MemoryStore::new();
        store.set("cart", "{not json").unwrap();
        let storage = CartStorage::new(store, "cart");
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let path = temp_store_path();
        let cart = sample_cart();

        let mut storage = CartStorage::new(FileStore::open(&path).unwrap(), "cart");
        storage.save(&cart).unwrap();
        drop(storage);

        let reopened = CartStorage::new(FileStore::open(&path).unwrap(), "cart");
        assert_eq!(reopened.load().unwrap(), cart);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_missing_file_starts_empty() {
        let path = temp_store_path();
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn test_file_store_unreadable_document_starts_empty() {
        let path = temp_store_path();
        fs::write(&path, "not a json document").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("cart").unwrap(), None);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let path = temp_store_path();
        let mut store = FileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        store.set("cart", "[]").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("cart").unwrap().as_deref(), Some("[]"));

        fs::remove_file(&path).unwrap();
    }
}
