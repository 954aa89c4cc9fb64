//! String-keyed blob stores.
//!
//! The inventory store persists its whole collection as one JSON string
//! under a single key. Anything that can get and set strings by key can back
//! it: an in-memory map for tests and embedding, or a directory of
//! checksummed blob files.

mod memory;
mod storage;

pub use memory::MemoryBlobStore;
pub use storage::FileBlobStore;

use crate::error::Result;

/// Synchronous string-keyed get/set storage.
pub trait BlobStore: Send + Sync {
    /// Check whether a value is stored under `key`.
    fn contains(&self, key: &str) -> bool;

    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// On failure the previous value must remain readable.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. Returns whether one existed.
    fn remove(&self, key: &str) -> Result<bool>;
}

impl<B: BlobStore + ?Sized> BlobStore for std::sync::Arc<B> {
    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }
}
