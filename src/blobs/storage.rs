//! File-backed blob store.

use super::BlobStore;
use crate::error::{Result, StoreError};
use fs2::FileExt;
use lru::LruCache;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Magic bytes for blob files.
const BLOB_MAGIC: &[u8; 4] = b"ABL\0";

/// Current blob format version.
const BLOB_VERSION: u8 = 1;

/// Name of the lock file guarding writes.
const LOCK_FILE: &str = ".lock";

/// Directory of checksummed blob files, one per key.
///
/// Files are named by the SHA-256 of their key so arbitrary key strings map
/// to safe file names. Each file carries the key itself, the value, and a
/// CRC32 of the value.
pub struct FileBlobStore {
    /// Base directory for blobs.
    path: PathBuf,

    /// LRU cache for recently accessed values.
    cache: Mutex<LruCache<String, String>>,
}

impl FileBlobStore {
    /// Open (creating if needed) a blob directory at the given path.
    pub fn new(path: impl AsRef<Path>, cache_size: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        fs::create_dir_all(&path)?;

        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);

        Ok(Self {
            path,
            cache: Mutex::new(LruCache::new(cache_size)),
        })
    }

    /// Base directory of this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drop every cached value so the next read goes to disk.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Get the full path for a key's blob file.
    pub fn blob_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.path.join(format!("{}.blob", hex::encode(digest)))
    }

    /// Take the directory-wide write lock. Released when the file is dropped.
    fn lock(&self) -> Result<File> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.path.join(LOCK_FILE))?;
        file.lock_exclusive()?;
        Ok(file)
    }

    fn encode(key: &str, value: &str) -> Result<Vec<u8>> {
        let key_bytes = key.as_bytes();
        let key_len = u16::try_from(key_bytes.len())
            .map_err(|_| StoreError::InvalidFormat(format!("key too long: {} bytes", key_bytes.len())))?;
        let content = value.as_bytes();

        let mut buf = Vec::with_capacity(4 + 1 + 2 + key_bytes.len() + 8 + content.len() + 4);
        buf.extend_from_slice(BLOB_MAGIC);
        buf.push(BLOB_VERSION);
        buf.extend_from_slice(&key_len.to_le_bytes());
        buf.extend_from_slice(key_bytes);
        buf.extend_from_slice(&(content.len() as u64).to_le_bytes());
        buf.extend_from_slice(content);
        buf.extend_from_slice(&crc32fast::hash(content).to_le_bytes());
        Ok(buf)
    }

    fn decode(key: &str, mut data: &[u8]) -> Result<String> {
        let mut magic = [0u8; 4];
        read_exact(&mut data, &mut magic)?;
        if &magic != BLOB_MAGIC {
            return Err(StoreError::InvalidFormat("Invalid blob magic".into()));
        }

        let mut version = [0u8; 1];
        read_exact(&mut data, &mut version)?;
        if version[0] != BLOB_VERSION {
            return Err(StoreError::InvalidFormat(format!(
                "Unsupported blob version: {}",
                version[0]
            )));
        }

        let mut key_len_bytes = [0u8; 2];
        read_exact(&mut data, &mut key_len_bytes)?;
        let mut stored_key = vec![0u8; u16::from_le_bytes(key_len_bytes) as usize];
        read_exact(&mut data, &mut stored_key)?;
        if stored_key != key.as_bytes() {
            return Err(StoreError::Corruption(format!(
                "blob for {:?} holds key {:?}",
                key,
                String::from_utf8_lossy(&stored_key)
            )));
        }

        let mut content_len_bytes = [0u8; 8];
        read_exact(&mut data, &mut content_len_bytes)?;
        let content_len = u64::from_le_bytes(content_len_bytes) as usize;
        if content_len > data.len() {
            return Err(StoreError::Corruption("truncated blob".into()));
        }
        let mut content = vec![0u8; content_len];
        read_exact(&mut data, &mut content)?;

        let mut checksum_bytes = [0u8; 4];
        read_exact(&mut data, &mut checksum_bytes)?;
        let stored_checksum = u32::from_le_bytes(checksum_bytes);
        let computed_checksum = crc32fast::hash(&content);
        if stored_checksum != computed_checksum {
            return Err(StoreError::ChecksumMismatch {
                expected: stored_checksum,
                got: computed_checksum,
            });
        }

        String::from_utf8(content)
            .map_err(|e| StoreError::Corruption(format!("blob is not UTF-8: {}", e)))
    }
}

/// `read_exact` that reports a short blob as corruption rather than IO.
fn read_exact(data: &mut &[u8], buf: &mut [u8]) -> Result<()> {
    data.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => StoreError::Corruption("truncated blob".into()),
        _ => StoreError::Io(e),
    })
}

impl BlobStore for FileBlobStore {
    fn contains(&self, key: &str) -> bool {
        if self.cache.lock().contains(key) {
            return true;
        }
        self.blob_path(key).exists()
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        if let Some(cached) = self.cache.lock().get(key).cloned() {
            return Ok(Some(cached));
        }

        let data = match fs::read(self.blob_path(key)) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value = Self::decode(key, &data)?;

        self.cache.lock().put(key.to_string(), value.clone());
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let encoded = Self::encode(key, value)?;
        let blob_path = self.blob_path(key);
        let tmp_path = blob_path.with_extension("tmp");

        let _lock = self.lock()?;

        let mut file = File::create(&tmp_path)?;
        file.write_all(&encoded)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp_path, &blob_path)?;

        self.cache.lock().put(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let _lock = self.lock()?;
        self.cache.lock().pop(key);

        match fs::remove_file(self.blob_path(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
