//! The inventory store: artwork CRUD, search and aggregates over a blob store.
//!
//! The whole collection lives as one JSON array under a single key. Every
//! mutation reads the array, changes a working copy and writes the array
//! back. Persistence is best-effort: unreadable state reads as an empty
//! collection and a failed write is logged and dropped, so no storage error
//! ever reaches the caller.

use crate::blobs::BlobStore;
use crate::error::Result;
use crate::sample::sample_artworks;
use crate::types::{
    Artwork, ArtworkId, ArtworkInput, ArtworkPatch, InventoryStats, Timestamp,
};
use parking_lot::Mutex;
use rand::Rng;
use tracing::{debug, info, warn};

/// Store configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Blob-store key holding the serialized collection.
    pub storage_key: String,

    /// Prefix of generated artwork ids.
    pub id_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: "artflow_artworks".to_string(),
            id_prefix: "art_".to_string(),
        }
    }
}

/// Length of the random suffix of generated ids.
const ID_SUFFIX_LEN: usize = 5;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The artwork inventory.
///
/// Provides:
/// - Create, read, update and delete of artworks
/// - Case-insensitive search over title, artist and year
/// - Inventory statistics
/// - Seeding with the built-in sample collection
pub struct InventoryStore<B: BlobStore> {
    config: StoreConfig,

    blobs: B,

    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl<B: BlobStore> InventoryStore<B> {
    /// Create a store with the default configuration.
    pub fn new(blobs: B) -> Self {
        Self::with_config(blobs, StoreConfig::default())
    }

    /// Create a store with a custom configuration.
    pub fn with_config(blobs: B, config: StoreConfig) -> Self {
        Self {
            config,
            blobs,
            write_lock: Mutex::new(()),
        }
    }

    /// Store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The underlying blob store.
    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    // --- Reads ---

    /// Every artwork in insertion order. Empty if nothing readable is stored.
    pub fn get_all(&self) -> Vec<Artwork> {
        self.load()
    }

    /// Find an artwork by id.
    pub fn get_by_id(&self, id: &ArtworkId) -> Option<Artwork> {
        self.load().into_iter().find(|a| &a.id == id)
    }

    /// Artworks whose title, artist or year contains `query`, ignoring case.
    ///
    /// A blank query returns the whole collection.
    pub fn search(&self, query: &str) -> Vec<Artwork> {
        let artworks = self.load();
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return artworks;
        }
        artworks.into_iter().filter(|a| a.matches(&needle)).collect()
    }

    /// Count, value and per-status breakdown of the collection.
    pub fn stats(&self) -> InventoryStats {
        InventoryStats::collect(&self.load())
    }

    // --- Writes ---

    /// Add an artwork, assigning its id and creation time.
    pub fn add(&self, input: ArtworkInput) -> Artwork {
        let _lock = self.write_lock.lock();

        let mut artworks = self.load();
        let id = self.generate_id(&artworks);
        let artwork = Artwork::from_input(id, input, Timestamp::now());

        artworks.push(artwork.clone());
        self.save(&artworks);

        debug!(id = %artwork.id, "added artwork");
        artwork
    }

    /// Merge `patch` into the artwork with the given id.
    ///
    /// Returns `None` without writing if no such artwork exists.
    pub fn update(&self, id: &ArtworkId, patch: ArtworkPatch) -> Option<Artwork> {
        let _lock = self.write_lock.lock();

        let mut artworks = self.load();
        let artwork = artworks.iter_mut().find(|a| &a.id == id)?;
        artwork.apply(patch, Timestamp::now());
        let updated = artwork.clone();

        self.save(&artworks);

        debug!(id = %id, "updated artwork");
        Some(updated)
    }

    /// Delete the artwork with the given id. Returns whether one was removed.
    pub fn remove(&self, id: &ArtworkId) -> bool {
        let _lock = self.write_lock.lock();

        let mut artworks = self.load();
        let before = artworks.len();
        artworks.retain(|a| &a.id != id);

        if artworks.len() == before {
            return false;
        }

        self.save(&artworks);
        debug!(id = %id, "removed artwork");
        true
    }

    /// Seed the sample collection if nothing is stored yet.
    pub fn init(&self) {
        let _lock = self.write_lock.lock();

        if self.load().is_empty() {
            info!(key = %self.config.storage_key, "seeding inventory with sample artworks");
            self.save(&sample_artworks());
        }
    }

    /// Replace whatever is stored with the sample collection.
    pub fn reset(&self) {
        let _lock = self.write_lock.lock();

        info!(key = %self.config.storage_key, "resetting inventory to sample artworks");
        self.save(&sample_artworks());
    }

    // --- Persistence ---

    fn load(&self) -> Vec<Artwork> {
        match self.try_load() {
            Ok(artworks) => artworks,
            Err(e) => {
                warn!(key = %self.config.storage_key, error = %e, "failed to read inventory");
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> Result<Vec<Artwork>> {
        match self.blobs.get(&self.config.storage_key)? {
            Some(data) if !data.is_empty() => Ok(serde_json::from_str(&data)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Write the collection. Returns false if the write was dropped.
    fn save(&self, artworks: &[Artwork]) -> bool {
        match self.try_save(artworks) {
            Ok(()) => true,
            Err(e) => {
                warn!(key = %self.config.storage_key, error = %e, "failed to write inventory");
                false
            }
        }
    }

    fn try_save(&self, artworks: &[Artwork]) -> Result<()> {
        let data = serde_json::to_string(artworks)?;
        self.blobs.set(&self.config.storage_key, &data)
    }

    /// Prefix, base-36 milliseconds and a random base-36 suffix; retried on
    /// collision with an id already in `existing`.
    fn generate_id(&self, existing: &[Artwork]) -> ArtworkId {
        let mut rng = rand::thread_rng();
        loop {
            let mut id = self.config.id_prefix.clone();
            id.push_str(&to_base36(Timestamp::now().0.max(0) as u64));
            id.extend((0..ID_SUFFIX_LEN).map(|_| BASE36[rng.gen_range(0..36)] as char));

            if !existing.iter().any(|a| a.id.as_str() == id) {
                return ArtworkId(id);
            }
        }
    }
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
