//! # ArtFlow
//!
//! Artwork inventory for a small gallery, persisted as a single JSON
//! collection in a string-keyed blob store.
//!
//! ## Core Concepts
//!
//! - **Artworks**: title, artist, year, price and an available/sold/loan status
//! - **Inventory store**: CRUD, search and statistics over the collection
//! - **Blob stores**: in-memory or file-backed key-value persistence
//! - **Sessions**: explicit language and edit-form state for a UI
//!
//! ## Example
//!
//! ```ignore
//! use artflow::{ArtworkInput, ArtworkStatus, InventoryStore, MemoryBlobStore};
//!
//! let store = InventoryStore::new(MemoryBlobStore::new());
//! store.init();
//!
//! let artwork = store.add(
//!     ArtworkInput::new("Achrome", "Piero Manzoni", 1959)
//!         .with_price(450_000.0)
//!         .with_status(ArtworkStatus::Available),
//! );
//!
//! assert_eq!(store.search("manzoni").len(), 2);
//! assert_eq!(store.stats().total, 6);
//! ```

pub mod blobs;
pub mod error;
pub mod i18n;
pub mod sample;
pub mod session;
pub mod store;
pub mod types;

// Re-exports
pub use blobs::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use error::{Result, StoreError};
pub use i18n::{translate, Language, LanguagePreference};
pub use sample::sample_artworks;
pub use session::{format_currency, status_label, ArtworkForm, FormError, SaveOutcome, Session};
pub use store::{InventoryStore, StoreConfig};
pub use types::*;
