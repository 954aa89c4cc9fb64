//! Persisted language choice.

use super::Language;
use crate::blobs::BlobStore;
use tracing::warn;

/// Blob-store key holding the language code.
pub const DEFAULT_LANGUAGE_KEY: &str = "artflow_lang";

/// Reads and writes the selected language under a blob-store key.
#[derive(Clone, Debug)]
pub struct LanguagePreference {
    key: String,
}

impl Default for LanguagePreference {
    fn default() -> Self {
        Self::with_key(DEFAULT_LANGUAGE_KEY)
    }
}

impl LanguagePreference {
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored language, or the default when absent or unrecognized.
    pub fn load(&self, blobs: &impl BlobStore) -> Language {
        match blobs.get(&self.key) {
            Ok(Some(code)) => code.parse().unwrap_or_else(|e| {
                warn!(key = %self.key, error = %e, "ignoring stored language");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read language");
                Language::default()
            }
        }
    }

    /// Persist `lang`. Failures are logged and dropped.
    pub fn store(&self, blobs: &impl BlobStore, lang: Language) {
        if let Err(e) = blobs.set(&self.key, lang.code()) {
            warn!(key = %self.key, error = %e, "failed to write language");
        }
    }
}
