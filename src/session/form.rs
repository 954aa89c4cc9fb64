//! Artwork form parsing and validation.

use crate::types::{Artwork, ArtworkId, ArtworkInput, ArtworkStatus};
use thiserror::Error;

/// Why a form could not be saved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Artist is required")]
    EmptyArtist,

    #[error("Invalid year: {0:?}")]
    InvalidYear(String),

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("Invalid status: {0:?}")]
    InvalidStatus(String),

    #[error("Artwork not found: {0}")]
    NotFound(ArtworkId),
}

/// Raw field values as typed into the artwork form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtworkForm {
    pub title: String,
    pub artist: String,
    pub year: String,
    pub price: String,
    pub status: String,
}

impl ArtworkForm {
    /// Form pre-filled with an existing artwork, for editing.
    pub fn from_artwork(artwork: &Artwork) -> Self {
        Self {
            title: artwork.title.clone(),
            artist: artwork.artist.clone(),
            year: artwork.year.to_string(),
            price: artwork.price.to_string(),
            status: artwork.status.code().to_string(),
        }
    }

    /// Validate the fields and build the artwork input.
    ///
    /// Title and artist are trimmed and must be non-empty; the price must be
    /// a finite, non-negative number.
    pub fn parse(&self) -> Result<ArtworkInput, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }

        let artist = self.artist.trim();
        if artist.is_empty() {
            return Err(FormError::EmptyArtist);
        }

        let year = self
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidYear(self.year.clone()))?;

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| FormError::InvalidPrice(self.price.clone()))?;

        let status = self
            .status
            .trim()
            .parse::<ArtworkStatus>()
            .map_err(|_| FormError::InvalidStatus(self.status.clone()))?;

        Ok(ArtworkInput {
            title: title.to_string(),
            artist: artist.to_string(),
            year,
            price,
            status,
        })
    }
}
