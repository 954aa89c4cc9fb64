//! Core types for the inventory store.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Unique identifier for an artwork (assigned by the store).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub String);

impl ArtworkId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArtworkId({})", self.0)
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtworkId {
    fn from(s: &str) -> Self {
        ArtworkId(s.to_string())
    }
}

impl From<String> for ArtworkId {
    fn from(s: String) -> Self {
        ArtworkId(s)
    }
}

/// Milliseconds since Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current time. A clock set before the epoch reads as zero.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Timestamp(millis)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// Availability of an artwork in the gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkStatus {
    #[default]
    Available,
    Sold,
    Loan,
}

impl ArtworkStatus {
    pub const ALL: [ArtworkStatus; 3] = [
        ArtworkStatus::Available,
        ArtworkStatus::Sold,
        ArtworkStatus::Loan,
    ];

    /// Persisted code (`available`, `sold`, `loan`).
    pub fn code(self) -> &'static str {
        match self {
            ArtworkStatus::Available => "available",
            ArtworkStatus::Sold => "sold",
            ArtworkStatus::Loan => "loan",
        }
    }
}

impl fmt::Display for ArtworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a status code is not one of the known variants.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown artwork status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for ArtworkStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtworkStatus::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A single artwork in the collection.
///
/// Field names follow the persisted JSON layout (`createdAt`, `updatedAt`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    /// Unique identifier (assigned by store).
    pub id: ArtworkId,

    pub title: String,

    pub artist: String,

    pub year: i32,

    /// Non-negative amount; missing or null in persisted state means zero.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price: f64,

    pub status: ArtworkStatus,

    /// When the record was created (assigned by store).
    pub created_at: Timestamp,

    /// When the record was last updated, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Artwork {
    /// Build a stored record from caller input plus store-assigned fields.
    pub fn from_input(id: ArtworkId, input: ArtworkInput, created_at: Timestamp) -> Self {
        Self {
            id,
            title: input.title,
            artist: input.artist,
            year: input.year,
            price: input.price,
            status: input.status,
            created_at,
            updated_at: None,
        }
    }

    /// Shallow merge of the supplied fields. `id` and `created_at` never change.
    pub fn apply(&mut self, patch: ArtworkPatch, at: Timestamp) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(artist) = patch.artist {
            self.artist = artist;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Some(at);
    }

    /// Whether `needle` (already lowercased) occurs in title, artist or year.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.artist.to_lowercase().contains(needle)
            || self.year.to_string().contains(needle)
    }
}

/// A `null` price (written for a NaN amount) reads as zero.
fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Option::<f64>::deserialize(deserializer).map(|price| price.unwrap_or(0.0))
}

/// Input for creating a new artwork (before id/timestamps are assigned).
#[derive(Clone, Debug, PartialEq)]
pub struct ArtworkInput {
    pub title: String,
    pub artist: String,
    pub year: i32,
    pub price: f64,
    pub status: ArtworkStatus,
}

impl ArtworkInput {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            year,
            price: 0.0,
            status: ArtworkStatus::Available,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_status(mut self, status: ArtworkStatus) -> Self {
        self.status = status;
        self
    }
}

/// Partial update: only `Some` fields are written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtworkPatch {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub status: Option<ArtworkStatus>,
}

impl ArtworkPatch {
    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    pub fn status(status: ArtworkStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl From<ArtworkInput> for ArtworkPatch {
    fn from(input: ArtworkInput) -> Self {
        Self {
            title: Some(input.title),
            artist: Some(input.artist),
            year: Some(input.year),
            price: Some(input.price),
            status: Some(input.status),
        }
    }
}

/// Inventory aggregates.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total: usize,
    pub total_value: f64,
    pub on_loan: usize,
    pub available: usize,
    pub sold: usize,
}

impl InventoryStats {
    /// Aggregate over a collection.
    pub fn collect<'a>(artworks: impl IntoIterator<Item = &'a Artwork>) -> Self {
        artworks
            .into_iter()
            .fold(InventoryStats::default(), |mut stats, artwork| {
                stats.total += 1;
                stats.total_value += artwork.price;
                match artwork.status {
                    ArtworkStatus::Available => stats.available += 1,
                    ArtworkStatus::Sold => stats.sold += 1,
                    ArtworkStatus::Loan => stats.on_loan += 1,
                }
                stats
            })
    }
}
