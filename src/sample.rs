//! Built-in sample collection: Italian post-war artists.

use crate::types::{Artwork, ArtworkId, ArtworkStatus, Timestamp};

/// Creation time shared by every sample record (2024-01-15T10:00:00Z).
pub const SAMPLE_CREATED_AT: Timestamp = Timestamp(1_705_312_800_000);

/// The five sample records, in their fixed order.
pub fn sample_artworks() -> Vec<Artwork> {
    [
        ("art_001", "Combustione Plastica", "Alberto Burri", 1958, 850_000.0, ArtworkStatus::Available),
        ("art_002", "Concetto Spaziale - Attese", "Lucio Fontana", 1965, 1_200_000.0, ArtworkStatus::Sold),
        ("art_003", "Grande Sacco", "Alberto Burri", 1952, 720_000.0, ArtworkStatus::Loan),
        ("art_004", "Achrome", "Piero Manzoni", 1959, 450_000.0, ArtworkStatus::Available),
        ("art_005", "Senza Titolo (Mappa)", "Alighiero Boetti", 1984, 680_000.0, ArtworkStatus::Loan),
    ]
    .into_iter()
    .map(|(id, title, artist, year, price, status)| Artwork {
        id: ArtworkId::from(id),
        title: title.to_string(),
        artist: artist.to_string(),
        year,
        price,
        status,
        created_at: SAMPLE_CREATED_AT,
        updated_at: None,
    })
    .collect()
}
