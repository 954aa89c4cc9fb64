//! Italian/English UI strings.
//!
//! Lookup falls back from the requested language to Italian, then to the
//! key itself, so a missing translation shows up as its key rather than as
//! an empty string.

mod preference;

pub use preference::{LanguagePreference, DEFAULT_LANGUAGE_KEY};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    It,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::It, Language::En];

    /// Two-letter code (`it`, `en`).
    pub fn code(self) -> &'static str {
        match self {
            Language::It => "it",
            Language::En => "en",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::It => IT,
            Language::En => EN,
        }
    }

    /// Translation of `key` in this language only.
    pub fn lookup(self, key: &str) -> Option<&'static str> {
        self.table().iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned for a language code that is not supported.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unsupported language: {0:?}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Translate `key` into `lang`, falling back to Italian and then to `key`.
pub fn translate(lang: Language, key: &str) -> &str {
    resolve(lang.lookup(key), Language::default().lookup(key), key)
}

fn resolve<'a>(requested: Option<&'static str>, default: Option<&'static str>, key: &'a str) -> &'a str {
    requested.or(default).unwrap_or(key)
}

const IT: &[(&str, &str)] = &[
    ("addArtwork", "Nuova Opera"),
    ("totalArtworks", "Opere Totali"),
    ("totalValue", "Valore Inventario"),
    ("onLoan", "In Prestito"),
    ("searchPlaceholder", "Cerca per titolo, artista..."),
    ("thTitle", "Titolo"),
    ("thArtist", "Artista"),
    ("thYear", "Anno"),
    ("thPrice", "Prezzo"),
    ("thStatus", "Stato"),
    ("thActions", "Azioni"),
    ("statusAvailable", "Disponibile"),
    ("statusSold", "Venduto"),
    ("statusLoan", "In Prestito"),
    ("modalTitleAdd", "Aggiungi Opera"),
    ("modalTitleEdit", "Modifica Opera"),
    ("labelTitle", "Titolo"),
    ("labelArtist", "Artista"),
    ("labelYear", "Anno"),
    ("labelPrice", "Prezzo (€)"),
    ("labelStatus", "Stato"),
    ("btnCancel", "Annulla"),
    ("btnSave", "Salva"),
    ("btnDelete", "Elimina"),
    ("deleteTitle", "Conferma Eliminazione"),
    ("deleteConfirm", "Sei sicuro di voler eliminare questa opera?"),
    ("noArtworks", "Nessuna opera trovata"),
    ("noArtworksDesc", "Inizia aggiungendo la tua prima opera d'arte"),
    ("toastAdded", "Opera aggiunta con successo!"),
    ("toastUpdated", "Opera aggiornata con successo!"),
    ("toastDeleted", "Opera eliminata con successo!"),
    ("footerText", "Gestione Galleria d'Arte"),
];

const EN: &[(&str, &str)] = &[
    ("addArtwork", "New Artwork"),
    ("totalArtworks", "Total Artworks"),
    ("totalValue", "Inventory Value"),
    ("onLoan", "On Loan"),
    ("searchPlaceholder", "Search by title, artist..."),
    ("thTitle", "Title"),
    ("thArtist", "Artist"),
    ("thYear", "Year"),
    ("thPrice", "Price"),
    ("thStatus", "Status"),
    ("thActions", "Actions"),
    ("statusAvailable", "Available"),
    ("statusSold", "Sold"),
    ("statusLoan", "On Loan"),
    ("modalTitleAdd", "Add Artwork"),
    ("modalTitleEdit", "Edit Artwork"),
    ("labelTitle", "Title"),
    ("labelArtist", "Artist"),
    ("labelYear", "Year"),
    ("labelPrice", "Price (€)"),
    ("labelStatus", "Status"),
    ("btnCancel", "Cancel"),
    ("btnSave", "Save"),
    ("btnDelete", "Delete"),
    ("deleteTitle", "Confirm Deletion"),
    ("deleteConfirm", "Are you sure you want to delete this artwork?"),
    ("noArtworks", "No artworks found"),
    ("noArtworksDesc", "Start by adding your first artwork"),
    ("toastAdded", "Artwork added successfully!"),
    ("toastUpdated", "Artwork updated successfully!"),
    ("toastDeleted", "Artwork deleted successfully!"),
    ("footerText", "Art Gallery Management"),
];
