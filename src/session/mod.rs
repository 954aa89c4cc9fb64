//! UI session state.
//!
//! The inventory screen needs two pieces of state between user actions: the
//! display language and the artwork currently open in the edit form. Both
//! live in a [`Session`] value that callers own and pass around.

mod form;
mod format;

pub use form::{ArtworkForm, FormError};
pub use format::{format_currency, status_key, status_label};

use crate::blobs::BlobStore;
use crate::i18n::{translate, Language, LanguagePreference};
use crate::store::InventoryStore;
use crate::types::{Artwork, ArtworkId};
use tracing::debug;

/// Result of saving the artwork form.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveOutcome {
    Added(Artwork),
    Updated(Artwork),
}

impl SaveOutcome {
    pub fn artwork(&self) -> &Artwork {
        match self {
            SaveOutcome::Added(a) | SaveOutcome::Updated(a) => a,
        }
    }

    /// Translation key of the confirmation message.
    pub fn message_key(&self) -> &'static str {
        match self {
            SaveOutcome::Added(_) => "toastAdded",
            SaveOutcome::Updated(_) => "toastUpdated",
        }
    }
}

/// Language and edit state of one user session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    language: Language,
    editing: Option<ArtworkId>,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            editing: None,
        }
    }

    /// Start a session in the persisted language.
    pub fn restore(pref: &LanguagePreference, blobs: &impl BlobStore) -> Self {
        Self::new(pref.load(blobs))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Id of the artwork open in the edit form, if any.
    pub fn editing(&self) -> Option<&ArtworkId> {
        self.editing.as_ref()
    }

    /// Translate `key` in the session language.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }

    /// Switch language and persist the choice.
    pub fn set_language(&mut self, pref: &LanguagePreference, blobs: &impl BlobStore, lang: Language) {
        self.language = lang;
        pref.store(blobs, lang);
    }

    /// Translation key for the form title.
    pub fn form_title_key(&self) -> &'static str {
        if self.editing.is_some() {
            "modalTitleEdit"
        } else {
            "modalTitleAdd"
        }
    }

    /// Open an empty form for a new artwork.
    pub fn begin_add(&mut self) -> ArtworkForm {
        self.editing = None;
        ArtworkForm::default()
    }

    /// Open the form for an existing artwork.
    ///
    /// Returns `None` and leaves the session untouched if the id is unknown.
    pub fn begin_edit<B: BlobStore>(
        &mut self,
        store: &InventoryStore<B>,
        id: &ArtworkId,
    ) -> Option<ArtworkForm> {
        let artwork = store.get_by_id(id)?;
        self.editing = Some(artwork.id.clone());
        Some(ArtworkForm::from_artwork(&artwork))
    }

    /// Close the form without saving.
    pub fn cancel(&mut self) {
        self.editing = None;
    }

    /// Validate `form` and add or update the artwork.
    ///
    /// On a validation error the form stays open. On success, or if the
    /// edited artwork has disappeared, the form is closed.
    pub fn save<B: BlobStore>(
        &mut self,
        store: &InventoryStore<B>,
        form: &ArtworkForm,
    ) -> Result<SaveOutcome, FormError> {
        let input = form.parse()?;

        let outcome = match self.editing.take() {
            Some(id) => {
                let updated = store
                    .update(&id, input.into())
                    .ok_or(FormError::NotFound(id))?;
                SaveOutcome::Updated(updated)
            }
            None => SaveOutcome::Added(store.add(input)),
        };

        debug!(id = %outcome.artwork().id, "saved artwork form");
        Ok(outcome)
    }

    /// Delete an artwork, closing the form if it was being edited.
    pub fn delete<B: BlobStore>(&mut self, store: &InventoryStore<B>, id: &ArtworkId) -> bool {
        if self.editing.as_ref() == Some(id) {
            self.editing = None;
        }
        store.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blobs::MemoryBlobStore;
    use crate::types::ArtworkStatus;

    fn form(title: &str) -> ArtworkForm {
        ArtworkForm {
            title: title.into(),
            artist: "Lucio Fontana".into(),
            year: "1965".into(),
            price: "1200000".into(),
            status: "sold".into(),
        }
    }

    #[test]
    fn test_save_adds_when_not_editing() {
        let store = InventoryStore::new(MemoryBlobStore::new());
        let mut session = Session::default();

        let outcome = session.save(&store, &form("Attese")).unwrap();
        assert!(matches!(outcome, SaveOutcome::Added(_)));
        assert_eq!(outcome.message_key(), "toastAdded");
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn test_edit_then_save_updates() {
        let store = InventoryStore::new(MemoryBlobStore::new());
        store.init();
        let mut session = Session::default();
        let id = ArtworkId::from("art_004");

        let mut edit = session.begin_edit(&store, &id).unwrap();
        assert_eq!(session.editing(), Some(&id));
        assert_eq!(session.form_title_key(), "modalTitleEdit");

        edit.status = "sold".into();
        let outcome = session.save(&store, &edit).unwrap();

        assert_eq!(outcome.message_key(), "toastUpdated");
        assert_eq!(outcome.artwork().status, ArtworkStatus::Sold);
        assert_eq!(session.editing(), None);
        assert_eq!(store.get_all().len(), 5);
    }

    #[test]
    fn test_invalid_form_keeps_editing() {
        let store = InventoryStore::new(MemoryBlobStore::new());
        store.init();
        let mut session = Session::default();
        let id = ArtworkId::from("art_001");
        session.begin_edit(&store, &id).unwrap();

        assert_eq!(session.save(&store, &form("  ")), Err(FormError::EmptyTitle));
        assert_eq!(session.editing(), Some(&id));
    }

    #[test]
    fn test_save_after_concurrent_delete() {
        let store = InventoryStore::new(MemoryBlobStore::new());
        store.init();
        let mut session = Session::default();
        let id = ArtworkId::from("art_002");
        session.begin_edit(&store, &id).unwrap();
        store.remove(&id);

        assert_eq!(session.save(&store, &form("Attese")), Err(FormError::NotFound(id)));
        assert_eq!(session.editing(), None);
        assert_eq!(store.get_all().len(), 4);
    }

    #[test]
    fn test_begin_edit_unknown() {
        let store = InventoryStore::new(MemoryBlobStore::new());
        let mut session = Session::default();
        assert!(session.begin_edit(&store, &ArtworkId::from("x")).is_none());
        assert_eq!(session.form_title_key(), "modalTitleAdd");
    }

    #[test]
    fn test_delete_closes_form() {
        let store = InventoryStore::new(MemoryBlobStore::new());
        store.init();
        let mut session = Session::default();
        let id = ArtworkId::from("art_003");
        session.begin_edit(&store, &id).unwrap();

        assert!(session.delete(&store, &id));
        assert_eq!(session.editing(), None);
        assert!(!session.delete(&store, &id));
    }

    #[test]
    fn test_language_switch_persists() {
        let blobs = MemoryBlobStore::new();
        let pref = LanguagePreference::default();
        let mut session = Session::restore(&pref, &blobs);
        assert_eq!(session.t("btnCancel"), "Annulla");

        session.set_language(&pref, &blobs, Language::En);
        assert_eq!(session.t("btnCancel"), "Cancel");
        assert_eq!(Session::restore(&pref, &blobs).language(), Language::En);
    }
}
