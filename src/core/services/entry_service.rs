//! Entry lifecycle: create, replace wholesale, delete.

use tracing::{info, warn};

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{category, Entry, EntryDraft};
use crate::storage::EntryStore;

/// Validated lifecycle operations on top of an [`EntryStore`].
pub struct EntryService<'a> {
    store: &'a dyn EntryStore,
}

impl<'a> EntryService<'a> {
    pub fn new(store: &'a dyn EntryStore) -> Self {
        Self { store }
    }

    /// Returns the full current collection.
    pub fn list(&self) -> ServiceResult<Vec<Entry>> {
        Ok(self.store.fetch_all()?)
    }

    /// Records a new entry under a freshly generated id.
    pub fn record(&self, draft: EntryDraft) -> ServiceResult<Entry> {
        draft.validate().map_err(ServiceError::Invalid)?;
        flag_unsuggested_category(&draft.category);
        let entry = draft.into_entry();
        let stored = self.store.save(&entry)?;
        info!(id = %stored.id, kind = %stored.kind, "recorded entry");
        Ok(stored)
    }

    /// Overwrites the record sharing `entry.id`. Partial updates are not supported.
    pub fn replace(&self, entry: Entry) -> ServiceResult<Entry> {
        entry.validate().map_err(ServiceError::Invalid)?;
        let exists = self
            .store
            .fetch_all()?
            .iter()
            .any(|existing| existing.id == entry.id);
        if !exists {
            return Err(ServiceError::NotFound(entry.id));
        }
        flag_unsuggested_category(&entry.category);
        let stored = self.store.save(&entry)?;
        info!(id = %stored.id, "replaced entry");
        Ok(stored)
    }

    /// Deletes the entry with `id`. Unknown ids are a no-op.
    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        self.store.remove(id)?;
        info!(id, "deleted entry");
        Ok(())
    }
}

fn flag_unsuggested_category(name: &str) {
    if category::is_suggested(name) {
        return;
    }
    match category::closest_suggestion(name) {
        Some(suggestion) => warn!(category = name, suggestion, "category is not in the suggested list"),
        None => warn!(category = name, "category is not in the suggested list"),
    }
}
