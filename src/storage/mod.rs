//! Persistence collaborator for the entry collection.
//!
//! The aggregation engines only ever need "the current full set of entries";
//! stores upsert and delete single records and hand back the whole set on
//! request.

pub mod json_backend;
pub mod memory;
pub mod sample;

use std::{thread, time::Duration};

use crate::{
    domain::{Entry, Identifiable},
    errors::LedgerError,
};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over backends holding a single collection of entries.
pub trait EntryStore: Send + Sync {
    /// Returns the complete collection, without omissions or duplicates.
    fn fetch_all(&self) -> Result<Vec<Entry>>;
    /// Upserts by id: replaces an existing record wholesale or appends a new one.
    fn save(&self, entry: &Entry) -> Result<Entry>;
    /// Removes the record with `id`; a missing id is not an error.
    fn remove(&self, id: &str) -> Result<()>;
}

/// Artificial delay applied before each store operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub fetch: Duration,
    pub save: Duration,
    pub remove: Duration,
}

impl SimulatedLatency {
    pub fn none() -> Self {
        Self::default()
    }

    /// Round-trip times of a typical remote backend.
    pub fn network() -> Self {
        Self {
            fetch: Duration::from_millis(600),
            save: Duration::from_millis(400),
            remove: Duration::from_millis(300),
        }
    }

    fn pause(delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Replaces the record sharing `entry.id`, or appends it.
pub(crate) fn upsert(entries: &mut Vec<Entry>, entry: &Entry) {
    match entries.iter_mut().find(|existing| existing.id() == entry.id()) {
        Some(slot) => *slot = entry.clone(),
        None => entries.push(entry.clone()),
    }
}

pub use json_backend::{JsonEntryStore, STORAGE_KEY};
pub use memory::MemoryEntryStore;
