use std::sync::Mutex;

use crate::{domain::Entry, errors::LedgerError};

use super::{upsert, EntryStore, Result, SimulatedLatency};

/// In-process store, used by tests and by callers embedding the library.
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    entries: Mutex<Vec<Entry>>,
    latency: SimulatedLatency,
}

impl MemoryEntryStore {
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            latency: SimulatedLatency::none(),
        }
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Entry>>> {
        self.entries
            .lock()
            .map_err(|_| LedgerError::Storage("entry store lock poisoned".into()))
    }
}

impl EntryStore for MemoryEntryStore {
    fn fetch_all(&self) -> Result<Vec<Entry>> {
        SimulatedLatency::pause(self.latency.fetch);
        Ok(self.lock()?.clone())
    }

    fn save(&self, entry: &Entry) -> Result<Entry> {
        SimulatedLatency::pause(self.latency.save);
        let mut entries = self.lock()?;
        upsert(&mut entries, entry);
        Ok(entry.clone())
    }

    fn remove(&self, id: &str) -> Result<()> {
        SimulatedLatency::pause(self.latency.remove);
        self.lock()?.retain(|entry| entry.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sample::sample_entries;
    use std::time::{Duration, Instant};

    #[test]
    fn save_replaces_matching_id_in_place() {
        let store = MemoryEntryStore::with_entries(sample_entries());
        let mut rent = sample_entries().remove(1);
        rent.amount = 1600.0;
        store.save(&rent).unwrap();

        let all = store.fetch_all().unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[1].amount, 1600.0);
    }

    #[test]
    fn save_appends_unknown_id() {
        let store = MemoryEntryStore::default();
        let mut entry = sample_entries().remove(0);
        entry.id = "fresh".into();
        store.save(&entry).unwrap();
        store.save(&entry).unwrap();
        assert_eq!(store.fetch_all().unwrap(), vec![entry]);
    }

    #[test]
    fn latency_is_applied_before_operations() {
        let latency = SimulatedLatency {
            fetch: Duration::from_millis(20),
            ..SimulatedLatency::none()
        };
        let store = MemoryEntryStore::default().with_latency(latency);
        let started = Instant::now();
        store.fetch_all().unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
