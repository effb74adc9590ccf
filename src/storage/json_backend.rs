use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    core::utils::{ensure_dir, write_atomic},
    domain::Entry,
};

use super::{sample::sample_entries, upsert, EntryStore, Result, SimulatedLatency};

/// Name of the single collection every entry lives under.
pub const STORAGE_KEY: &str = "fincontrol_transactions";
const EXTENSION: &str = "json";

/// Filesystem-backed store keeping the whole collection as one JSON array.
#[derive(Debug, Clone)]
pub struct JsonEntryStore {
    path: PathBuf,
    seed_sample_data: bool,
    latency: SimulatedLatency,
}

impl JsonEntryStore {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        ensure_dir(&data_dir)?;
        Ok(Self {
            path: data_dir.join(format!("{STORAGE_KEY}.{EXTENSION}")),
            seed_sample_data: false,
            latency: SimulatedLatency::none(),
        })
    }

    /// Seeds the sample collection the first time an absent file is read.
    pub fn with_sample_seed(mut self, enabled: bool) -> Self {
        self.seed_sample_data = enabled;
        self
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<Vec<Entry>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn write(&self, entries: &[Entry]) -> Result<()> {
        save_entries_to_path(entries, &self.path)
    }
}

impl EntryStore for JsonEntryStore {
    fn fetch_all(&self) -> Result<Vec<Entry>> {
        SimulatedLatency::pause(self.latency.fetch);
        if let Some(entries) = self.read()? {
            debug!(count = entries.len(), path = %self.path.display(), "loaded entries");
            return Ok(entries);
        }
        if !self.seed_sample_data {
            return Ok(Vec::new());
        }
        let seeded = sample_entries();
        self.write(&seeded)?;
        info!(count = seeded.len(), path = %self.path.display(), "seeded sample entries");
        Ok(seeded)
    }

    fn save(&self, entry: &Entry) -> Result<Entry> {
        SimulatedLatency::pause(self.latency.save);
        let mut entries = self.read()?.unwrap_or_default();
        upsert(&mut entries, entry);
        self.write(&entries)?;
        Ok(entry.clone())
    }

    fn remove(&self, id: &str) -> Result<()> {
        SimulatedLatency::pause(self.latency.remove);
        let Some(mut entries) = self.read()? else {
            return Ok(());
        };
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() != before {
            self.write(&entries)?;
        }
        Ok(())
    }
}

/// Writes the collection by staging to a temporary file and renaming over the target.
pub fn save_entries_to_path(entries: &[Entry], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(entries)?;
    write_atomic(path, &json)?;
    Ok(())
}

pub fn load_entries_from_path(path: &Path) -> Result<Vec<Entry>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
