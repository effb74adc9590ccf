use dirs::home_dir;
use std::{
    cmp::Reverse,
    env,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::domain::Entry;

const DEFAULT_DIR_NAME: &str = ".fincontrol";
const HOME_ENV: &str = "FINCONTROL_HOME";
const CONFIG_DIR: &str = "config";
const DATA_DIR: &str = "data";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.fincontrol`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding `config.json` under `base`.
pub fn config_dir_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR)
}

/// Default directory for the entry collection under `base`.
pub fn data_dir_in(base: &Path) -> PathBuf {
    base.join(DATA_DIR)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Stages `data` next to `path` (`<name>.<ext>.tmp`) and renames it over the
/// target, so a failed write leaves the previous file untouched.
pub fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Orders entries most recent first. Entries sharing a date keep their input
/// order; entries whose date does not parse sink to the end.
pub fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by_key(|entry| Reverse(entry.calendar_date()));
}
