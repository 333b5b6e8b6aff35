//! File-backed storage port for VenueSync.
//!
//! One JSON file per storage key under a data directory, mirroring the
//! web client key/value persistence. The port contract is
//! deliberately infallible: read failures degrade to "absent" and write
//! failures are logged and swallowed, so a broken disk never takes the
//! session down with it.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use venuesync_core::StoragePort;

/// Resolve the default data directory via XDG / platform conventions.
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "venuesync", "venuesync").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".local");
            p.push("share");
            p.push("venuesync");
            p
        },
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Storage port persisting each key as `<dir>/<key>.json`.
///
/// Keys are written verbatim as file stems, so the on-disk names match
/// the web client's storage keys (`favorites.json`,
/// `isLoggedIn.json`, ...).
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Open a storage directory, creating it if needed. Creation
    /// failure is logged; subsequent writes will fail (and be logged)
    /// but reads still behave as an empty store.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(err) = fs::create_dir_all(&dir) {
            tracing::warn!(dir = %dir.display(), %err, "failed to create data directory");
        }
        Self { dir }
    }

    /// Open the platform-default data directory.
    pub fn open_default() -> Self {
        Self::open(default_data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StoragePort for JsonFileStorage {
    fn load(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read storage key");
                None
            }
        }
    }

    fn store(&self, key: &str, value: &str) {
        // Stage beside the target and rename into place: a concurrent
        // reader observes either the previous value or the new one,
        // never a torn write.
        let target = self.path_for(key);
        let staged = self.dir.join(format!("{key}.json.part"));
        let written = fs::write(&staged, value).and_then(|()| fs::rename(&staged, &target));
        if let Err(err) = written {
            tracing::warn!(path = %target.display(), %err, "failed to write storage key");
            let _ = fs::remove_file(&staged);
        }
    }
}
