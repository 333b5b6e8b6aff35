// ── Storage port ──
//
// The persistence boundary is an injected trait, not ambient global
// state, so tests can substitute an in-memory fake. The port speaks
// raw strings; the typed helpers here add the JSON-array layer and its
// degrade-to-empty error policy: parse failures and absence both read
// as an empty collection, logged and never surfaced.
//
// Known limitation, by contract: writes are last-write-wins per key.
// Two *processes* racing a read-modify-write can lose one update. The
// in-process session store serializes its own writers (see
// `store::MarketStore`), which is as far as the single-user client
// design goes.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::RwLock;

/// The persisted key layout, shared with the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Favorites,
    Inquiries,
    Bookings,
    Messages,
    BlockedDates,
    LoggedIn,
    UserType,
}

impl StorageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Favorites => "favorites",
            Self::Inquiries => "inquiries",
            Self::Bookings => "bookings",
            Self::Messages => "messages",
            Self::BlockedDates => "blockedDates",
            Self::LoggedIn => "isLoggedIn",
            Self::UserType => "userType",
        }
    }
}

/// Flat string key-value storage scoped to one device. Implementations
/// must make each `store` atomic from a reader's perspective (no
/// partial value ever observable); they are not required to coordinate
/// concurrent writers.
pub trait StoragePort: Send + Sync {
    /// Raw value for a key, `None` when absent or unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Overwrite the value for a key. Failures are logged by the
    /// implementation and swallowed; the caller proceeds regardless.
    fn store(&self, key: &str, value: &str);
}

/// Read a JSON-array collection. Absence and parse failures both
/// degrade to empty -- logged, never propagated.
pub fn read_collection<T: DeserializeOwned>(port: &dyn StoragePort, key: StorageKey) -> Vec<T> {
    let Some(raw) = port.load(key.as_str()) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(key = key.as_str(), %err, "discarding malformed stored collection");
            Vec::new()
        }
    }
}

/// Serialize and overwrite a full collection.
pub fn write_collection<T: Serialize>(port: &dyn StoragePort, key: StorageKey, items: &[T]) {
    match serde_json::to_string(items) {
        Ok(json) => port.store(key.as_str(), &json),
        Err(err) => {
            tracing::warn!(key = key.as_str(), %err, "failed to serialize collection");
        }
    }
}

/// In-memory [`StoragePort`] for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }
}
