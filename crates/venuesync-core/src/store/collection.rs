// ── Generic reactive entity collection ──
//
// Order-preserving storage with push-based change notification via
// `watch` channels. Order matters here: the persisted layout is an
// append-ordered JSON array, and the filter engine's stable sort is
// specified relative to catalog order. All writers funnel through the
// inner lock, which is the single-writer serialization point for
// read-modify-write sequences like append.

use std::sync::{Arc, RwLock};

use tokio::sync::watch;

/// An entity with a collection-unique string key.
pub(crate) trait Keyed {
    fn key(&self) -> &str;
}

/// An ordered, reactive collection for a single entity type.
///
/// Every mutation bumps a version counter and rebuilds the snapshot
/// that subscribers receive. Reads hand out the current snapshot as a
/// cheap `Arc` clone.
pub(crate) struct EntityCollection<T: Keyed + Clone + Send + Sync + 'static> {
    /// Primary storage, in insertion order.
    entries: RwLock<Vec<Arc<T>>>,

    /// Version counter, bumped on every mutation.
    version: watch::Sender<u64>,

    /// Full snapshot, rebuilt on mutation for efficient subscription.
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
}

impl<T: Keyed + Clone + Send + Sync + 'static> EntityCollection<T> {
    pub(crate) fn new() -> Self {
        let (version, _) = watch::channel(0u64);
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));

        Self {
            entries: RwLock::new(Vec::new()),
            version,
            snapshot,
        }
    }

    pub(crate) fn seeded(items: Vec<T>) -> Self {
        let collection = Self::new();
        collection.replace_all(items);
        collection
    }

    /// Replace the whole collection, preserving the given order.
    pub(crate) fn replace_all(&self, items: Vec<T>) {
        {
            let mut entries = self.write_entries();
            *entries = items.into_iter().map(Arc::new).collect();
        }
        self.publish();
    }

    /// Append a new entity.
    pub(crate) fn push(&self, item: T) {
        self.write_entries().push(Arc::new(item));
        self.publish();
    }

    /// Replace the entity with the same key in place. Returns `false`
    /// (without mutating) when the key is absent.
    pub(crate) fn replace(&self, item: T) -> bool {
        let replaced = {
            let mut entries = self.write_entries();
            match entries.iter_mut().find(|e| e.key() == item.key()) {
                Some(slot) => {
                    *slot = Arc::new(item);
                    true
                }
                None => false,
            }
        };
        if replaced {
            self.publish();
        }
        replaced
    }

    /// Apply a transform to the entity with the given key, in place.
    pub(crate) fn update(&self, key: &str, f: impl FnOnce(&T) -> T) -> Option<Arc<T>> {
        let updated = {
            let mut entries = self.write_entries();
            let slot = entries.iter_mut().find(|e| e.key() == key)?;
            let next = Arc::new(f(slot.as_ref()));
            *slot = Arc::clone(&next);
            Some(next)
        };
        if updated.is_some() {
            self.publish();
        }
        updated
    }

    /// Remove an entity by key. Returns the removed entity if present.
    pub(crate) fn remove(&self, key: &str) -> Option<Arc<T>> {
        let removed = {
            let mut entries = self.write_entries();
            let index = entries.iter().position(|e| e.key() == key)?;
            Some(entries.remove(index))
        };
        if removed.is_some() {
            self.publish();
        }
        removed
    }

    pub(crate) fn get(&self, key: &str) -> Option<Arc<T>> {
        self.read_entries().iter().find(|e| e.key() == key).cloned()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.read_entries().iter().any(|e| e.key() == key)
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    /// Owned clones of every entity, in order -- the persistence shape.
    pub(crate) fn to_vec(&self) -> Vec<T> {
        self.read_entries().iter().map(|e| T::clone(e)).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, Vec<Arc<T>>> {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_entries(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Arc<T>>> {
        self.entries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Rebuild the broadcast snapshot and bump the version.
    fn publish(&self) {
        let values: Vec<Arc<T>> = self.read_entries().clone();
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
        self.version.send_modify(|v| *v += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item {
        id: String,
        label: String,
    }

    impl Keyed for Item {
        fn key(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, label: &str) -> Item {
        Item { id: id.into(), label: label.into() }
    }

    #[test]
    fn push_preserves_insertion_order() {
        let col: EntityCollection<Item> = EntityCollection::new();
        col.push(item("a", "one"));
        col.push(item("b", "two"));
        col.push(item("c", "three"));

        let snap = col.snapshot();
        let ids: Vec<&str> = snap.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn replace_keeps_position() {
        let col = EntityCollection::seeded(vec![item("a", "one"), item("b", "two")]);
        assert!(col.replace(item("a", "uno")));

        let snap = col.snapshot();
        assert_eq!(snap[0].label, "uno");
        assert_eq!(snap[1].id, "b");
    }

    #[test]
    fn replace_of_absent_key_is_a_noop() {
        let col = EntityCollection::seeded(vec![item("a", "one")]);
        assert!(!col.replace(item("zz", "nope")));
        assert_eq!(col.len(), 1);
    }

    #[test]
    fn remove_returns_the_entity() {
        let col = EntityCollection::seeded(vec![item("a", "one"), item("b", "two")]);
        let removed = col.remove("a").expect("present");
        assert_eq!(removed.label, "one");
        assert!(!col.contains("a"));
        assert_eq!(col.len(), 1);
    }

    #[test]
    fn update_transforms_in_place() {
        let col = EntityCollection::seeded(vec![item("a", "one")]);
        let updated = col
            .update("a", |e| Item { label: e.label.to_uppercase(), ..e.clone() })
            .expect("present");
        assert_eq!(updated.label, "ONE");
        assert_eq!(col.get("a").expect("present").label, "ONE");
    }

    #[test]
    fn subscribers_see_fresh_snapshots() {
        let col: EntityCollection<Item> = EntityCollection::new();
        let mut rx = col.subscribe();
        assert!(rx.borrow_and_update().is_empty());

        col.push(item("a", "one"));
        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(rx.borrow_and_update().len(), 1);
    }

    #[test]
    fn to_vec_round_trips() {
        let items = vec![item("a", "one"), item("b", "two")];
        let col = EntityCollection::seeded(items.clone());
        assert_eq!(col.to_vec(), items);
    }
}
