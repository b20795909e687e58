//! Key to slot-index mapping.
//!
//! A thin wrapper over `hashbrown::HashMap` seeded with `ahash::RandomState`,
//! the same index stack the sharded engine this crate descends from uses for
//! its per-shard map. Keys are stored as `Arc<K>` so the copy embedded in a
//! list node can share the same allocation as the index's copy — the
//! generic-`K` analogue of the sharded engine's `ShardInner` keying its
//! entries by `Arc<[u8]>`, avoiding a `K: Clone` bound just so eviction
//! can erase a victim's key.

use std::hash::Hash;
use std::sync::Arc;

use ahash::RandomState;
use hashbrown::HashMap;

#[derive(Debug)]
pub(crate) struct Index<K> {
    map: HashMap<Arc<K>, usize, RandomState>,
}

impl<K: Hash + Eq> Index<K> {
    pub(crate) fn new() -> Self {
        Self {
            map: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub(crate) fn find(&self, key: &K) -> Option<usize> {
        self.map.get(key).copied()
    }

    /// Inserts `key -> slot`. Caller guarantees `key` is not already present.
    pub(crate) fn insert(&mut self, key: Arc<K>, slot: usize) {
        debug_assert!(!self.map.contains_key(key.as_ref()), "duplicate index insert");
        self.map.insert(key, slot);
    }

    pub(crate) fn erase(&mut self, key: &K) -> bool {
        self.map.remove(key).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}
