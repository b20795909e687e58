//! The public cache façade.

use std::convert::Infallible;
use std::ops::Deref;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Mutex, MutexGuard};

use crate::clock::{Clock, SystemClock};
use crate::index::Index;
use crate::list::{Node, RecencyList};
use crate::options::{CacheOptions, EntryMeta};

/// Upper bound on how many tail entries an opportunistic cleanup tick
/// examines. Chosen in the "tens to low hundreds" range the bounded-sweep
/// policy calls for: large enough to make real progress under steady
/// traffic, small enough that no caller ever pays for an O(n) scan just by
/// calling `get`.
const CLEANUP_SWEEP_LIMIT: usize = 128;

struct Inner<K, V> {
    index: Index<K>,
    list: RecencyList<K, V>,
    last_cleanup_at: Instant,
}

/// A thread-safe, bounded-capacity, LRU-evicting cache with sliding
/// per-entry expiration.
///
/// Cheaply shared across threads behind an `Arc<Engine<K, V>>`; every public
/// method takes `&self`. A single internal lock serializes all operations,
/// including factory invocations on a cache miss — see [`Engine::get`] for
/// why that trade is deliberate.
pub struct Engine<K, V> {
    inner: Mutex<Inner<K, V>>,
    clock: Arc<dyn Clock>,
    max_size: u64,
    default_sliding_expiration: Duration,
    cleanup_interval: Duration,
}

impl<K, V> Engine<K, V>
where
    K: std::hash::Hash + Eq,
{
    /// An unbounded, never-expiring, non-sweeping cache.
    pub fn new() -> Self {
        Self::with_options(CacheOptions::default())
    }

    pub fn with_options(options: CacheOptions) -> Self {
        Self::with_clock(options, Arc::new(SystemClock))
    }

    /// Builds an engine reading time from a caller-supplied [`Clock`]
    /// instead of [`SystemClock`], for deterministic tests.
    pub fn with_clock(options: CacheOptions, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        Self {
            inner: Mutex::new(Inner {
                index: Index::new(),
                list: RecencyList::new(),
                last_cleanup_at: now,
            }),
            clock,
            max_size: options.max_size,
            default_sliding_expiration: options.default_sliding_expiration,
            cleanup_interval: options.cleanup_interval,
        }
    }

    /// Looks up `key`, refreshing its sliding expiration and LRU recency on
    /// a hit. Does not invoke any factory; returns `None` on a miss or on an
    /// entry found expired.
    pub fn find(&self, key: &K) -> Option<CacheRef<'_, K, V>> {
        let now = self.clock.now();
        let mut guard = self.inner.lock();
        self.cleanup_tick(&mut guard, now);

        let idx = guard.index.find(key)?;
        if guard.list.node(idx).is_expired(now) {
            self.evict_expired_at(&mut guard, idx);
            return None;
        }

        guard.list.node_mut(idx).last_access_at = now;
        guard.list.promote(idx);
        Some(CacheRef { guard, idx })
    }

    /// Returns the cached value for `key`, computing and inserting it via
    /// `factory` on a miss. `factory` is not called on a hit.
    ///
    /// `factory` runs while the engine's lock is held, guaranteeing it is
    /// invoked at most once per key across every concurrent caller — at the
    /// cost of blocking unrelated keys for the duration of a slow factory.
    /// `factory` must not call back into this engine; doing so deadlocks.
    pub fn get<F>(&self, key: K, factory: F) -> CacheRef<'_, K, V>
    where
        F: FnOnce() -> V,
    {
        self.get_with(key, factory, |_meta| {})
    }

    /// Like [`Engine::get`], but `configurator` can override the new
    /// entry's `sliding_expiration` and `size` before it is published.
    /// `configurator` only ever sees [`EntryMeta`] — it cannot touch the
    /// value the factory produced.
    pub fn get_with<F, C>(&self, key: K, factory: F, configurator: C) -> CacheRef<'_, K, V>
    where
        F: FnOnce() -> V,
        C: FnOnce(&mut EntryMeta),
    {
        match self.try_get_with(key, move || Ok::<V, Infallible>(factory()), configurator) {
            Ok(cache_ref) => cache_ref,
            Err(never) => match never {},
        }
    }

    /// Like [`Engine::get_with`], but `factory` may fail. On `Err`, no
    /// entry for `key` is inserted and the error is returned unchanged;
    /// the engine defines no error type of its own. Capacity eviction to
    /// make room for the prospective entry runs before `factory`, so a
    /// failing factory does not restore any key evicted on its behalf.
    pub fn try_get_with<F, C, E>(
        &self,
        key: K,
        factory: F,
        configurator: C,
    ) -> Result<CacheRef<'_, K, V>, E>
    where
        F: FnOnce() -> Result<V, E>,
        C: FnOnce(&mut EntryMeta),
    {
        let now = self.clock.now();
        let mut guard = self.inner.lock();
        self.cleanup_tick(&mut guard, now);

        if let Some(idx) = guard.index.find(&key) {
            if guard.list.node(idx).is_expired(now) {
                self.evict_expired_at(&mut guard, idx);
            } else {
                guard.list.node_mut(idx).last_access_at = now;
                guard.list.promote(idx);
                return Ok(CacheRef { guard, idx });
            }
        }

        if self.max_size > 0 {
            while guard.list.len() as u64 >= self.max_size {
                match guard.list.pop_tail() {
                    Some(victim) => {
                        guard.index.erase(&victim.key);
                        tracing::trace!("evicted entry to enforce capacity");
                    }
                    None => break,
                }
            }
        }

        let value = factory()?;

        let mut meta = EntryMeta {
            sliding_expiration: self.default_sliding_expiration,
            size: 0,
        };
        configurator(&mut meta);

        let key = Arc::new(key);
        let node = Node::new(Arc::clone(&key), value, now, meta.sliding_expiration, meta.size);
        let idx = guard.list.push_front(node);
        guard.index.insert(key, idx);

        Ok(CacheRef { guard, idx })
    }

    /// Removes `key`. Returns whether a live entry was present.
    pub fn remove(&self, key: &K) -> bool {
        let now = self.clock.now();
        let mut guard = self.inner.lock();
        self.cleanup_tick(&mut guard, now);

        match guard.index.find(key) {
            Some(idx) => {
                guard.list.remove(idx);
                guard.index.erase(key);
                true
            }
            None => false,
        }
    }

    /// Empties the cache.
    pub fn clear(&self) {
        let now = self.clock.now();
        let mut guard = self.inner.lock();
        guard.index.clear();
        guard.list.clear();
        guard.last_cleanup_at = now;
    }

    /// Current number of live entries. Also runs an opportunistic cleanup
    /// tick, the same as any other operation.
    pub fn size(&self) -> usize {
        let now = self.clock.now();
        let mut guard = self.inner.lock();
        self.cleanup_tick(&mut guard, now);
        guard.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Unconditionally sweeps every entry and removes those that are
    /// expired, ignoring `cleanup_interval`. Returns the number reclaimed.
    ///
    /// Unlike the opportunistic tick, this is a full O(n) traversal and is
    /// meant to be called explicitly (on a timer external to the engine, or
    /// at a natural idle point), not on every hot-path call.
    pub fn cleanup_expired(&self) -> usize {
        let now = self.clock.now();
        let mut guard = self.inner.lock();
        let removed = guard.list.remove_all_expired(now);
        for node in &removed {
            guard.index.erase(&node.key);
        }
        guard.last_cleanup_at = now;
        if !removed.is_empty() {
            tracing::debug!(count = removed.len(), "cleanup_expired reclaimed entries");
        }
        removed.len()
    }

    fn cleanup_tick(&self, inner: &mut Inner<K, V>, now: Instant) {
        if self.cleanup_interval.is_zero() {
            return;
        }
        if now.saturating_duration_since(inner.last_cleanup_at) < self.cleanup_interval {
            return;
        }

        let removed = inner.list.sweep_expired_from_tail(now, CLEANUP_SWEEP_LIMIT);
        for node in &removed {
            inner.index.erase(&node.key);
        }
        inner.last_cleanup_at = now;
        if !removed.is_empty() {
            tracing::debug!(
                count = removed.len(),
                "incremental cleanup reclaimed expired entries"
            );
        }
    }

    /// Removes the node at `idx`, already known to be expired, from both
    /// the list and the index.
    fn evict_expired_at(&self, inner: &mut Inner<K, V>, idx: usize) {
        let node = inner.list.remove(idx);
        inner.index.erase(&node.key);
        tracing::trace!("lookup found expired entry, removed");
    }
}

impl<K, V> Default for Engine<K, V>
where
    K: std::hash::Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A borrow of a cached value, valid until the next operation on the
/// engine it was obtained from.
///
/// Holds the engine's internal lock for its own lifetime: a second
/// operation on the same engine cannot begin while a `CacheRef` from a
/// first is still alive. This is what makes "borrows are valid until the
/// caller's next engine operation" a property the compiler enforces rather
/// than a documentation-only rule.
pub struct CacheRef<'a, K, V> {
    guard: MutexGuard<'a, Inner<K, V>>,
    idx: usize,
}

impl<K, V> Deref for CacheRef<'_, K, V> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.guard.list.node(self.idx).value
    }
}

impl<K, V: std::fmt::Debug> std::fmt::Debug for CacheRef<'_, K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&**self, f)
    }
}

#[allow(dead_code)]
fn assert_engine_is_send_sync<K: Send + Sync, V: Send>() {
    fn assert<T: Send + Sync>() {}
    assert::<Engine<K, V>>();
}
