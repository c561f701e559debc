//! Bounded memoizing cache for decoded masks.
//!
//! Keyed by the exact mask value. When an insert finds the cache full, the
//! whole map is dropped and the new entry starts a fresh one: there is no
//! per-entry eviction.
//!
//! Lookups take the read lock; decoding happens with no lock held; inserts
//! take the write lock. Two threads missing on the same mask both decode and
//! both insert, and the later write stands.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::bits::Bits;

/// Entries a cache holds before it is flushed.
pub const CACHE_CAPACITY: usize = 256;

/// Memo of decoded strings for one table.
#[derive(Debug, Default)]
pub struct DecodeCache<M> {
    /// Allocated on first insert so that caches can be built in `const` context.
    entries: RwLock<Option<FxHashMap<M, String>>>,
}

impl<M: Bits> DecodeCache<M> {
    pub const fn new() -> Self {
        Self {
            entries: RwLock::new(None),
        }
    }

    /// Cached string for `mask`, if any.
    pub fn get(&self, mask: M) -> Option<String> {
        self.entries.read().as_ref()?.get(&mask).cloned()
    }

    /// Store `name` for `mask`, flushing first if the cache is full.
    pub fn insert(&self, mask: M, name: String) {
        let mut entries = self.entries.write();
        if entries
            .as_ref()
            .is_some_and(|map| map.len() >= CACHE_CAPACITY)
        {
            *entries = None;
        }
        entries
            .get_or_insert_with(|| {
                FxHashMap::with_capacity_and_hasher(CACHE_CAPACITY, Default::default())
            })
            .insert(mask, name);
    }

    /// Return the cached string for `mask`, computing and storing it on a miss.
    pub fn get_or_insert_with(&self, mask: M, compute: impl FnOnce() -> String) -> String {
        if let Some(hit) = self.get(mask) {
            return hit;
        }
        let name = compute();
        self.insert(mask, name.clone());
        name
    }

    /// Number of cached masks.
    pub fn len(&self) -> usize {
        self.entries.read().as_ref().map_or(0, |map| map.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        *self.entries.write() = None;
    }
}
