//! A flag type's name table paired with its decoding strategy.

use crate::bits::Bits;
use crate::cache::DecodeCache;
use crate::decode;
use crate::table::Table;

/// How a [`Stringer`] decodes, fixed when it is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Memoize decoded strings in a bounded per-type cache.
    #[default]
    Cached,
    /// Decode on every call.
    Uncached,
}

/// Decoder bound to one flag type.
///
/// Owns the type's cache (when cached), so every type gets its own cache and
/// nothing is shared across types.
#[derive(Debug)]
pub struct Stringer<'a, M> {
    table: Table<'a, M>,
    cache: Option<DecodeCache<M>>,
}

impl<'a, M: Bits> Stringer<'a, M> {
    pub const fn new(table: Table<'a, M>, strategy: Strategy) -> Self {
        let cache = match strategy {
            Strategy::Cached => Some(DecodeCache::new()),
            Strategy::Uncached => None,
        };
        Self { table, cache }
    }

    pub const fn cached(table: Table<'a, M>) -> Self {
        Self::new(table, Strategy::Cached)
    }

    pub const fn uncached(table: Table<'a, M>) -> Self {
        Self::new(table, Strategy::Uncached)
    }

    pub fn table(&self) -> &Table<'a, M> {
        &self.table
    }

    pub fn strategy(&self) -> Strategy {
        match self.cache {
            Some(_) => Strategy::Cached,
            None => Strategy::Uncached,
        }
    }

    /// The cache, for cached stringers.
    pub fn cache(&self) -> Option<&DecodeCache<M>> {
        self.cache.as_ref()
    }

    /// Render `mask` through the table, consulting the cache if there is one.
    pub fn mstring(&self, mask: M) -> String {
        if mask == M::ZERO {
            return self.table.zero_name().to_string();
        }
        match &self.cache {
            Some(cache) => cache.get_or_insert_with(mask, || decode::mstring(&self.table, mask)),
            None => decode::mstring(&self.table, mask),
        }
    }
}
