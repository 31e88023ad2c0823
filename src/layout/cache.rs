use std::{num::NonZeroUsize, sync::Arc};

use lru::LruCache;

use crate::foundation::core::PlacedItem;

/// Identity of a viewport range query.
///
/// Two queries with equal keys against the same geometry always produce the same items,
/// provided the result was complete when it was stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeQueryKey {
    /// First row touched by the viewport (negative while over-scrolled above the top).
    pub start_row: i64,
    /// Rows covered, including one row of slack.
    pub row_count: usize,
    /// Row height the rows were measured with.
    pub row_height: u32,
    /// Column count the rows were measured with.
    pub column_count: usize,
}

/// Memoized viewport query results.
///
/// Unbounded by default. With a capacity, the least recently queried range is evicted first.
pub struct RangeQueryCache {
    entries: LruCache<RangeQueryKey, Arc<[PlacedItem]>>,
    capacity: Option<NonZeroUsize>,
}

impl RangeQueryCache {
    /// Cache that never evicts.
    pub fn unbounded() -> Self {
        Self {
            entries: LruCache::unbounded(),
            capacity: None,
        }
    }

    /// Cache holding at most `capacity` ranges.
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
            capacity: Some(capacity),
        }
    }

    /// `None` builds an unbounded cache.
    pub fn with_capacity(capacity: Option<NonZeroUsize>) -> Self {
        match capacity {
            Some(cap) => Self::bounded(cap),
            None => Self::unbounded(),
        }
    }

    /// Configured capacity, `None` when unbounded.
    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    /// Look up a stored range, marking it most recently used.
    pub fn get(&mut self, key: &RangeQueryKey) -> Option<Arc<[PlacedItem]>> {
        self.entries.get(key).cloned()
    }

    /// Whether `key` is stored. Does not touch recency.
    pub fn contains(&self, key: &RangeQueryKey) -> bool {
        self.entries.contains(key)
    }

    /// Store a complete range result.
    pub fn insert(&mut self, key: RangeQueryKey, items: Arc<[PlacedItem]>) {
        self.entries.put(key, items);
    }

    /// Drop every stored range.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored ranges.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RangeQueryCache {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl std::fmt::Debug for RangeQueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeQueryCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cache.rs"]
mod tests;
