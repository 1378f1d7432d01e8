//! Module implementing the LRU cache shared between threads.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use antidote::Mutex;
use lru_cache::LruCache;


/// Hit & miss counts of a `SharedCache`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}


/// LRU cache that can be used through a shared reference.
///
/// Values are handed out as `Arc`s, so they stay valid even after eviction.
pub struct SharedCache<K: Eq + Hash, V> {
    entries: Mutex<LruCache<K, Arc<V>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<K: Eq + Hash, V> SharedCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        SharedCache{
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Look up the value for given key, counting it as a hit or a miss.
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<V>>
        where K: Borrow<Q>, Q: ?Sized + Eq + Hash
    {
        let found = self.entries.lock().get_mut(key).cloned();
        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Store a value, evicting the least recently used one if the cache is full.
    pub fn put(&self, key: K, value: V) -> Arc<V> {
        let value = Arc::new(value);
        self.entries.lock().insert(key, value.clone());
        value
    }

    /// Get the cached value or compute it with `load` and store it.
    ///
    /// The lock isn't held while loading, so two threads may load the same key;
    /// the value stored last wins.
    pub fn get_or_try_load<Q, F, E>(&self, key: &Q, load: F) -> Result<Arc<V>, E>
        where K: Borrow<Q>, Q: ?Sized + Eq + Hash + ToOwned<Owned=K>,
              F: FnOnce(&Q) -> Result<V, E>
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        let value = load(key)?;
        Ok(self.put(key.to_owned(), value))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats{
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl<K: Eq + Hash, V> fmt::Debug for SharedCache<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut ds = fmt.debug_struct("SharedCache");
        if let Ok(entries) = self.entries.try_lock() {
            ds.field("capacity", &entries.capacity());
            ds.field("len", &entries.len());
        }
        ds.field("stats", &self.stats());
        ds.finish()
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use super::{CacheStats, SharedCache};

    #[test]
    fn counts_hits_and_misses() {
        let cache = SharedCache::new(2);
        assert!(cache.get("a").is_none());
        cache.put("a".to_owned(), 1);
        assert_eq!(Some(1), cache.get("a").map(|v| *v));
        assert_eq!(CacheStats{hits: 1, misses: 1}, cache.stats());
    }

    #[test]
    fn evicts_least_recently_used() {
        let cache = SharedCache::new(2);
        cache.put("a".to_owned(), 1);
        cache.put("b".to_owned(), 2);
        cache.get("a");
        cache.put("c".to_owned(), 3);
        assert_eq!(2, cache.len());
        assert!(cache.get("b").is_none());
        assert!(cache.get("a").is_some());
    }

    #[test]
    fn loads_only_once() {
        let cache: SharedCache<String, usize> = SharedCache::new(4);
        let mut calls = 0;
        for _ in 0..3 {
            let value = cache.get_or_try_load("abc", |k| { calls += 1; Ok::<_, ()>(k.len()) });
            assert_that!(value.map(|v| *v)).is_ok().is_equal_to(3);
        }
        assert_eq!(1, calls);
    }

    #[test]
    fn failed_load_isnt_cached() {
        let cache: SharedCache<String, usize> = SharedCache::new(4);
        assert_that!(cache.get_or_try_load("x", |_| Err("nope"))).is_err();
        assert!(cache.is_empty());
    }
}
