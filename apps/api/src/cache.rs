//! Bounded in-memory key-value cache.
//!
//! Image lookups previously leaked into an unbounded module-level map keyed by
//! concatenated strings. This makes eviction an explicit decision: fixed
//! capacity, oldest insertion evicted first. Overwrites refresh the value but
//! keep the original insertion slot.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

pub struct BoundedCache<V> {
    capacity: usize,
    inner: Mutex<CacheInner<V>>,
}

struct CacheInner<V> {
    map: HashMap<String, V>,
    order: VecDeque<String>,
}

impl<V: Clone> BoundedCache<V> {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be non-zero");
        Self {
            capacity,
            inner: Mutex::new(CacheInner {
                map: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let inner = self.inner.lock().expect("cache mutex poisoned");
        inner.map.get(key).cloned()
    }

    pub fn set(&self, key: &str, value: V) {
        let mut inner = self.inner.lock().expect("cache mutex poisoned");
        if inner.map.insert(key.to_string(), value).is_none() {
            inner.order.push_back(key.to_string());
            if inner.order.len() > self.capacity {
                if let Some(evicted) = inner.order.pop_front() {
                    inner.map.remove(&evicted);
                }
            }
        }
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock().expect("cache mutex poisoned");
        inner.map.clear();
        inner.order.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("cache mutex poisoned").map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let cache = BoundedCache::new(4);
        cache.set("paris", vec!["a".to_string()]);
        assert_eq!(cache.get("paris"), Some(vec!["a".to_string()]));
        assert_eq!(cache.get("tokyo"), None);
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let cache = BoundedCache::new(2);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(2));
        assert_eq!(cache.get("c"), Some(3));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_overwrite_does_not_grow() {
        let cache = BoundedCache::new(2);
        cache.set("a", 1);
        cache.set("a", 10);
        cache.set("b", 2);
        assert_eq!(cache.get("a"), Some(10));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clear() {
        let cache = BoundedCache::new(2);
        cache.set("a", 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
