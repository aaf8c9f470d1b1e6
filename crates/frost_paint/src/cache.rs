//! Bounded store of blur filters keyed by their radii
//!
//! Every glass surface asks for a filter on every render pass; identical
//! radii must share one [`BlurFilter`]. The store keeps at most `capacity`
//! filters and evicts in insertion order. Hits do not refresh an entry, so this
//! is deliberately not an LRU.
//!
//! Lookup and insertion happen under one lock, so the capacity bound holds even
//! when several render threads miss on the same key at once.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use indexmap::IndexMap;

use crate::blur::{BlurFilter, TileMode};

/// Default number of filters kept resident
pub const DEFAULT_CAPACITY: usize = 50;

/// Shared handle to a cached filter. Two handles for the same entry are
/// pointer-equal (`Arc::ptr_eq`).
pub type FilterHandle = Arc<BlurFilter>;

static SHARED_CACHE: OnceLock<Arc<FilterCache>> = OnceLock::new();

/// Cache key: the horizontal and vertical blur radii, compared exactly
#[derive(Clone, Copy, Debug)]
pub struct FilterKey {
    radius_x: f32,
    radius_y: f32,
}

impl FilterKey {
    pub fn new(radius_x: f32, radius_y: f32) -> Self {
        // -0.0 and 0.0 are the same radius; fold them onto one bit pattern.
        Self {
            radius_x: radius_x + 0.0,
            radius_y: radius_y + 0.0,
        }
    }

    /// Round both radii to the nearest multiple of `step`
    pub fn quantized(self, step: f32) -> Self {
        if step.is_nan() || step <= 0.0 {
            return self;
        }
        Self::new(
            (self.radius_x / step).round() * step,
            (self.radius_y / step).round() * step,
        )
    }

    pub fn radius_x(&self) -> f32 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f32 {
        self.radius_y
    }
}

impl PartialEq for FilterKey {
    fn eq(&self, other: &Self) -> bool {
        self.radius_x.to_bits() == other.radius_x.to_bits()
            && self.radius_y.to_bits() == other.radius_y.to_bits()
    }
}

impl Eq for FilterKey {}

impl Hash for FilterKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.radius_x.to_bits().hash(state);
        self.radius_y.to_bits().hash(state);
    }
}

/// Bounded, insertion-ordered filter cache
#[derive(Debug)]
pub struct FilterCache {
    store: Mutex<IndexMap<FilterKey, FilterHandle>>,
    capacity: usize,
    quantum: Option<f32>,
    constructed: AtomicU64,
}

impl FilterCache {
    /// Cache with [`DEFAULT_CAPACITY`] and exact keys
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Cache holding at most `capacity` filters (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            store: Mutex::new(IndexMap::with_capacity(capacity)),
            capacity,
            quantum: None,
            constructed: AtomicU64::new(0),
        }
    }

    /// Round radii to multiples of `step` before lookup, so that nearby
    /// values sampled mid-animation share one filter
    pub fn with_quantization(mut self, step: f32) -> Self {
        self.quantum = (step > 0.0).then_some(step);
        self
    }

    /// The process-wide cache used when a composition root injects none
    pub fn shared() -> Arc<FilterCache> {
        SHARED_CACHE
            .get_or_init(|| Arc::new(FilterCache::new()))
            .clone()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn quantization(&self) -> Option<f32> {
        self.quantum
    }

    /// Resolve the key a request for `(radius_x, radius_y)` is stored under
    pub fn key_for(&self, radius_x: f32, radius_y: f32) -> FilterKey {
        let key = FilterKey::new(radius_x, radius_y);
        match self.quantum {
            Some(step) => key.quantized(step),
            None => key,
        }
    }

    /// Return the cached filter for these radii, building it on a miss
    pub fn get_or_create(&self, radius_x: f32, radius_y: f32) -> FilterHandle {
        let key = self.key_for(radius_x, radius_y);
        let mut store = self.lock();

        if let Some(handle) = store.get(&key) {
            tracing::trace!(radius_x = key.radius_x, radius_y = key.radius_y, "filter cache hit");
            return handle.clone();
        }

        if store.len() >= self.capacity {
            if let Some((evicted, _)) = store.shift_remove_index(0) {
                tracing::debug!(
                    radius_x = evicted.radius_x,
                    radius_y = evicted.radius_y,
                    "evicted oldest blur filter"
                );
            }
        }

        let handle = Arc::new(BlurFilter::new(key.radius_x, key.radius_y, TileMode::Clamp));
        self.constructed.fetch_add(1, Ordering::Relaxed);
        store.insert(key, handle.clone());
        tracing::debug!(
            radius_x = key.radius_x,
            radius_y = key.radius_y,
            resident = store.len(),
            "built blur filter"
        );
        handle
    }

    /// Whether a filter for these radii is resident
    pub fn contains(&self, radius_x: f32, radius_y: f32) -> bool {
        let key = self.key_for(radius_x, radius_y);
        self.lock().contains_key(&key)
    }

    /// Number of resident filters
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Total number of filters built since creation
    pub fn constructions(&self) -> u64 {
        self.constructed.load(Ordering::Relaxed)
    }

    /// Drop every resident filter
    pub fn clear(&self) {
        let mut store = self.lock();
        tracing::debug!(dropped = store.len(), "filter cache cleared");
        store.clear();
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<FilterKey, FilterHandle>> {
        // Entries are immutable once inserted; a panic elsewhere cannot leave
        // the map half-updated.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FilterCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_radii_share_one_filter() {
        let cache = FilterCache::new();
        let a = cache.get_or_create(4.0, 4.0);
        let b = cache.get_or_create(4.0, 4.0);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.constructions(), 1);
        assert_eq!(a.tile_mode(), TileMode::Clamp);
    }

    #[test]
    fn test_axes_are_distinct() {
        let cache = FilterCache::new();
        let a = cache.get_or_create(2.0, 6.0);
        let b = cache.get_or_create(6.0, 2.0);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_negative_zero_matches_zero() {
        let cache = FilterCache::new();
        let a = cache.get_or_create(0.0, 0.0);
        let b = cache.get_or_create(-0.0, 0.0);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_capacity_bound() {
        let cache = FilterCache::with_capacity(8);
        for i in 0..20 {
            cache.get_or_create(i as f32, i as f32);
            assert!(cache.len() <= 8);
        }
        assert_eq!(cache.len(), 8);
        assert_eq!(cache.constructions(), 20);
    }

    #[test]
    fn test_hits_do_not_refresh_recency() {
        let cache = FilterCache::with_capacity(3);
        cache.get_or_create(1.0, 1.0);
        cache.get_or_create(2.0, 2.0);
        cache.get_or_create(3.0, 3.0);

        // A hit on the oldest key does not save it from eviction.
        cache.get_or_create(1.0, 1.0);
        cache.get_or_create(4.0, 4.0);

        assert!(!cache.contains(1.0, 1.0));
        assert!(cache.contains(2.0, 2.0));
        assert!(cache.contains(4.0, 4.0));
    }

    #[test]
    fn test_clear() {
        let cache = FilterCache::new();
        let before = cache.get_or_create(5.0, 5.0);
        cache.clear();
        assert!(cache.is_empty());

        let after = cache.get_or_create(5.0, 5.0);
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(cache.constructions(), 2);
    }

    #[test]
    fn test_quantization_merges_nearby_radii() {
        let cache = FilterCache::new().with_quantization(0.5);
        let a = cache.get_or_create(10.1, 10.1);
        let b = cache.get_or_create(9.9, 10.2);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.sigma_x(), 10.0);

        let exact = FilterCache::new();
        exact.get_or_create(10.1, 10.1);
        exact.get_or_create(9.9, 10.2);
        assert_eq!(exact.len(), 2);
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let cache = FilterCache::with_capacity(0);
        assert_eq!(cache.capacity(), 1);
        cache.get_or_create(1.0, 1.0);
        cache.get_or_create(2.0, 2.0);
        assert_eq!(cache.len(), 1);
    }
}
