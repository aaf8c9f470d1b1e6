//! Integration tests for the shared blur filter cache

use std::sync::Arc;
use std::thread;

use frost_paint::{FilterCache, DEFAULT_CAPACITY};

#[test]
fn test_default_capacity_bound() {
    let cache = FilterCache::new();
    for i in 0..(DEFAULT_CAPACITY + 25) {
        cache.get_or_create(i as f32 * 0.5, 1.0);
    }
    assert_eq!(cache.len(), DEFAULT_CAPACITY);
}

#[test]
fn test_first_inserted_is_evicted_first() {
    let cache = FilterCache::with_capacity(4);
    for i in 0..4 {
        cache.get_or_create(i as f32, i as f32);
    }
    assert_eq!(cache.constructions(), 4);

    cache.get_or_create(100.0, 100.0);
    assert_eq!(cache.len(), 4);
    assert!(!cache.contains(0.0, 0.0));
    for i in 1..4 {
        assert!(cache.contains(i as f32, i as f32));
    }

    // Re-requesting the evicted key rebuilds it, which in turn evicts key 1.
    cache.get_or_create(0.0, 0.0);
    assert_eq!(cache.constructions(), 6);
    assert!(!cache.contains(1.0, 1.0));
}

#[test]
fn test_handles_outlive_eviction() {
    let cache = FilterCache::with_capacity(1);
    let held = cache.get_or_create(3.0, 3.0);
    cache.get_or_create(7.0, 7.0);

    assert!(!cache.contains(3.0, 3.0));
    assert_eq!(held.sigma_x(), 3.0);
    assert_eq!(Arc::strong_count(&held), 1);
}

#[test]
fn test_concurrent_misses_respect_capacity() {
    let cache = Arc::new(FilterCache::with_capacity(16));
    let workers: Vec<_> = (0..8)
        .map(|t| {
            let cache = cache.clone();
            thread::spawn(move || {
                for i in 0..64 {
                    let r = ((t * 64 + i) % 40) as f32;
                    cache.get_or_create(r, r);
                    assert!(cache.len() <= 16);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }
    assert_eq!(cache.len(), 16);

    let a = cache.get_or_create(39.0, 39.0);
    let b = cache.get_or_create(39.0, 39.0);
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_shared_cache_is_one_instance() {
    let a = FilterCache::shared();
    let b = FilterCache::shared();
    assert!(Arc::ptr_eq(&a, &b));
}
