//! The cache has no internal locking; hosts share it behind a `Mutex`.
//! These tests drive a mutex-guarded cache from a scoped thread pool and
//! check that the cache invariants hold once the workers are done.

use bounded_lru::{CacheMetrics, LruCache};
use scoped_threadpool::Pool;
use std::num::NonZeroUsize;
use std::sync::Mutex;

const WORKERS: u32 = 4;

#[test]
fn test_capacity_holds_under_serialized_writers() {
    let cache = Mutex::new(LruCache::new(NonZeroUsize::new(32).unwrap()));
    let mut pool = Pool::new(WORKERS);

    pool.scoped(|scope| {
        for worker in 0..WORKERS {
            let cache = &cache;
            scope.execute(move || {
                for i in 0..500u32 {
                    let key = (worker * 1_000 + i) % 97;
                    let mut guard = cache.lock().unwrap();
                    guard.put(key, worker);
                    assert!(guard.len() <= 32);
                }
            });
        }
    });

    let cache = cache.into_inner().unwrap();
    assert_eq!(cache.len(), 32);
    let metrics = cache.metrics();
    assert_eq!(
        metrics["insertions"] - metrics["evictions"],
        cache.len() as f64
    );
}

#[test]
fn test_readers_and_writers_keep_index_consistent() {
    let cache = Mutex::new(LruCache::new(NonZeroUsize::new(16).unwrap()));
    let mut pool = Pool::new(WORKERS);

    pool.scoped(|scope| {
        for worker in 0..WORKERS {
            let cache = &cache;
            scope.execute(move || {
                for i in 0..1_000u32 {
                    let key = (i * 7 + worker) % 40;
                    let mut guard = cache.lock().unwrap();
                    match i % 4 {
                        0 | 1 => {
                            guard.put(key, key * 2);
                        }
                        2 => {
                            if let Some(value) = guard.get(&key) {
                                assert_eq!(*value, key * 2);
                            }
                        }
                        _ => {
                            guard.remove(&key);
                        }
                    }
                }
            });
        }
    });

    let mut cache = cache.into_inner().unwrap();
    let resident: Vec<u32> = cache.iter().map(|(k, _)| *k).collect();
    assert_eq!(resident.len(), cache.len());
    for key in resident {
        assert_eq!(cache.get(&key), Some(&(key * 2)));
    }
}
