//! LRU Cache Walkthrough
//!
//! Replays a short access sequence against a two-entry cache, printing the
//! recency order after each step and the collected metrics at the end.
//!
//! Run with `cargo run --example lru_walkthrough`.

use bounded_lru::{CacheMetrics, LruCache};
use std::num::NonZeroUsize;

enum Op {
    Put(u32, u32),
    Get(u32),
}

fn main() {
    let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());

    println!("LRU walkthrough, capacity {}", cache.cap());
    println!("=============================\n");

    let ops = [
        Op::Put(1, 1),
        Op::Put(2, 2),
        Op::Get(1),
        Op::Put(3, 3),
        Op::Get(2),
        Op::Put(4, 4),
        Op::Get(1),
        Op::Get(3),
        Op::Get(4),
    ];

    for op in ops {
        match op {
            Op::Put(key, value) => match cache.put(key, value) {
                Some((evicted, _)) => println!("put({}, {})  evicted {}", key, value, evicted),
                None => println!("put({}, {})", key, value),
            },
            Op::Get(key) => match cache.get(&key) {
                Some(value) => println!("get({})     -> {}", key, value),
                None => println!("get({})     -> miss", key),
            },
        }
        let order: Vec<String> = cache.iter().map(|(k, _)| k.to_string()).collect();
        println!("            MRU [{}] LRU", order.join(", "));
    }

    println!("\n{} metrics:", cache.algorithm_name());
    for (name, value) in cache.metrics() {
        println!("  {:<18} {:.2}", name, value);
    }
}
