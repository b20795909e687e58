//! Demonstrates capacity enforcement: once `max_size` is reached, inserting
//! a new key evicts the least-recently-used entry first.

use slidecache_core::{CacheOptions, Engine};

fn main() {
    let options = CacheOptions::builder().max_size(3).build();
    let cache: Engine<&'static str, u32> = Engine::with_options(options);

    cache.get("a", || 1);
    cache.get("b", || 2);
    cache.get("c", || 3);

    // Touching "a" makes "b" the new least-recently-used entry.
    cache.find(&"a");

    cache.get("d", || 4);

    println!("a present: {}", cache.find(&"a").is_some());
    println!("b present: {}", cache.find(&"b").is_some());
    println!("c present: {}", cache.find(&"c").is_some());
    println!("d present: {}", cache.find(&"d").is_some());
    println!("size: {}", cache.size());

    assert!(cache.find(&"b").is_none(), "b should have been evicted");
    assert_eq!(cache.size(), 3);
}
