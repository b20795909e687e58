//! Explicit invalidation: `remove` drops a single key, `clear` drops
//! everything. Useful when an external event (a write, a config reload)
//! makes cached state stale before its expiration would have caught it.

use slidecache_core::Engine;

fn main() {
    let cache: Engine<&'static str, u32> = Engine::new();

    cache.get("a", || 1);
    cache.get("b", || 2);
    cache.get("c", || 3);
    println!("size before remove: {}", cache.size());

    let removed = cache.remove(&"b");
    println!("removed b: {removed}");
    println!("size after remove: {}", cache.size());
    assert!(cache.find(&"b").is_none());
    assert!(cache.find(&"a").is_some());

    cache.clear();
    println!("size after clear: {}", cache.size());
    assert!(cache.is_empty());
}
