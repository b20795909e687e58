//! The simplest possible use: memoize a computation keyed by an integer,
//! observe that a second `get` for the same key skips the factory.

use std::sync::atomic::{AtomicUsize, Ordering};

use slidecache_core::Engine;

fn main() {
    let cache: Engine<u64, String> = Engine::new();
    let factory_calls = AtomicUsize::new(0);

    let a = cache.get(42, || {
        factory_calls.fetch_add(1, Ordering::SeqCst);
        format!("value-for-{}", 42)
    });
    println!("first get: {}", &*a);
    drop(a);

    let b = cache.get(42, || {
        factory_calls.fetch_add(1, Ordering::SeqCst);
        "should not run".to_string()
    });
    println!("second get: {}", &*b);
    drop(b);

    assert_eq!(factory_calls.load(Ordering::SeqCst), 1);
    println!("factory ran {} time(s)", factory_calls.load(Ordering::SeqCst));

    match cache.find(&99) {
        Some(value) => println!("unexpected hit: {}", &*value),
        None => println!("find(99) missed, as expected"),
    }
}
