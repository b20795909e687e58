//! The configurator closure lets each entry pick its own sliding
//! expiration at insert time, overriding the cache-wide default.

use std::thread;
use std::time::Duration;

use slidecache_core::{CacheOptions, Engine};

fn main() {
    let options = CacheOptions::builder()
        .default_sliding_expiration(Duration::from_secs(60))
        .build();
    let cache: Engine<&'static str, &'static str> = Engine::with_options(options);

    // Session tokens: short-lived, refreshed on every use.
    cache.get_with(
        "session:alice",
        || "token-abc123",
        |meta| meta.sliding_expiration = Duration::from_millis(100),
    );

    // Static configuration: effectively pinned, inherits the 60s default.
    cache.get("config:feature_flags", || "flags-v7");

    thread::sleep(Duration::from_millis(150));

    println!(
        "session still cached: {}",
        cache.find(&"session:alice").is_some()
    );
    println!(
        "config still cached: {}",
        cache.find(&"config:feature_flags").is_some()
    );

    assert!(cache.find(&"session:alice").is_none());
    assert!(cache.find(&"config:feature_flags").is_some());
}
