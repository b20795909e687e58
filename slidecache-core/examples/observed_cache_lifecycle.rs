//! Wires up `tracing-subscriber` so the `trace!`/`debug!` events the engine
//! emits around eviction and cleanup become visible, the way a service
//! embedding this cache would configure logging in production.

use std::time::Duration;

use anyhow::Result;
use slidecache_core::{CacheOptions, Engine};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("slidecache_core=trace")),
        )
        .init();

    let options = CacheOptions::builder()
        .max_size(2)
        .cleanup_interval(Duration::from_millis(1))
        .build();
    let cache: Engine<u32, u32> = Engine::with_options(options);

    cache.get(1, || 10);
    cache.get(2, || 20);
    // Capacity is 2; this eviction is logged at trace level.
    cache.get(3, || 30);

    std::thread::sleep(Duration::from_millis(5));
    let reclaimed = cache.cleanup_expired();
    println!("cleanup_expired reclaimed {reclaimed} entries");

    Ok(())
}
