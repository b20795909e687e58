//! Black-box scenarios against the public API, using real wall-clock time
//! instead of the internal fake clock the unit tests use.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use slidecache_core::{CacheOptions, Engine};

#[test]
fn database_query_cache_pattern() {
    let options = CacheOptions::builder()
        .max_size(100)
        .default_sliding_expiration(Duration::from_secs(300))
        .build();
    let cache: Engine<String, Vec<String>> = Engine::with_options(options);

    let query_count = AtomicUsize::new(0);
    let run_query = |sql: &str| {
        cache.get(sql.to_string(), || {
            query_count.fetch_add(1, Ordering::SeqCst);
            vec!["row_0".to_string(), "row_1".to_string()]
        })
    };

    let first = run_query("SELECT * FROM users");
    assert_eq!(first.len(), 2);
    drop(first);

    let second = run_query("SELECT * FROM users");
    assert_eq!(second.len(), 2);
    drop(second);

    assert_eq!(query_count.load(Ordering::SeqCst), 1);
    assert_eq!(cache.size(), 1);
}

#[test]
fn sliding_expiration_under_real_time() {
    let options = CacheOptions::builder()
        .default_sliding_expiration(Duration::from_millis(200))
        .build();
    let cache: Engine<&'static str, i32> = Engine::with_options(options);

    cache.get("s", || 1);

    thread::sleep(Duration::from_millis(150));
    assert_eq!(*cache.find(&"s").expect("still within window"), 1);

    thread::sleep(Duration::from_millis(150));
    assert_eq!(
        *cache.find(&"s").expect("refreshed by the previous access"),
        1
    );

    thread::sleep(Duration::from_millis(250));
    assert!(cache.find(&"s").is_none());
}

#[test]
fn manual_cleanup_without_background_interval() {
    let options = CacheOptions::builder()
        .default_sliding_expiration(Duration::from_millis(30))
        .build();
    let cache: Engine<i32, &'static str> = Engine::with_options(options);

    cache.get(1, || "a");
    cache.get(2, || "b");
    cache.get(3, || "c");

    thread::sleep(Duration::from_millis(40));
    assert_eq!(cache.size(), 3, "cleanup_interval is disabled, nothing sweeps on its own");

    assert_eq!(cache.cleanup_expired(), 3);
    assert_eq!(cache.size(), 0);
}

#[test]
fn ten_threads_insert_disjoint_keys() {
    let cache = std::sync::Arc::new(Engine::<u64, u64>::new());
    let mut handles = Vec::new();

    for t in 0..10u64 {
        let cache = std::sync::Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..100u64 {
                let key = t * 100 + i;
                cache.get(key, || key + 1);
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(cache.size(), 1000);
    for key in 0..1000u64 {
        assert_eq!(*cache.find(&key).unwrap(), key + 1);
    }
}

#[test]
fn heavy_value_caching_returns_stable_borrow() {
    struct Image {
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    }

    let cache: Engine<String, Image> = Engine::new();
    let loaded = AtomicUsize::new(0);

    {
        let image = cache.get("photo1.jpg".to_string(), || {
            loaded.fetch_add(1, Ordering::SeqCst);
            Image {
                width: 1920,
                height: 1080,
                pixels: vec![0u8; 16],
            }
        });
        assert_eq!(image.width, 1920);
        assert_eq!(image.height, 1080);
        assert_eq!(image.pixels.len(), 16);
    }

    let cached_again = cache.get("photo1.jpg".to_string(), || {
        loaded.fetch_add(1, Ordering::SeqCst);
        Image {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    });
    assert_eq!(cached_again.width, 1920);
    assert_eq!(loaded.load(Ordering::SeqCst), 1);
}
