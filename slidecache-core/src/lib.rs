//! # slidecache-core
//!
//! A thread-safe, in-memory associative cache with bounded capacity,
//! least-recently-used eviction, per-entry sliding time-based expiration,
//! and opportunistic incremental background cleanup.
//!
//! Reach for this when you need to memoize an expensive computation
//! (a database query, a decoded image, a downstream API response) under a
//! bounded entry count, without a durable store, replication, or eviction
//! notifications — just a cache that stays small and evicts sanely under
//! concurrent access.
//!
//! ```
//! use slidecache_core::Engine;
//!
//! let cache: Engine<String, String> = Engine::new();
//! let value = cache.get("greeting".to_string(), || "hello".to_string());
//! assert_eq!(value.as_str(), "hello");
//! ```
//!
//! ## Bounded capacity and expiration
//!
//! ```
//! use std::time::Duration;
//! use slidecache_core::{CacheOptions, Engine};
//!
//! let options = CacheOptions::builder()
//!     .max_size(1000)
//!     .default_sliding_expiration(Duration::from_secs(300))
//!     .build();
//! let cache: Engine<u64, String> = Engine::with_options(options);
//! ```

mod clock;
mod engine;
mod index;
mod list;
mod options;

pub use clock::{Clock, SystemClock};
pub use engine::{CacheRef, Engine};
pub use options::{CacheOptions, CacheOptionsBuilder, EntryMeta};
