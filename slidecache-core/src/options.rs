//! Engine construction options.

use std::time::Duration;

/// Construction-time knobs for an [`Engine`](crate::Engine).
///
/// All three fields default to zero, which means "unbounded / never-expiring
/// / no background sweeping" — an engine built from `CacheOptions::default()`
/// behaves like a plain thread-safe hash map that never evicts anything on
/// its own, and only ever shrinks via explicit `remove`/`clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// Maximum live entries. `0` disables the bound.
    pub max_size: u64,
    /// Default per-entry sliding expiration window. `0` disables expiration.
    pub default_sliding_expiration: Duration,
    /// Minimum wall time between opportunistic bounded sweeps. `0` disables
    /// background sweeping; `cleanup_expired` still works on demand.
    pub cleanup_interval: Duration,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            max_size: 0,
            default_sliding_expiration: Duration::ZERO,
            cleanup_interval: Duration::ZERO,
        }
    }
}

impl CacheOptions {
    pub fn builder() -> CacheOptionsBuilder {
        CacheOptionsBuilder::default()
    }
}

/// Fluent builder for [`CacheOptions`], for call sites that only want to
/// override one or two of the three knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheOptionsBuilder {
    options: CacheOptionsInner,
}

#[derive(Debug, Clone, Copy, Default)]
struct CacheOptionsInner {
    max_size: u64,
    default_sliding_expiration: Duration,
    cleanup_interval: Duration,
}

impl CacheOptionsBuilder {
    pub fn max_size(mut self, max_size: u64) -> Self {
        self.options.max_size = max_size;
        self
    }

    pub fn default_sliding_expiration(mut self, expiration: Duration) -> Self {
        self.options.default_sliding_expiration = expiration;
        self
    }

    pub fn cleanup_interval(mut self, interval: Duration) -> Self {
        self.options.cleanup_interval = interval;
        self
    }

    pub fn build(self) -> CacheOptions {
        CacheOptions {
            max_size: self.options.max_size,
            default_sliding_expiration: self.options.default_sliding_expiration,
            cleanup_interval: self.options.cleanup_interval,
        }
    }
}

/// Per-entry metadata exposed to a `get_with`/`try_get_with` configurator.
///
/// `value`, `created_at`, and `last_access_at` are deliberately not part of
/// this type: the configurator can retune expiration and size bookkeeping
/// for a freshly materialized entry, but it cannot see or replace the value
/// the factory just produced.
#[derive(Debug, Clone, Copy)]
pub struct EntryMeta {
    pub sliding_expiration: Duration,
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded_and_never_expiring() {
        let options = CacheOptions::default();
        assert_eq!(options.max_size, 0);
        assert_eq!(options.default_sliding_expiration, Duration::ZERO);
        assert_eq!(options.cleanup_interval, Duration::ZERO);
    }

    #[test]
    fn builder_overrides_only_named_fields() {
        let options = CacheOptions::builder().max_size(16).build();
        assert_eq!(options.max_size, 16);
        assert_eq!(options.default_sliding_expiration, Duration::ZERO);
    }
}
