//! Deterministic micro-benchmark for `slidecache_core::Engine`.
//!
//! No criterion, no external harness: a hand-rolled xorshift64 PRNG drives a
//! reproducible key sequence, and `std::hint::black_box` keeps the optimizer
//! from folding the loop away. Run with `cargo run --release -p
//! slidecache-bench -- [threads] [ops_per_thread] [key_space] [max_size]`.

use std::hint::black_box;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use slidecache_core::{CacheOptions, Engine};

struct XorShift64(u64);

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self(if seed == 0 { 0x9E3779B97F4A7C15 } else { seed })
    }

    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

struct BenchConfig {
    threads: u64,
    ops_per_thread: u64,
    key_space: u64,
    max_size: u64,
}

impl BenchConfig {
    fn from_args() -> Self {
        let mut args = std::env::args().skip(1);
        let mut next_or = |default: u64| -> u64 {
            args.next()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default)
        };
        Self {
            threads: next_or(4),
            ops_per_thread: next_or(200_000),
            key_space: next_or(10_000),
            max_size: next_or(2_000),
        }
    }
}

struct Report {
    label: &'static str,
    elapsed: Duration,
    ops: u64,
}

impl Report {
    fn print(&self) {
        let ops_per_sec = self.ops as f64 / self.elapsed.as_secs_f64();
        println!(
            "{:<24} {:>10} ops in {:>8.3?}  ({:>12.0} ops/sec)",
            self.label, self.ops, self.elapsed, ops_per_sec
        );
    }
}

fn run_single_threaded(cfg: &BenchConfig) -> Report {
    let cache: Engine<u64, u64> = Engine::with_options(
        CacheOptions::builder().max_size(cfg.max_size).build(),
    );
    let mut rng = XorShift64::new(1);

    let start = Instant::now();
    for _ in 0..cfg.ops_per_thread {
        let key = rng.next_below(cfg.key_space);
        let value = cache.get(key, || key.wrapping_mul(2654435761));
        black_box(&*value);
    }
    Report {
        label: "single_thread get",
        elapsed: start.elapsed(),
        ops: cfg.ops_per_thread,
    }
}

fn run_multi_threaded(cfg: &BenchConfig) -> Report {
    let cache: Arc<Engine<u64, u64>> = Arc::new(Engine::with_options(
        CacheOptions::builder().max_size(cfg.max_size).build(),
    ));

    let start = Instant::now();
    let handles: Vec<_> = (0..cfg.threads)
        .map(|t| {
            let cache = Arc::clone(&cache);
            let ops = cfg.ops_per_thread;
            let key_space = cfg.key_space;
            thread::spawn(move || {
                let mut rng = XorShift64::new(0x1000 + t);
                for _ in 0..ops {
                    let key = rng.next_below(key_space);
                    let value = cache.get(key, || key.wrapping_mul(2654435761));
                    black_box(&*value);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("bench worker thread panicked");
    }

    Report {
        label: "contended get",
        elapsed: start.elapsed(),
        ops: cfg.threads * cfg.ops_per_thread,
    }
}

fn run_eviction_churn(cfg: &BenchConfig) -> Report {
    // key_space far larger than max_size: every insert past warm-up evicts.
    let cache: Engine<u64, u64> = Engine::with_options(
        CacheOptions::builder().max_size(cfg.max_size).build(),
    );
    let churn_space = cfg.key_space.max(cfg.max_size * 8);
    let mut rng = XorShift64::new(2);

    let start = Instant::now();
    for _ in 0..cfg.ops_per_thread {
        let key = rng.next_below(churn_space);
        let value = cache.get(key, || key);
        black_box(&*value);
    }
    Report {
        label: "eviction churn",
        elapsed: start.elapsed(),
        ops: cfg.ops_per_thread,
    }
}

fn main() {
    let cfg = BenchConfig::from_args();
    println!(
        "threads={} ops_per_thread={} key_space={} max_size={}",
        cfg.threads, cfg.ops_per_thread, cfg.key_space, cfg.max_size
    );

    run_single_threaded(&cfg).print();
    run_multi_threaded(&cfg).print();
    run_eviction_churn(&cfg).print();
}
