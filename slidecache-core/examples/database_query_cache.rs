//! A practical pattern: cache rows for a slow query, keyed by the SQL text,
//! with `try_get_with` propagating a connection failure to the caller
//! instead of swallowing it or caching a poisoned result.

use std::time::Duration;

use slidecache_core::{CacheOptions, Engine};
use thiserror::Error;

#[derive(Debug, Error)]
enum QueryError {
    #[error("refusing destructive statement: {0}")]
    Rejected(String),
}

fn run_query(sql: &str) -> Result<Vec<String>, QueryError> {
    if sql.contains("DROP") {
        return Err(QueryError::Rejected(sql.to_string()));
    }
    Ok(vec![format!("row for `{sql}`")])
}

fn main() {
    let options = CacheOptions::builder()
        .max_size(500)
        .default_sliding_expiration(Duration::from_secs(30))
        .build();
    let cache: Engine<String, Vec<String>> = Engine::with_options(options);

    let sql = "SELECT * FROM orders WHERE status = 'pending'";
    let rows = cache
        .try_get_with(sql.to_string(), || run_query(sql), |_meta| {})
        .expect("well-formed query should succeed");
    println!("rows: {:?}", &*rows);
    drop(rows);

    let bad_sql = "DROP TABLE orders";
    match cache.try_get_with(bad_sql.to_string(), || run_query(bad_sql), |_meta| {}) {
        Ok(_) => unreachable!("destructive query should not succeed"),
        Err(e) => println!("rejected as expected: {e}"),
    }

    // The failed attempt never entered the cache.
    assert!(cache.find(&bad_sql.to_string()).is_none());
    assert_eq!(cache.size(), 1);
}
