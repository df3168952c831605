//! In-process expiring cache for assembled responses.
//!
//! Key is the endpoint plus its parameters, value is the serialized
//! response body. Entries expire on read; there is no other eviction.
//! Two concurrent misses may both refetch upstream; recomputation is
//! idempotent and cheap, so the cache only guards the map itself.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::config::settings::CacheSettings;

#[derive(Debug)]
struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

#[derive(Debug)]
pub struct TtlCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl TtlCache {
    pub fn new(settings: &CacheSettings) -> Self {
        Self {
            ttl: Duration::from_secs(settings.ttl_seconds),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        let now = Instant::now();
        {
            let entries = self.entries.read().expect("cache lock poisoned");
            match entries.get(key) {
                Some(entry) if entry.expires_at > now => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        // Stale entry: discard it so the map does not grow unbounded.
        let mut entries = self.entries.write().expect("cache lock poisoned");
        if entries.get(key).is_some_and(|entry| entry.expires_at <= now) {
            entries.remove(key);
        }
        None
    }

    pub fn put(&self, key: &str, value: Value) {
        let mut entries = self.entries.write().expect("cache lock poisoned");
        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }
}
