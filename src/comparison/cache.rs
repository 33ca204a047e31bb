//! Memoized comparisons for callers that re-render on every input change.
//!
//! Entries are keyed by an xxHash64 digest of the serialized inputs, so two
//! structurally equal snapshots share an entry even when they are distinct
//! allocations. The engine config is part of the key. The cache holds at most
//! `max_entries` results and evicts the oldest insertion when full.

use super::engine::ComparisonEngine;
use super::types::ComparisonData;
use crate::facility::{Facility, RouteLookup};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use xxhash_rust::xxh64::Xxh64;

const KEY_SEED: u64 = 0;

/// Default bound on cached comparisons.
pub const DEFAULT_MAX_ENTRIES: usize = 64;

#[derive(Serialize)]
struct CacheKeyInput<'a> {
    facility_a: &'a Facility,
    facility_b: &'a Facility,
    directions_a: &'a RouteLookup,
    directions_b: &'a RouteLookup,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    data: ComparisonData,
    sequence: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub evictions: usize,
    pub entries: usize,
}

/// Thread-safe, size-bounded comparison cache.
#[derive(Debug)]
pub struct ComparisonCache {
    engine: ComparisonEngine,
    entries: DashMap<u64, CacheEntry>,
    max_entries: usize,
    next_sequence: AtomicU64,
    hits: AtomicUsize,
    misses: AtomicUsize,
    evictions: AtomicUsize,
}

impl Default for ComparisonCache {
    fn default() -> Self {
        Self::new(ComparisonEngine::default())
    }
}

impl ComparisonCache {
    pub fn new(engine: ComparisonEngine) -> Self {
        Self::with_max_entries(engine, DEFAULT_MAX_ENTRIES)
    }

    /// Cache that keeps at most `max_entries` results (at least one).
    pub fn with_max_entries(engine: ComparisonEngine, max_entries: usize) -> Self {
        Self {
            engine,
            entries: DashMap::new(),
            max_entries: max_entries.max(1),
            next_sequence: AtomicU64::new(0),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            evictions: AtomicUsize::new(0),
        }
    }

    /// Cached equivalent of [`ComparisonEngine::compare`].
    pub fn get_or_compute(
        &self,
        facility_a: Option<&Facility>,
        facility_b: Option<&Facility>,
        directions_a: &RouteLookup,
        directions_b: &RouteLookup,
    ) -> Option<ComparisonData> {
        let (a, b) = (facility_a?, facility_b?);

        let key = match self.cache_key(a, b, directions_a, directions_b) {
            Some(key) => key,
            None => return self.engine.compare(Some(a), Some(b), directions_a, directions_b),
        };

        if let Some(cached) = self.entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(key, "comparison cache hit");
            return Some(cached.data.clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let data = self
            .engine
            .compare(Some(a), Some(b), directions_a, directions_b)?;

        if self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        self.entries.insert(
            key,
            CacheEntry {
                data: data.clone(),
                sequence,
            },
        );
        Some(data)
    }

    fn evict_oldest(&self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().sequence)
            .map(|entry| *entry.key());
        // The iterator guard must be gone before removing.
        if let Some(key) = oldest {
            if self.entries.remove(&key).is_some() {
                self.evictions.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(key, "comparison cache eviction");
            }
        }
    }

    fn cache_key(
        &self,
        a: &Facility,
        b: &Facility,
        directions_a: &RouteLookup,
        directions_b: &RouteLookup,
    ) -> Option<u64> {
        let input = CacheKeyInput {
            facility_a: a,
            facility_b: b,
            directions_a,
            directions_b,
        };
        let mut hasher = Xxh64::new(KEY_SEED);
        match serde_json::to_vec(&input) {
            Ok(bytes) => hasher.update(&bytes),
            Err(e) => {
                tracing::warn!(error = %e, "cannot hash comparison inputs, skipping cache");
                return None;
            }
        }
        // Config changes invalidate everything computed under the old table.
        let config = serde_json::to_vec(self.engine.config()).ok()?;
        hasher.update(&config);
        Some(hasher.digest())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Counters since creation.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}
