//! Permission Cache Store
//!
//! Main cache engine: a string-keyed map with tiered TTL expiration,
//! fair-share LRU eviction, layered invalidation and statistics. Every
//! operation is total; absence is `None`, never an error. Expiry is lazy:
//! an expired entry found during a lookup counts as a miss and is dropped
//! on the spot.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::eviction::{eviction_scope, select_victim};
use crate::cache::{
    CacheCategory, CacheEntry, CacheKey, CacheStats, PermissionSet, SharedClock, SystemClock,
};

// == Permission Cache ==
/// In-memory permission cache with tiered TTLs and LRU eviction.
///
/// One instance per process, created at startup and handed to consumers
/// explicitly. The struct itself is synchronous; the service layer wraps it
/// in a single lock.
#[derive(Debug)]
pub struct PermissionCache {
    /// Entries keyed by rendered key string
    entries: HashMap<String, CacheEntry>,
    /// Subject -> rendered keys, for subject-wide invalidation
    subjects: HashMap<String, HashSet<String>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries across all categories
    capacity: usize,
    /// Injectable time source
    clock: SharedClock,
}

impl PermissionCache {
    // == Constructors ==
    /// Creates a cache holding at most `capacity` entries, on the system
    /// clock.
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, Arc::new(SystemClock))
    }

    /// Creates a cache on an explicit clock.
    pub fn with_clock(capacity: usize, clock: SharedClock) -> Self {
        Self {
            entries: HashMap::new(),
            subjects: HashMap::new(),
            stats: CacheStats::new(),
            capacity: capacity.max(1),
            clock,
        }
    }

    // == Set ==
    /// Inserts or overwrites the entry for `key`.
    ///
    /// Overwriting resets the entry's creation time, so its TTL starts
    /// over. Inserting into a full cache evicts first; the victim comes
    /// from the incoming entry's own category while that category holds at
    /// least its fair share of the capacity, from the whole cache
    /// otherwise. Always succeeds.
    pub fn set(&mut self, key: &CacheKey, value: PermissionSet, ttl_override: Option<Duration>) {
        let rendered = key.render();
        let category = key.category();
        let now = self.clock.now_ms();

        let is_overwrite = self.entries.contains_key(&rendered);
        if !is_overwrite && self.entries.len() >= self.capacity {
            self.evict_one(category, now);
        }

        let ttl_ms = ttl_override
            .unwrap_or_else(|| category.default_ttl())
            .as_millis() as u64;
        let subject = key.subject_id().map(str::to_string);

        if let Some(s) = &subject {
            self.subjects
                .entry(s.clone())
                .or_default()
                .insert(rendered.clone());
        }
        let entry = CacheEntry::new(value, category, subject, ttl_ms, now);
        self.entries.insert(rendered, entry);

        if !is_overwrite {
            self.stats.entries.increment(category);
        }
    }

    // == Get ==
    /// Returns a copy of the live value for `key`, or `None`.
    ///
    /// An entry past its TTL is treated as absent even if no sweep has run
    /// yet; the lookup drops it and records a miss. A hit refreshes the
    /// entry's last-access time.
    pub fn get(&mut self, key: &CacheKey) -> Option<PermissionSet> {
        let rendered = key.render();
        let now = self.clock.now_ms();

        if let Some(entry) = self.entries.get_mut(&rendered) {
            if !entry.is_expired(now) {
                entry.touch(now);
                let value = entry.value.clone();
                self.stats.record_hit();
                return Some(value);
            }
        } else {
            self.stats.record_miss();
            return None;
        }

        // Expired: drop it lazily and report the miss
        self.remove_key(&rendered);
        self.stats.record_miss();
        None
    }

    // == Invalidate ==
    /// Removes the entry for `key` if present. Idempotent.
    pub fn invalidate(&mut self, key: &CacheKey) {
        self.remove_key(&key.render());
    }

    // == Invalidate Subject ==
    /// Removes every entry, across all categories, whose key embeds
    /// `subject_id`. Entries of other subjects and matrix cells are left
    /// untouched.
    ///
    /// Runs in O(entries for that subject) via the subject index, inside
    /// one call, so a concurrent reader sees either all of the subject's
    /// entries or none of them.
    pub fn invalidate_subject(&mut self, subject_id: &str) {
        let Some(keys) = self.subjects.remove(subject_id) else {
            return;
        };
        for rendered in keys {
            if let Some(entry) = self.entries.remove(&rendered) {
                self.stats.entries.decrement(entry.category);
            }
        }
    }

    // == Invalidate Category ==
    /// Clears every entry of one category, e.g. all cached role permission
    /// sets after a role definition changed.
    pub fn invalidate_category(&mut self, category: CacheCategory) {
        let doomed: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.category == category)
            .map(|(key, _)| key.clone())
            .collect();

        for rendered in doomed {
            self.remove_key(&rendered);
        }
    }

    // == Stats ==
    /// Snapshot of the current statistics; does not mutate counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Clear ==
    /// Drops all entries and resets statistics.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.subjects.clear();
        self.stats = CacheStats::new();
    }

    // == Sweep Support ==
    /// Rendered keys of entries that have already expired.
    ///
    /// The background sweep snapshots this under a read lock, then removes
    /// entries one at a time so the write lock is never held for a full
    /// table scan.
    pub fn expired_keys(&self) -> Vec<String> {
        let now = self.clock.now_ms();
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Removes one entry by rendered key, but only if it is still expired.
    ///
    /// Returns whether an entry was removed. The re-check covers the race
    /// where the entry was overwritten between snapshot and removal.
    pub fn remove_if_expired(&mut self, rendered: &str) -> bool {
        let now = self.clock.now_ms();
        let expired = self
            .entries
            .get(rendered)
            .is_some_and(|entry| entry.is_expired(now));
        if expired {
            self.remove_key(rendered);
        }
        expired
    }

    // == Length ==
    /// Current number of entries across all categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Internals ==
    /// Removes a victim to make room for an incoming entry of `category`.
    fn evict_one(&mut self, category: CacheCategory, now: u64) {
        let fair_share = CacheCategory::fair_share(self.capacity);
        let scope = eviction_scope(category, self.stats.entries.get(category), fair_share);

        let victim = match scope {
            Some(scoped) => select_victim(
                self.entries
                    .iter()
                    .filter(|(_, entry)| entry.category == scoped),
                now,
            ),
            None => select_victim(self.entries.iter(), now),
        };

        if let Some(rendered) = victim {
            self.remove_key(&rendered);
            self.stats.record_eviction();
        }
    }

    /// Removes an entry and keeps the subject index and counts in sync.
    fn remove_key(&mut self, rendered: &str) -> Option<CacheEntry> {
        let entry = self.entries.remove(rendered)?;
        self.stats.entries.decrement(entry.category);

        if let Some(subject) = &entry.subject {
            if let Some(keys) = self.subjects.get_mut(subject) {
                keys.remove(rendered);
                if keys.is_empty() {
                    self.subjects.remove(subject);
                }
            }
        }
        Some(entry)
    }
}
