//! Cache Entries
//!
//! Defines the stored record for a single cached permission set. Entries
//! never see the clock themselves; the store passes `now` in, so all time
//! reads stay behind one injectable source.

use std::collections::BTreeSet;

use crate::cache::CacheCategory;

/// A set of permission (or role) names.
///
/// Ordered so serialized output and test comparisons are deterministic.
pub type PermissionSet = BTreeSet<String>;

// == Cache Entry ==
/// A single cached permission set with its TTL and access metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached permission set
    pub value: PermissionSet,
    /// Tier this entry belongs to
    pub category: CacheCategory,
    /// Subject embedded in the key, if any (drives subject-wide invalidation)
    pub subject: Option<String>,
    /// Creation timestamp (Unix milliseconds); reset on overwrite
    pub created_at: u64,
    /// Last read or write timestamp (Unix milliseconds)
    pub last_accessed: u64,
    /// Time-to-live in milliseconds
    pub ttl_ms: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry timestamped at `now_ms`.
    pub fn new(
        value: PermissionSet,
        category: CacheCategory,
        subject: Option<String>,
        ttl_ms: u64,
        now_ms: u64,
    ) -> Self {
        Self {
            value,
            category,
            subject,
            created_at: now_ms,
            last_accessed: now_ms,
            ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now_ms`.
    ///
    /// Boundary condition: the entry is expired once the full TTL has
    /// elapsed, i.e. `now - created_at >= ttl_ms`.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at) >= self.ttl_ms
    }

    // == Remaining TTL ==
    /// Milliseconds of life left as of `now_ms`; zero once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        let expires_at = self.created_at.saturating_add(self.ttl_ms);
        expires_at.saturating_sub(now_ms)
    }

    // == Touch ==
    /// Marks the entry as accessed at `now_ms`.
    pub fn touch(&mut self, now_ms: u64) {
        self.last_accessed = now_ms;
    }
}
