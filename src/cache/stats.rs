//! Cache Statistics
//!
//! Hit/miss/eviction counters plus live entry counts per category.

use serde::Serialize;

use crate::cache::CacheCategory;

// == Category Counts ==
/// Live entry count for each cache tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub user_permissions: usize,
    pub role_permissions: usize,
    pub permission_matrix: usize,
    pub dynamic_permission: usize,
}

impl CategoryCounts {
    fn slot(&mut self, category: CacheCategory) -> &mut usize {
        match category {
            CacheCategory::UserPermissions => &mut self.user_permissions,
            CacheCategory::RolePermissions => &mut self.role_permissions,
            CacheCategory::PermissionMatrix => &mut self.permission_matrix,
            CacheCategory::DynamicPermission => &mut self.dynamic_permission,
        }
    }

    /// Count for one category.
    pub fn get(&self, category: CacheCategory) -> usize {
        match category {
            CacheCategory::UserPermissions => self.user_permissions,
            CacheCategory::RolePermissions => self.role_permissions,
            CacheCategory::PermissionMatrix => self.permission_matrix,
            CacheCategory::DynamicPermission => self.dynamic_permission,
        }
    }

    /// Sum over all categories.
    pub fn total(&self) -> usize {
        self.user_permissions
            + self.role_permissions
            + self.permission_matrix
            + self.dynamic_permission
    }

    pub(crate) fn increment(&mut self, category: CacheCategory) {
        *self.slot(category) += 1;
    }

    pub(crate) fn decrement(&mut self, category: CacheCategory) {
        let slot = self.slot(category);
        *slot = slot.saturating_sub(1);
    }
}

// == Cache Stats ==
/// Cache performance counters.
///
/// Mutated on every read and write; reset only on explicit request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Successful lookups of live entries
    pub hits: u64,
    /// Lookups that found nothing, or only an expired entry
    pub misses: u64,
    /// Entries removed by capacity pressure
    pub evictions: u64,
    /// Live entries per category
    pub entries: CategoryCounts,
}

impl CacheStats {
    /// Creates stats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total live entries across all categories.
    pub fn total_entries(&self) -> usize {
        self.entries.total()
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Reset ==
    /// Zeroes the hit/miss/eviction counters, leaving entry counts alone.
    pub fn reset(&mut self) {
        self.hits = 0;
        self.misses = 0;
        self.evictions = 0;
    }
}
