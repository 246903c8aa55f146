//! Eviction Policy
//!
//! Victim selection under capacity pressure. Eviction is least-recently-used,
//! scoped to the incoming entry's category while that category holds at least
//! its fair share of the cache; otherwise the globally least-recent entry
//! goes. Entries tied on last-access time lose by smaller remaining TTL (they
//! were about to expire anyway).

use crate::cache::{CacheCategory, CacheEntry};

// == Scope Selection ==
/// Decides which candidates are eligible for eviction.
///
/// Returns `Some(category)` to restrict eviction to the incoming category,
/// `None` to consider the whole cache. Scoping to the incoming category
/// protects long-TTL tiers from churn in short-TTL tiers: a flood of dynamic
/// checks evicts other dynamic checks, not the permission matrix.
pub fn eviction_scope(
    incoming: CacheCategory,
    category_len: usize,
    fair_share: usize,
) -> Option<CacheCategory> {
    if category_len >= fair_share {
        Some(incoming)
    } else {
        None
    }
}

// == Victim Selection ==
/// Picks the rendered key to evict from `candidates`, or `None` if empty.
///
/// Ordering: smallest `last_accessed` first, then smallest remaining TTL,
/// then the rendered key itself so selection is deterministic regardless of
/// map iteration order.
pub fn select_victim<'a, I>(candidates: I, now_ms: u64) -> Option<String>
where
    I: Iterator<Item = (&'a String, &'a CacheEntry)>,
{
    candidates
        .min_by_key(|(key, entry)| {
            (
                entry.last_accessed,
                entry.ttl_remaining_ms(now_ms),
                key.as_str(),
            )
        })
        .map(|(key, _)| key.clone())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::PermissionSet;
    use std::collections::HashMap;

    fn entry(category: CacheCategory, created: u64, accessed: u64, ttl: u64) -> CacheEntry {
        let mut e = CacheEntry::new(PermissionSet::new(), category, None, ttl, created);
        e.last_accessed = accessed;
        e
    }

    fn map(entries: Vec<(&str, CacheEntry)>) -> HashMap<String, CacheEntry> {
        entries
            .into_iter()
            .map(|(k, e)| (k.to_string(), e))
            .collect()
    }

    #[test]
    fn test_scope_category_at_fair_share() {
        let scope = eviction_scope(CacheCategory::UserPermissions, 2, 2);
        assert_eq!(scope, Some(CacheCategory::UserPermissions));
    }

    #[test]
    fn test_scope_global_when_under_share() {
        assert_eq!(eviction_scope(CacheCategory::UserPermissions, 1, 2), None);
    }

    #[test]
    fn test_select_victim_empty() {
        let entries: HashMap<String, CacheEntry> = HashMap::new();
        assert_eq!(select_victim(entries.iter(), 0), None);
    }

    #[test]
    fn test_select_victim_least_recently_used() {
        let entries = map(vec![
            ("a", entry(CacheCategory::UserPermissions, 0, 100, 10_000)),
            ("b", entry(CacheCategory::UserPermissions, 0, 50, 10_000)),
            ("c", entry(CacheCategory::UserPermissions, 0, 200, 10_000)),
        ]);

        assert_eq!(select_victim(entries.iter(), 300), Some("b".to_string()));
    }

    #[test]
    fn test_tie_breaks_on_remaining_ttl() {
        // Equal last-access: the entry closer to expiry goes first
        let entries = map(vec![
            ("long", entry(CacheCategory::UserPermissions, 0, 100, 10_000)),
            ("short", entry(CacheCategory::UserPermissions, 0, 100, 1_000)),
        ]);

        assert_eq!(
            select_victim(entries.iter(), 500),
            Some("short".to_string())
        );
    }

    #[test]
    fn test_full_tie_is_deterministic() {
        let entries = map(vec![
            ("b", entry(CacheCategory::UserPermissions, 0, 100, 1_000)),
            ("a", entry(CacheCategory::UserPermissions, 0, 100, 1_000)),
        ]);

        assert_eq!(select_victim(entries.iter(), 500), Some("a".to_string()));
    }

    #[test]
    fn test_recency_beats_ttl() {
        // LRU order dominates; TTL only decides ties
        let entries = map(vec![
            ("old_long", entry(CacheCategory::UserPermissions, 0, 10, 60_000)),
            ("new_short", entry(CacheCategory::UserPermissions, 0, 500, 100)),
        ]);

        assert_eq!(
            select_victim(entries.iter(), 600),
            Some("old_long".to_string())
        );
    }
}
