//! Cache Categories
//!
//! The four tiers of the permission cache, each with its own default TTL
//! and a fair share of the total capacity for scoped eviction.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// == Cache Category ==
/// Tier of a cached entry.
///
/// Long-lived tiers (the permission matrix) get long TTLs and are shielded
/// from eviction churn caused by short-lived tiers (dynamic checks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheCategory {
    /// Effective permissions resolved for a single user
    UserPermissions,
    /// Permissions attached to a role definition
    RolePermissions,
    /// Resource-type/operation grant matrix
    PermissionMatrix,
    /// Ad-hoc permission decisions
    DynamicPermission,
}

impl CacheCategory {
    /// All categories, in stats/reporting order.
    pub const ALL: [CacheCategory; 4] = [
        CacheCategory::UserPermissions,
        CacheCategory::RolePermissions,
        CacheCategory::PermissionMatrix,
        CacheCategory::DynamicPermission,
    ];

    /// Default TTL for entries of this category.
    ///
    /// User permissions change on role assignment (minutes of staleness is
    /// acceptable), role definitions and the matrix change rarely, dynamic
    /// decisions go stale almost immediately.
    pub fn default_ttl(&self) -> Duration {
        match self {
            CacheCategory::UserPermissions => Duration::from_secs(5 * 60),
            CacheCategory::RolePermissions => Duration::from_secs(30 * 60),
            CacheCategory::PermissionMatrix => Duration::from_secs(60 * 60),
            CacheCategory::DynamicPermission => Duration::from_secs(60),
        }
    }

    /// Fair share of a cache with `capacity` total slots.
    ///
    /// An equal split across the four categories, never below one slot.
    pub fn fair_share(capacity: usize) -> usize {
        (capacity / Self::ALL.len()).max(1)
    }

    /// Stable name used in routes and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheCategory::UserPermissions => "user_permissions",
            CacheCategory::RolePermissions => "role_permissions",
            CacheCategory::PermissionMatrix => "permission_matrix",
            CacheCategory::DynamicPermission => "dynamic_permission",
        }
    }
}

impl fmt::Display for CacheCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user_permissions" => Ok(CacheCategory::UserPermissions),
            "role_permissions" => Ok(CacheCategory::RolePermissions),
            "permission_matrix" => Ok(CacheCategory::PermissionMatrix),
            "dynamic_permission" => Ok(CacheCategory::DynamicPermission),
            other => Err(format!("Unknown cache category: {}", other)),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls() {
        assert_eq!(
            CacheCategory::UserPermissions.default_ttl(),
            Duration::from_secs(300)
        );
        assert_eq!(
            CacheCategory::RolePermissions.default_ttl(),
            Duration::from_secs(1800)
        );
        assert_eq!(
            CacheCategory::PermissionMatrix.default_ttl(),
            Duration::from_secs(3600)
        );
        assert_eq!(
            CacheCategory::DynamicPermission.default_ttl(),
            Duration::from_secs(60)
        );
    }

    #[test]
    fn test_fair_share_even_split() {
        assert_eq!(CacheCategory::fair_share(1000), 250);
        assert_eq!(CacheCategory::fair_share(4), 1);
    }

    #[test]
    fn test_fair_share_never_zero() {
        assert_eq!(CacheCategory::fair_share(2), 1);
        assert_eq!(CacheCategory::fair_share(0), 1);
    }

    #[test]
    fn test_round_trip_names() {
        for category in CacheCategory::ALL {
            let parsed: CacheCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        assert!("permissions".parse::<CacheCategory>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&CacheCategory::PermissionMatrix).unwrap();
        assert_eq!(json, r#""permission_matrix""#);
        let back: CacheCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CacheCategory::PermissionMatrix);
    }
}
