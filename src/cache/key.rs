//! Cache Keys
//!
//! Structured composite keys, rendered deterministically to namespaced
//! strings for storage. Each category owns a distinct namespace, so two
//! logically different lookups can never collide on one rendered key.

use crate::cache::CacheCategory;

// == Cache Key ==
/// Composite lookup key, one variant per cache category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Effective permissions of one user
    UserPermissions { user_id: String },
    /// Permission set of one role definition
    RolePermissions { role_id: String },
    /// Grant matrix cell for a resource type and operation
    PermissionMatrix {
        resource_type: String,
        operation: String,
    },
    /// Ad-hoc decision for a subject and operation
    DynamicPermission {
        subject_id: String,
        operation: String,
    },
}

impl CacheKey {
    /// Category this key belongs to.
    pub fn category(&self) -> CacheCategory {
        match self {
            CacheKey::UserPermissions { .. } => CacheCategory::UserPermissions,
            CacheKey::RolePermissions { .. } => CacheCategory::RolePermissions,
            CacheKey::PermissionMatrix { .. } => CacheCategory::PermissionMatrix,
            CacheKey::DynamicPermission { .. } => CacheCategory::DynamicPermission,
        }
    }

    /// Subject embedded in this key, if any.
    ///
    /// Matrix cells are keyed by resource type and operation only, so they
    /// survive subject-wide invalidation.
    pub fn subject_id(&self) -> Option<&str> {
        match self {
            CacheKey::UserPermissions { user_id } => Some(user_id),
            CacheKey::RolePermissions { role_id } => Some(role_id),
            CacheKey::PermissionMatrix { .. } => None,
            CacheKey::DynamicPermission { subject_id, .. } => Some(subject_id),
        }
    }

    /// Renders the key to its storage string.
    pub fn render(&self) -> String {
        match self {
            CacheKey::UserPermissions { user_id } => {
                format!("user:{}:permissions", user_id)
            }
            CacheKey::RolePermissions { role_id } => {
                format!("role:{}:permissions", role_id)
            }
            CacheKey::PermissionMatrix {
                resource_type,
                operation,
            } => format!("matrix:{}:{}", resource_type, operation),
            CacheKey::DynamicPermission {
                subject_id,
                operation,
            } => format!("dynamic:{}:{}", subject_id, operation),
        }
    }
}
