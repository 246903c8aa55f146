//! Request DTOs for the cache service API
//!
//! Composite cache keys arrive as JSON bodies; the fields required depend
//! on the category, so key construction doubles as request validation.

use serde::Deserialize;

use crate::cache::{CacheCategory, CacheKey};

/// Maximum length of a single key identifier in bytes.
pub const MAX_IDENT_LENGTH: usize = 128;

// == Key Request ==
/// Composite key as sent by clients.
///
/// Which fields are required depends on `category`:
/// - `user_permissions` / `role_permissions`: `subject_id`
/// - `permission_matrix`: `resource_type` and `operation`
/// - `dynamic_permission`: `subject_id` and `operation`
#[derive(Debug, Clone, Deserialize)]
pub struct KeyRequest {
    /// Cache tier the key belongs to
    pub category: CacheCategory,
    /// User, role or subject identifier
    #[serde(default)]
    pub subject_id: Option<String>,
    /// Resource type for matrix cells
    #[serde(default)]
    pub resource_type: Option<String>,
    /// Operation for matrix cells and dynamic decisions
    #[serde(default)]
    pub operation: Option<String>,
}

impl KeyRequest {
    /// Builds the structured cache key, or an error message for the 400
    /// response.
    pub fn into_key(self) -> Result<CacheKey, String> {
        let key = match self.category {
            CacheCategory::UserPermissions => CacheKey::UserPermissions {
                user_id: require(self.subject_id, "subject_id")?,
            },
            CacheCategory::RolePermissions => CacheKey::RolePermissions {
                role_id: require(self.subject_id, "subject_id")?,
            },
            CacheCategory::PermissionMatrix => CacheKey::PermissionMatrix {
                resource_type: require(self.resource_type, "resource_type")?,
                operation: require(self.operation, "operation")?,
            },
            CacheCategory::DynamicPermission => CacheKey::DynamicPermission {
                subject_id: require(self.subject_id, "subject_id")?,
                operation: require(self.operation, "operation")?,
            },
        };
        Ok(key)
    }
}

/// Validates one identifier field.
///
/// Identifiers may not contain ':' because it is the rendered-key
/// separator; allowing it would let two distinct matrix cells collide.
fn require(field: Option<String>, name: &str) -> Result<String, String> {
    let value = field.ok_or_else(|| format!("Missing field: {}", name))?;
    if value.is_empty() {
        return Err(format!("Field cannot be empty: {}", name));
    }
    if value.len() > MAX_IDENT_LENGTH {
        return Err(format!(
            "Field {} exceeds maximum length of {} bytes",
            name, MAX_IDENT_LENGTH
        ));
    }
    if value.contains(':') {
        return Err(format!("Field {} must not contain ':'", name));
    }
    Ok(value)
}

// == Set Request ==
/// Request body for the SET operation (PUT /set)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The key to populate
    #[serde(flatten)]
    pub key: KeyRequest,
    /// Permission (or role) names to cache
    pub permissions: Vec<String>,
    /// Optional TTL override in milliseconds (category default if absent)
    #[serde(default)]
    pub ttl_ms: Option<u64>,
}
