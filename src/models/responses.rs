//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, CategoryCounts};

/// Response body for a successful lookup (POST /get)
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    /// Rendered form of the requested key
    pub key: String,
    /// The cached permission names, in sorted order
    pub permissions: Vec<String>,
}

impl LookupResponse {
    /// Creates a new LookupResponse
    pub fn new(key: impl Into<String>, permissions: Vec<String>) -> Self {
        Self {
            key: key.into(),
            permissions,
        }
    }
}

/// Response body for the SET operation (PUT /set)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// Rendered form of the key that was populated
    pub key: String,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Entry '{}' cached successfully", key),
            key,
        }
    }
}

/// Response body for invalidation operations
/// (POST /del, DELETE /subject/:id, DELETE /category/:category, POST /clear)
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Success message
    pub message: String,
    /// What was invalidated: a rendered key, a subject id, a category name,
    /// or "all"
    pub target: String,
}

impl InvalidateResponse {
    /// Creates a new InvalidateResponse
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            message: format!("Invalidated '{}'", target),
            target,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Live entries per category
    pub entries: CategoryCounts,
    /// Total live entries across categories
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a stats snapshot
    pub fn from_stats(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            entries: stats.entries,
            total_entries: stats.total_entries(),
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
