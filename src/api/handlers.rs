//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint. The handlers are
//! a thin shell: they build structured keys from request DTOs and call the
//! store under the shared lock. Read-through stays the caller's job; a
//! lookup miss is a 404, never a fetch.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{CacheCategory, PermissionCache, PermissionSet};
use crate::error::{CacheError, Result};
use crate::models::{
    HealthResponse, InvalidateResponse, KeyRequest, LookupResponse, SetRequest, SetResponse,
    StatsResponse,
};

/// Application state shared across all handlers.
///
/// The cache store behind a single lock; per-key linearizability of all
/// operations follows from it.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<PermissionCache>>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: PermissionCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(PermissionCache::new(config.max_entries))
    }
}

/// Handler for PUT /set
///
/// Populates or overwrites one cache entry, optionally with a TTL override
/// in milliseconds.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    let key = req.key.into_key().map_err(CacheError::InvalidRequest)?;
    let value: PermissionSet = req.permissions.into_iter().collect();
    let ttl_override = req.ttl_ms.map(Duration::from_millis);

    let mut cache = state.cache.write().await;
    cache.set(&key, value, ttl_override);

    Ok(Json(SetResponse::new(key.render())))
}

/// Handler for POST /get
///
/// Looks up one entry. Composite keys don't path-encode cleanly, so the
/// key arrives as a body. A write lock is needed: a hit refreshes the
/// entry's last-access time and a miss bumps the counters.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<LookupResponse>> {
    let key = req.into_key().map_err(CacheError::InvalidRequest)?;

    let mut cache = state.cache.write().await;
    match cache.get(&key) {
        Some(value) => Ok(Json(LookupResponse::new(
            key.render(),
            value.into_iter().collect(),
        ))),
        None => Err(CacheError::NotFound(key.render())),
    }
}

/// Handler for POST /del
///
/// Invalidates one entry. Idempotent: invalidating an absent entry
/// succeeds.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<InvalidateResponse>> {
    let key = req.into_key().map_err(CacheError::InvalidRequest)?;

    let mut cache = state.cache.write().await;
    cache.invalidate(&key);

    Ok(Json(InvalidateResponse::new(key.render())))
}

/// Handler for DELETE /subject/:subject_id
///
/// Drops every entry for one subject across all categories, the hook for
/// "this user's permissions or roles changed".
pub async fn invalidate_subject_handler(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
) -> Json<InvalidateResponse> {
    let mut cache = state.cache.write().await;
    cache.invalidate_subject(&subject_id);

    Json(InvalidateResponse::new(subject_id))
}

/// Handler for DELETE /category/:category
///
/// Clears one cache tier, the hook for "a role definition changed,
/// forget every cached role permission set".
pub async fn invalidate_category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<InvalidateResponse>> {
    let category = CacheCategory::from_str(&category).map_err(CacheError::InvalidRequest)?;

    let mut cache = state.cache.write().await;
    cache.invalidate_category(category);

    Ok(Json(InvalidateResponse::new(category.as_str())))
}

/// Handler for POST /clear
///
/// Drops all entries and resets statistics.
pub async fn clear_handler(State(state): State<AppState>) -> Json<InvalidateResponse> {
    let mut cache = state.cache.write().await;
    cache.clear();

    Json(InvalidateResponse::new("all"))
}

/// Handler for GET /stats
///
/// Returns a statistics snapshot; reading stats never mutates them.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::from_stats(&stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
