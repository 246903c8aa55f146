//! Permcache - An in-memory permission cache service
//!
//! Caches resolved permission data (user permissions, role permission sets,
//! the grant matrix, ad-hoc decisions) in four tiers with distinct TTLs,
//! fair-share LRU eviction and layered invalidation. The store itself is a
//! pure synchronous structure; the service layer exposes it over HTTP for
//! the permission-checking and administrative collaborators.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheCategory, CacheKey, CacheStats, PermissionCache, PermissionSet};
pub use config::Config;
pub use tasks::spawn_sweep_task;
