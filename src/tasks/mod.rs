//! Background Tasks Module
//!
//! Contains background tasks that run periodically during service
//! operation.
//!
//! # Tasks
//! - TTL Sweep: Removes expired cache entries at configured intervals

mod cleanup;

pub use cleanup::spawn_sweep_task;
