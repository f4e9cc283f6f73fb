//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the process.
//!
//! # Tasks
//! - TTL Sweep: Removes expired cache entries at configured intervals

mod sweeper;

pub use sweeper::spawn_sweep_task;
