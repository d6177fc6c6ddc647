//! Utility helpers shared across the crate.

pub mod parallel;
pub mod serialization;

pub use parallel::{parallelism_enabled, preferred_chunk_size, set_parallelism, ParallelismGuard};
