//! Process-wide switch for the `parallel` feature.
//!
//! With the feature enabled, tree construction hashes leaves and folds layers
//! on the rayon pool unless parallelism has been switched off through
//! [`set_parallelism`]. Both paths produce identical layers.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
static PARALLEL_ENABLED: AtomicBool = AtomicBool::new(true);

/// Below this many items per layer the sequential path is used.
pub const PARALLEL_THRESHOLD: usize = 256;

const DEFAULT_CHUNK_SIZE: usize = 64;

pub fn preferred_chunk_size(total_items: usize) -> usize {
    if total_items == 0 {
        1
    } else {
        DEFAULT_CHUNK_SIZE.min(total_items)
    }
}

#[cfg(feature = "parallel")]
pub fn parallelism_enabled() -> bool {
    PARALLEL_ENABLED.load(Ordering::SeqCst)
}

#[cfg(not(feature = "parallel"))]
pub fn parallelism_enabled() -> bool {
    false
}

/// Returns whether a layer of `len` items should be processed in parallel.
pub fn use_parallel(len: usize) -> bool {
    len >= PARALLEL_THRESHOLD && parallelism_enabled()
}

/// Overrides the switch until the returned guard is dropped.
#[cfg(feature = "parallel")]
pub fn set_parallelism(enabled: bool) -> ParallelismGuard {
    let previous = PARALLEL_ENABLED.swap(enabled, Ordering::SeqCst);
    ParallelismGuard { previous }
}

#[cfg(not(feature = "parallel"))]
pub fn set_parallelism(_enabled: bool) -> ParallelismGuard {
    ParallelismGuard {}
}

#[must_use = "parallelism reverts when the guard is dropped"]
pub struct ParallelismGuard {
    #[cfg(feature = "parallel")]
    previous: bool,
}

#[cfg(feature = "parallel")]
impl Drop for ParallelismGuard {
    fn drop(&mut self) {
        PARALLEL_ENABLED.store(self.previous, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_size_is_bounded() {
        assert_eq!(preferred_chunk_size(0), 1);
        assert_eq!(preferred_chunk_size(10), 10);
        assert_eq!(preferred_chunk_size(10_000), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn small_layers_stay_sequential() {
        assert!(!use_parallel(PARALLEL_THRESHOLD - 1));
    }

    #[test]
    fn guard_disables_parallelism() {
        let _guard = set_parallelism(false);
        assert!(!parallelism_enabled());
        assert!(!use_parallel(1 << 16));
    }
}
