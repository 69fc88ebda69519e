//! Shared fixtures for unit tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::view::ViewExtent;

/// A fixed 1280x720 surface at DPR 1, so test expectations stay literal.
pub fn test_extent() -> ViewExtent {
    ViewExtent {
        width: 1280.0,
        height: 720.0,
        dpr: 1.0,
    }
}

/// Deterministic RNG for reproducible population fixtures.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
