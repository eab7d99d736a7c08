//! Harnesses that exercise a backend: fixed correctness tables, call timing, and a seeded
//! random sweep against the scalar reference.

pub mod config;
pub mod correctness;
pub mod performance;
pub mod verify;

pub use config::{HarnessConfig, Mode};
pub use correctness::{run_correctness, CaseRecord, CorrectnessReport};
pub use performance::{run_performance, PerformanceReport, Timing};
pub use verify::{sweep, verify_active, Mismatch};

use crate::simd::traits::LaneVector;

/// Lanes widened to `u64`, for reports that mix vector types.
pub(crate) fn lanes_u64<V>(v: &V) -> Vec<u64>
where
    V: LaneVector,
    V::Lane: Into<u64>,
{
    v.lanes().iter().map(|&lane| lane.into()).collect()
}
