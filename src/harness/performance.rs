use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use log::{debug, info};

use crate::harness::config::HarnessConfig;
use crate::harness::correctness::{VADDQ_U64_CASES, VADDQ_U64_RHS};
use crate::simd::traits::{Backend, LaneVector};
use crate::simd::types::U64x2;

/// Averaged timings for one case of the two-lane 64-bit add table.
#[derive(Clone, Debug)]
pub struct Timing {
    pub case: usize,
    pub name: &'static str,
    pub result: [u64; 2],
    /// Vector load, vector function and vector store together.
    pub round_trip: Duration,
    /// The vector function alone.
    pub op: Duration,
}

#[derive(Clone, Debug)]
pub struct PerformanceReport {
    pub backend: &'static str,
    pub started_at: DateTime<Local>,
    pub iterations: usize,
    pub timings: Vec<Timing>,
}

fn micros(d: Duration) -> f64 {
    d.as_secs_f64() * 1e6
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Performance ({} backend, {} iterations, started {})",
            self.backend,
            self.iterations,
            self.started_at.format("%Y-%m-%d %H:%M:%S")
        )?;

        for t in &self.timings {
            writeln!(
                f,
                "  {} vector function 'vaddq_u64' took {:.4} microseconds",
                self.backend,
                micros(t.op)
            )?;
            writeln!(
                f,
                "  Test case {} {{Vector load, Vector function, Vector store}} took {:.4} microseconds",
                t.case,
                micros(t.round_trip)
            )?;
        }

        Ok(())
    }
}

fn average(total: Duration, iterations: usize) -> Duration {
    total.div_f64(iterations.max(1) as f64)
}

/// Times `vaddq_u64` on `B` for every case of the two-lane add table.
pub fn run_performance<B: Backend>(config: &HarnessConfig) -> PerformanceReport {
    let started_at = Local::now();
    let iterations = config.iterations.max(1);
    let mut timings = Vec::with_capacity(VADDQ_U64_CASES.len());

    for (i, &(name, a)) in VADDQ_U64_CASES.iter().enumerate() {
        let mut result = [0u64; 2];

        let start = Instant::now();
        for _ in 0..iterations {
            // SAFETY: both sources and the destination hold two lanes.
            unsafe {
                let x = U64x2::load(black_box(a.as_ptr()));
                let y = U64x2::load(black_box(VADDQ_U64_RHS.as_ptr()));
                B::vaddq_u64(x, y).store_at(result.as_mut_ptr());
            }
            black_box(&mut result);
        }
        let round_trip = average(start.elapsed(), iterations);

        let x = U64x2(a);
        let y = U64x2(VADDQ_U64_RHS);
        let start = Instant::now();
        for _ in 0..iterations {
            black_box(B::vaddq_u64(black_box(x), black_box(y)));
        }
        let op = average(start.elapsed(), iterations);

        debug!(
            "case {} ({name}) on {}: {:.4} us round trip, {:.4} us op",
            i + 1,
            B::NAME,
            micros(round_trip),
            micros(op)
        );

        timings.push(Timing {
            case: i + 1,
            name,
            result,
            round_trip,
            op,
        });
    }

    info!(
        "performance on {}: {} cases x {} iterations",
        B::NAME,
        timings.len(),
        iterations
    );

    PerformanceReport {
        backend: B::NAME,
        started_at,
        iterations,
        timings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::rvv::Rvv;

    #[test]
    fn test_times_every_case_and_stores_results() {
        let config = HarnessConfig {
            iterations: 4,
            ..HarnessConfig::default()
        };
        let report = run_performance::<Rvv>(&config);

        assert_eq!(report.backend, "rvv");
        assert_eq!(report.iterations, 4);
        assert_eq!(report.timings.len(), VADDQ_U64_CASES.len());

        let cases: Vec<usize> = report.timings.iter().map(|t| t.case).collect();
        assert_eq!(cases, (1..=8).collect::<Vec<_>>());

        assert_eq!(report.timings[0].result, [2, 4]);
        assert_eq!(report.timings[3].result, [0, 1]);
        assert_eq!(report.timings[6].result, [5001, u64::MAX - 7]);
    }

    #[test]
    fn test_report_display() {
        let config = HarnessConfig {
            iterations: 1,
            ..HarnessConfig::default()
        };
        let shown = run_performance::<Rvv>(&config).to_string();

        assert!(shown.contains("Performance (rvv backend, 1 iterations"));
        assert!(shown.contains("Test case 8 {Vector load, Vector function, Vector store} took"));
        assert!(shown.contains("rvv vector function 'vaddq_u64' took"));
    }
}
