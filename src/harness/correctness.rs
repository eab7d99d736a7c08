use std::fmt;

use log::{debug, info, warn};

use crate::harness::lanes_u64;
use crate::simd::scalar::Scalar;
use crate::simd::traits::{Backend, LaneVector};
use crate::simd::types::{U16x8, U32x2, U32x4, U64x1, U64x2};

/// Outcome of one fixed test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseRecord {
    pub op: &'static str,
    pub name: &'static str,
    pub a: Vec<u64>,
    pub b: Vec<u64>,
    pub expected: Vec<u64>,
    pub actual: Vec<u64>,
}

impl CaseRecord {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

impl fmt::Display for CaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {:?} op {:?} = {:?}",
            if self.passed() { "ok" } else { "FAIL" },
            self.op,
            self.name,
            self.a,
            self.b,
            self.actual
        )?;

        if !self.passed() {
            write!(f, " (expected {:?})", self.expected)?;
        }

        Ok(())
    }
}

/// All case records for one backend.
#[derive(Clone, Debug)]
pub struct CorrectnessReport {
    pub backend: &'static str,
    pub records: Vec<CaseRecord>,
}

impl CorrectnessReport {
    pub fn passed(&self) -> usize {
        self.records.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.passed()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseRecord> {
        self.records.iter().filter(|r| !r.passed())
    }
}

impl fmt::Display for CorrectnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correctness ({} backend)", self.backend)?;
        for record in &self.records {
            writeln!(f, "  {record}")?;
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

fn record<V>(op: &'static str, name: &'static str, a: V, b: V, actual: V, expected: V) -> CaseRecord
where
    V: LaneVector,
    V::Lane: Into<u64>,
{
    let record = CaseRecord {
        op,
        name,
        a: lanes_u64(&a),
        b: lanes_u64(&b),
        expected: lanes_u64(&expected),
        actual: lanes_u64(&actual),
    };

    if record.passed() {
        debug!("{record}");
    } else {
        warn!("{record}");
    }

    record
}

const U16_MAX: u16 = u16::MAX;
const U32_MAX: u32 = u32::MAX;
const U64_MAX: u64 = u64::MAX;

pub const VADDQ_U16_CASES: [(&str, [u16; 8], [u16; 8]); 4] = [
    (
        "regular",
        [1, 2, 3, 4, 5, 6, 7, 8],
        [8, 7, 6, 5, 4, 3, 2, 1],
    ),
    ("all zeros", [0; 8], [0; 8]),
    ("wraps at max", [U16_MAX; 8], [1, 2, 3, 4, 5, 6, 7, 8]),
    (
        "mixed",
        [30000, 40000, 0, U16_MAX, 12345, 1, 32768, 65000],
        [40000, 30000, U16_MAX, 0, 54321, 1, 32768, 536],
    ),
];

pub const VHADD_U32_CASES: [(&str, [u32; 2], [u32; 2]); 4] = [
    ("odd sums floor", [1, 3], [2, 4]),
    ("all zeros", [0, 0], [0, 0]),
    ("max plus max", [U32_MAX, U32_MAX], [U32_MAX, U32_MAX]),
    ("max plus one", [U32_MAX, 1], [1, U32_MAX]),
];

pub const VQADDQ_U32_CASES: [(&str, [u32; 4], [u32; 4]); 4] = [
    ("regular", [1, 2, 3, 4], [4, 3, 2, 1]),
    ("all zeros", [0; 4], [0; 4]),
    ("saturates at max", [U32_MAX; 4], [1, 2, U32_MAX, 0]),
    (
        "just below max",
        [U32_MAX - 1, U32_MAX - 2, 2_147_483_648, 5000],
        [1, 1, 2_147_483_648, 5000],
    ),
];

pub const VSUBQ_U64_CASES: [(&str, [u64; 2], [u64; 2]); 4] = [
    ("regular", [10, 5000], [3, 4999]),
    ("zero minus one wraps", [0, 0], [1, 1]),
    ("max minus max", [U64_MAX, U64_MAX], [U64_MAX, 0]),
    (
        "large",
        [5_000_000_000_000_000_000, 1],
        [18_446_744_073_709_551_606, U64_MAX],
    ),
];

/// Inputs of the single-lane 64-bit add table. Every case adds 1.
pub const VADD_U64_CASES: [(&str, u64); 5] = [
    ("regular positive number", 6),
    ("all zeros", 0),
    ("maximum value", U64_MAX),
    ("large positive number", 5_000_000_000_000_000_000),
    ("all ones", 1),
];

/// First operands of the two-lane 64-bit add table. The second operand is always `{1, 2}`.
pub const VADDQ_U64_CASES: [(&str, [u64; 2]); 8] = [
    ("regular positive numbers", [1, 2]),
    ("all zeros", [0, 0]),
    ("near max", [U64_MAX, U64_MAX - 1]),
    ("maximum value", [U64_MAX, U64_MAX]),
    ("minimum value", [0, 0]),
    ("max and min", [U64_MAX, 0]),
    ("mixed", [5000, 18_446_744_073_709_551_606]),
    ("all ones", [1, 1]),
];

pub const VADDQ_U64_RHS: [u64; 2] = [1, 2];

/// Runs every fixed case through `B` and checks it against the scalar reference.
pub fn run_correctness<B: Backend>() -> CorrectnessReport {
    let mut records = Vec::new();

    for (name, a, b) in VADDQ_U16_CASES {
        let (a, b) = (U16x8(a), U16x8(b));
        let (actual, expected) = (B::vaddq_u16(a, b), Scalar::vaddq_u16(a, b));
        records.push(record("vaddq_u16", name, a, b, actual, expected));
    }

    for (name, a, b) in VHADD_U32_CASES {
        let (a, b) = (U32x2(a), U32x2(b));
        let (actual, expected) = (B::vhadd_u32(a, b), Scalar::vhadd_u32(a, b));
        records.push(record("vhadd_u32", name, a, b, actual, expected));
    }

    for (name, a, b) in VQADDQ_U32_CASES {
        let (a, b) = (U32x4(a), U32x4(b));
        let (actual, expected) = (B::vqaddq_u32(a, b), Scalar::vqaddq_u32(a, b));
        records.push(record("vqaddq_u32", name, a, b, actual, expected));
    }

    for (name, a, b) in VSUBQ_U64_CASES {
        let (a, b) = (U64x2(a), U64x2(b));
        let (actual, expected) = (B::vsubq_u64(a, b), Scalar::vsubq_u64(a, b));
        records.push(record("vsubq_u64", name, a, b, actual, expected));
    }

    for (name, a) in VADD_U64_CASES {
        let (a, b) = (U64x1([a]), U64x1([1]));
        let (actual, expected) = (B::vadd_u64(a, b), Scalar::vadd_u64(a, b));
        records.push(record("vadd_u64", name, a, b, actual, expected));
    }

    for (name, a) in VADDQ_U64_CASES {
        let (a, b) = (U64x2(a), U64x2(VADDQ_U64_RHS));
        let (actual, expected) = (B::vaddq_u64(a, b), Scalar::vaddq_u64(a, b));
        records.push(record("vaddq_u64", name, a, b, actual, expected));
    }

    let report = CorrectnessReport {
        backend: B::NAME,
        records,
    };

    info!(
        "correctness on {}: {} passed, {} failed",
        report.backend,
        report.passed(),
        report.failed()
    );

    report
}
