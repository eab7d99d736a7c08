//! Seeded random sweep comparing one backend with another, lane for lane.
//!
//! Each sample draws its own `StdRng` from the sweep seed and its index. The sweep is
//! therefore reproducible no matter how rayon splits the work.

use log::{info, warn};
use num::traits::PrimInt;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::{verification_error, Result};
use crate::harness::config::HarnessConfig;
use crate::harness::lanes_u64;
use crate::simd::scalar::Scalar;
use crate::simd::traits::{Backend, LaneVector};
use crate::simd::types::{U16x8, U32x2, U32x4, U64x1, U64x2};

/// A vector pair on which two backends disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub op: &'static str,
    pub backend: &'static str,
    pub reference: &'static str,
    pub sample: usize,
    pub a: Vec<u64>,
    pub b: Vec<u64>,
    pub expected: Vec<u64>,
    pub actual: Vec<u64>,
}

/// Draws a lane, biased towards the values where wrapping and saturation kick in.
fn random_lane<T>(rng: &mut StdRng) -> T
where
    T: PrimInt,
    StandardUniform: Distribution<T>,
{
    match rng.random_range(0..8u8) {
        0 => T::zero(),
        1 => T::one(),
        2 => T::max_value() - T::one(),
        3 => T::max_value(),
        _ => rng.random(),
    }
}

fn random_vector<V>(rng: &mut StdRng) -> V
where
    V: LaneVector,
    V::Lane: PrimInt,
    StandardUniform: Distribution<V::Lane>,
{
    let mut v = V::default();
    for lane in v.lanes_mut() {
        *lane = random_lane(rng);
    }
    v
}

fn sample_rng(seed: u64, sample: usize) -> StdRng {
    // splitmix64 step, so neighbouring samples get unrelated streams
    let mut z = seed.wrapping_add((sample as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    StdRng::seed_from_u64(z ^ (z >> 31))
}

struct Comparison<'a> {
    backend: &'static str,
    reference: &'static str,
    sample: usize,
    mismatches: &'a mut Vec<Mismatch>,
}

impl Comparison<'_> {
    fn check<V, F, G>(&mut self, op: &'static str, a: V, b: V, actual: F, expected: G)
    where
        V: LaneVector,
        V::Lane: Into<u64>,
        F: Fn(V, V) -> V,
        G: Fn(V, V) -> V,
    {
        let (got, want) = (actual(a, b), expected(a, b));

        if got != want {
            self.mismatches.push(Mismatch {
                op,
                backend: self.backend,
                reference: self.reference,
                sample: self.sample,
                a: lanes_u64(&a),
                b: lanes_u64(&b),
                expected: lanes_u64(&want),
                actual: lanes_u64(&got),
            });
        }
    }
}

fn check_sample<B: Backend, R: Backend>(seed: u64, sample: usize) -> Vec<Mismatch> {
    let mut rng = sample_rng(seed, sample);
    let mut mismatches = Vec::new();

    let mut cmp = Comparison {
        backend: B::NAME,
        reference: R::NAME,
        sample,
        mismatches: &mut mismatches,
    };

    let (a, b): (U16x8, U16x8) = (random_vector(&mut rng), random_vector(&mut rng));
    cmp.check("vaddq_u16", a, b, B::vaddq_u16, R::vaddq_u16);

    let (a, b): (U32x2, U32x2) = (random_vector(&mut rng), random_vector(&mut rng));
    cmp.check("vhadd_u32", a, b, B::vhadd_u32, R::vhadd_u32);

    let (a, b): (U32x4, U32x4) = (random_vector(&mut rng), random_vector(&mut rng));
    cmp.check("vqaddq_u32", a, b, B::vqaddq_u32, R::vqaddq_u32);

    let (a, b): (U64x2, U64x2) = (random_vector(&mut rng), random_vector(&mut rng));
    cmp.check("vsubq_u64", a, b, B::vsubq_u64, R::vsubq_u64);
    cmp.check("vaddq_u64", a, b, B::vaddq_u64, R::vaddq_u64);

    let (a, b): (U64x1, U64x1) = (random_vector(&mut rng), random_vector(&mut rng));
    cmp.check("vadd_u64", a, b, B::vadd_u64, R::vadd_u64);

    mismatches
}

/// Runs `config.samples` random vector pairs per operation through `B` and `R` in parallel
/// and returns every disagreement, ordered by sample.
pub fn sweep<B: Backend, R: Backend>(config: &HarnessConfig) -> Vec<Mismatch> {
    let seed = config.seed;

    let mismatches: Vec<Mismatch> = (0..config.samples)
        .into_par_iter()
        .flat_map_iter(|sample| check_sample::<B, R>(seed, sample))
        .collect();

    for m in mismatches.iter().take(16) {
        warn!(
            "{} sample {}: {} gave {:?}, {} gave {:?} for {:?}, {:?}",
            m.op, m.sample, m.backend, m.actual, m.reference, m.expected, m.a, m.b
        );
    }

    info!(
        "sweep {} vs {}: {} samples, seed {:#x}, {} mismatches",
        B::NAME,
        R::NAME,
        config.samples,
        seed,
        mismatches.len()
    );

    mismatches
}

fn ensure_clean(mismatches: Vec<Mismatch>, what: &str) -> Result<()> {
    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(verification_error(mismatches.len(), what))
    }
}

/// Sweeps the active backend against the scalar reference. On aarch64 it also sweeps the
/// RVV backend against native Neon.
///
/// Returns the number of vector pairs checked.
pub fn verify_active(config: &HarnessConfig) -> Result<usize> {
    use crate::simd::ActiveBackend;

    let checked = config.samples;

    ensure_clean(
        sweep::<ActiveBackend, Scalar>(config),
        "active backend disagrees with the scalar reference",
    )?;

    #[cfg(target_arch = "aarch64")]
    let checked = {
        use crate::simd::{neon::Neon, rvv::Rvv};

        ensure_clean(
            sweep::<Rvv, Neon>(config),
            "rvv backend disagrees with native neon",
        )?;
        checked + config.samples
    };

    Ok(checked)
}
