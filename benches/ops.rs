use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(target_arch = "aarch64")]
use rhal::simd::neon::Neon;
use rhal::simd::rvv::Rvv;
use rhal::simd::scalar::Scalar;
use rhal::{Backend, U16x8, U32x2, U32x4, U64x1, U64x2};

// One group per operation, every backend available on this target inside it.
macro_rules! bench_op {
    ($c:expr, $rng:expr, $op:ident, $ty:ident) => {{
        let a = $ty($rng.random());
        let b = $ty($rng.random());

        let mut group = $c.benchmark_group(stringify!($op));

        group.bench_function("scalar", |bencher| {
            bencher.iter(|| black_box(Scalar::$op(black_box(a), black_box(b))))
        });

        group.bench_function("rvv", |bencher| {
            bencher.iter(|| black_box(Rvv::$op(black_box(a), black_box(b))))
        });

        #[cfg(target_arch = "aarch64")]
        group.bench_function("neon", |bencher| {
            bencher.iter(|| black_box(Neon::$op(black_box(a), black_box(b))))
        });

        group.finish();
    }};
}

fn bench_ops(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);

    bench_op!(c, rng, vaddq_u16, U16x8);
    bench_op!(c, rng, vhadd_u32, U32x2);
    bench_op!(c, rng, vqaddq_u32, U32x4);
    bench_op!(c, rng, vsubq_u64, U64x2);
    bench_op!(c, rng, vadd_u64, U64x1);
    bench_op!(c, rng, vaddq_u64, U64x2);
}

criterion_group!(benches, bench_ops);

criterion_main!(benches);
