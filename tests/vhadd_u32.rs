//! Halving add: floor of the average, computed without overflow.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rhal::{vhadd_u32, U32x2};

#[test]
fn test_vhadd_u32_truncates() {
    assert_eq!(vhadd_u32(U32x2([1, 2]), U32x2([2, 3])), U32x2([1, 2]));
    assert_eq!(vhadd_u32(U32x2([0, 7]), U32x2([1, 0])), U32x2([0, 3]));
}

#[test]
fn test_vhadd_u32_at_the_top_of_the_range() {
    let a = U32x2([u32::MAX, u32::MAX]);
    let b = U32x2([u32::MAX, 1]);

    assert_eq!(vhadd_u32(a, b), U32x2([u32::MAX, 1 << 31]));
}

#[test]
fn test_vhadd_u32_matches_wide_reference() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..1000 {
        let a: [u32; 2] = rng.random();
        let b: [u32; 2] = rng.random();

        let result = vhadd_u32(U32x2(a), U32x2(b)).to_array();

        for i in 0..2 {
            let expected = ((u64::from(a[i]) + u64::from(b[i])) / 2) as u32;
            assert_eq!(result[i], expected, "lane {i}: ({} + {}) / 2", a[i], b[i]);
        }
    }
}
