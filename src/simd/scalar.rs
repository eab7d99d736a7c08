//! Scalar reference backend.
//!
//! Computes every operation one lane at a time with ordinary integer arithmetic. The
//! harnesses compare the vector backends against it.

use num::traits::{AsPrimitive, PrimInt, SaturatingAdd, WrappingAdd, WrappingSub};

use crate::simd::traits::{Backend, LaneVector};
use crate::simd::types::{U16x8, U32x2, U32x4, U64x1, U64x2};

/// Reference implementation of [`Backend`] built on per-lane integer arithmetic.
#[derive(Copy, Clone, Debug, Default)]
pub struct Scalar;

#[inline(always)]
fn lanewise<V, F>(a: V, b: V, op: F) -> V
where
    V: LaneVector,
    F: Fn(V::Lane, V::Lane) -> V::Lane,
{
    let mut out = V::default();

    for ((o, x), y) in out.lanes_mut().iter_mut().zip(a.lanes()).zip(b.lanes()) {
        *o = op(*x, *y);
    }

    out
}

#[inline(always)]
pub fn wrapping_add<T: WrappingAdd>(a: T, b: T) -> T {
    a.wrapping_add(&b)
}

#[inline(always)]
pub fn wrapping_sub<T: WrappingSub>(a: T, b: T) -> T {
    a.wrapping_sub(&b)
}

#[inline(always)]
pub fn saturating_add<T: SaturatingAdd>(a: T, b: T) -> T {
    a.saturating_add(&b)
}

/// `floor((a + b) / 2)` with the sum formed in the wider type `W`.
#[inline(always)]
pub fn halving_add<T, W>(a: T, b: T) -> T
where
    T: PrimInt + AsPrimitive<W> + 'static,
    W: PrimInt + AsPrimitive<T> + 'static,
{
    let sum: W = a.as_() + b.as_();
    (sum >> 1).as_()
}

impl Backend for Scalar {
    const NAME: &'static str = "scalar";

    fn vaddq_u16(a: U16x8, b: U16x8) -> U16x8 {
        lanewise(a, b, wrapping_add)
    }

    fn vhadd_u32(a: U32x2, b: U32x2) -> U32x2 {
        lanewise(a, b, halving_add::<u32, u64>)
    }

    fn vqaddq_u32(a: U32x4, b: U32x4) -> U32x4 {
        lanewise(a, b, saturating_add)
    }

    fn vsubq_u64(a: U64x2, b: U64x2) -> U64x2 {
        lanewise(a, b, wrapping_sub)
    }

    fn vadd_u64(a: U64x1, b: U64x1) -> U64x1 {
        lanewise(a, b, wrapping_add)
    }

    fn vaddq_u64(a: U64x2, b: U64x2) -> U64x2 {
        lanewise(a, b, wrapping_add)
    }
}
