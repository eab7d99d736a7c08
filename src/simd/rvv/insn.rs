//! Lane-exact model of the RVV instructions the backend is built from.
//!
//! A vector register (or register group) is modelled as a `[T; N]` array where `N` is
//! its capacity at the current SEW/LMUL for `VLEN = 128`, the minimum the V extension
//! guarantees. Only elements below `vl` are computed. Tail elements are left at zero,
//! which is one of the values a tail-agnostic implementation may produce.

use std::fmt::Debug;

use num::traits::{PrimInt, SaturatingAdd, WrappingAdd, WrappingSub};

/// Vector register length in bits assumed by the model.
pub const VLEN: usize = 128;

/// Element types with a selected element width (SEW).
pub trait Element: PrimInt + Default + Debug {
    /// Selected element width in bits.
    const SEW: usize;
}

impl Element for u16 {
    const SEW: usize = 16;
}

impl Element for u32 {
    const SEW: usize = 32;
}

impl Element for u64 {
    const SEW: usize = 64;
}

/// Element types with a `2*SEW` counterpart for widening and narrowing instructions.
pub trait Widen: Element {
    type Wide: Element;

    fn widen(self) -> Self::Wide;

    /// Keeps the low `SEW` bits of a wide element.
    fn truncate(wide: Self::Wide) -> Self;
}

impl Widen for u16 {
    type Wide = u32;

    #[inline(always)]
    fn widen(self) -> u32 {
        u32::from(self)
    }

    #[inline(always)]
    fn truncate(wide: u32) -> u16 {
        wide as u16
    }
}

impl Widen for u32 {
    type Wide = u64;

    #[inline(always)]
    fn widen(self) -> u64 {
        u64::from(self)
    }

    #[inline(always)]
    fn truncate(wide: u64) -> u32 {
        wide as u32
    }
}

/// `VLMAX` for element type `T` at register group multiplier `lmul`.
#[inline(always)]
pub const fn vlmax(sew: usize, lmul: usize) -> usize {
    VLEN * lmul / sew
}

/// `vsetivli`: grants `vl = min(avl, VLMAX)` for `T` at `lmul`.
#[inline(always)]
pub fn vsetivli<T: Element>(avl: usize, lmul: usize) -> usize {
    avl.min(vlmax(T::SEW, lmul))
}

#[inline(always)]
fn check_vl(vl: usize, capacity: usize) {
    assert!(
        vl <= capacity,
        "vl ({vl}) exceeds register capacity ({capacity})"
    );
}

#[inline(always)]
fn map_active<S, T, const N: usize, F>(vs2: &[S; N], vs1: &[S; N], vl: usize, op: F) -> [T; N]
where
    S: Copy,
    T: Element,
    F: Fn(S, S) -> T,
{
    check_vl(vl, N);

    let mut vd = [T::default(); N];

    for ((d, &x), &y) in vd[..vl].iter_mut().zip(vs2).zip(vs1) {
        *d = op(x, y);
    }

    vd
}

/// `vle<SEW>.v`: unit-stride load of `vl` elements.
pub fn vle<T: Element, const N: usize>(src: &[T], vl: usize) -> [T; N] {
    check_vl(vl, N);
    assert!(
        src.len() >= vl,
        "Source holds {} elements, vl is {vl}",
        src.len()
    );

    let mut vd = [T::default(); N];
    vd[..vl].copy_from_slice(&src[..vl]);
    vd
}

/// `vse<SEW>.v`: unit-stride store of `vl` elements.
pub fn vse<T: Element, const N: usize>(dst: &mut [T], vs3: &[T; N], vl: usize) {
    check_vl(vl, N);
    assert!(
        dst.len() >= vl,
        "Destination holds {} elements, vl is {vl}",
        dst.len()
    );

    dst[..vl].copy_from_slice(&vs3[..vl]);
}

/// `vadd.vv`: `vd[i] = vs2[i] + vs1[i]`, modulo `2^SEW`.
pub fn vadd_vv<T, const N: usize>(vs2: &[T; N], vs1: &[T; N], vl: usize) -> [T; N]
where
    T: Element + WrappingAdd,
{
    map_active(vs2, vs1, vl, |x, y| x.wrapping_add(&y))
}

/// `vsub.vv`: `vd[i] = vs2[i] - vs1[i]`, modulo `2^SEW`.
pub fn vsub_vv<T, const N: usize>(vs2: &[T; N], vs1: &[T; N], vl: usize) -> [T; N]
where
    T: Element + WrappingSub,
{
    map_active(vs2, vs1, vl, |x, y| x.wrapping_sub(&y))
}

/// `vsaddu.vv`: unsigned saturating add, clamped to `2^SEW - 1`.
pub fn vsaddu_vv<T, const N: usize>(vs2: &[T; N], vs1: &[T; N], vl: usize) -> [T; N]
where
    T: Element + SaturatingAdd,
{
    // `PrimInt` also brings the by-value `Saturating::saturating_add` into scope
    map_active(vs2, vs1, vl, |x, y| SaturatingAdd::saturating_add(&x, &y))
}

/// `vwaddu.vv`: zero-extends both operands to `2*SEW` and adds. The sum cannot overflow.
pub fn vwaddu_vv<T, const N: usize>(vs2: &[T; N], vs1: &[T; N], vl: usize) -> [T::Wide; N]
where
    T: Widen,
{
    map_active(vs2, vs1, vl, |x, y| x.widen() + y.widen())
}

/// `vnsrl.wx`: logical right shift of `2*SEW` elements, truncated to `SEW`.
///
/// Only the low `log2(2*SEW)` bits of `rs1` are used as the shift amount.
pub fn vnsrl_wx<T: Widen, const N: usize>(vs2: &[T::Wide; N], rs1: usize, vl: usize) -> [T; N] {
    check_vl(vl, N);

    let shift = rs1 & (2 * T::SEW - 1);
    let mut vd = [T::default(); N];

    for (d, &w) in vd[..vl].iter_mut().zip(vs2) {
        *d = T::truncate(w >> shift);
    }

    vd
}

#[cfg(test)]
mod tests {
    use super::*;

    mod configuration {
        use super::*;

        #[test]
        fn test_vlmax_at_vlen_128() {
            assert_eq!(vlmax(16, 1), 8);
            assert_eq!(vlmax(32, 1), 4);
            assert_eq!(vlmax(64, 1), 2);
            assert_eq!(vlmax(64, 2), 4);
        }

        #[test]
        fn test_vsetivli_clamps_to_vlmax() {
            assert_eq!(vsetivli::<u16>(8, 1), 8);
            assert_eq!(vsetivli::<u32>(2, 1), 2);
            assert_eq!(vsetivli::<u64>(5, 1), 2);
            assert_eq!(vsetivli::<u64>(5, 2), 4);
        }
    }

    mod memory {
        use super::*;

        #[test]
        fn test_vle_leaves_tail_zeroed() {
            let reg: [u32; 4] = vle(&[7, 8], 2);
            assert_eq!(reg, [7, 8, 0, 0]);
        }

        #[test]
        fn test_vse_writes_only_active_elements() {
            let reg: [u64; 2] = [5, 6];
            let mut dst = [9u64; 3];
            vse(&mut dst, &reg, 1);
            assert_eq!(dst, [5, 9, 9]);
        }

        #[test]
        #[should_panic(expected = "exceeds register capacity")]
        fn test_vle_vl_over_capacity_panics() {
            let _: [u64; 2] = vle(&[1, 2, 3], 3);
        }

        #[test]
        #[should_panic(expected = "Source holds 1 elements")]
        fn test_vle_short_source_panics() {
            let _: [u64; 2] = vle(&[1], 2);
        }

        #[test]
        #[should_panic(expected = "Destination holds 0 elements")]
        fn test_vse_short_destination_panics() {
            let reg: [u16; 8] = [1; 8];
            let mut dst: [u16; 0] = [];
            vse(&mut dst, &reg, 1);
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn test_vadd_vv_wraps_and_respects_vl() {
            let a: [u16; 8] = [u16::MAX, 1, 2, 3, 4, 5, 6, 7];
            let b: [u16; 8] = [1; 8];
            assert_eq!(vadd_vv(&a, &b, 3), [0, 2, 3, 0, 0, 0, 0, 0]);
        }

        #[test]
        fn test_vsub_vv_operand_order() {
            let vs2: [u64; 2] = [0, 10];
            let vs1: [u64; 2] = [1, 3];
            assert_eq!(vsub_vv(&vs2, &vs1, 2), [u64::MAX, 7]);
        }

        #[test]
        fn test_vsaddu_vv_clamps() {
            let a: [u32; 4] = [u32::MAX, u32::MAX - 1, 0, 100];
            let b: [u32; 4] = [1, 1, 0, u32::MAX];
            assert_eq!(vsaddu_vv(&a, &b, 4), [u32::MAX, u32::MAX, 0, u32::MAX]);
        }

        #[test]
        fn test_vsaddu_vv_clamps_at_every_sew() {
            let a: [u16; 8] = [u16::MAX, u16::MAX - 2, 7, 0, 1, 2, 3, 4];
            let b: [u16; 8] = [u16::MAX, 2, 8, 0, 1, 1, 1, 1];
            assert_eq!(
                vsaddu_vv(&a, &b, 4),
                [u16::MAX, u16::MAX, 15, 0, 0, 0, 0, 0]
            );

            let a: [u64; 2] = [u64::MAX - 1, 5];
            let b: [u64; 2] = [3, u64::MAX - 5];
            assert_eq!(vsaddu_vv(&a, &b, 2), [u64::MAX, u64::MAX]);
            assert_eq!(vsaddu_vv(&a, &b, 1), [u64::MAX, 0]);
        }

        #[test]
        fn test_vwaddu_vv_keeps_carry() {
            let a: [u32; 4] = [u32::MAX, 1, 0, 0];
            let b: [u32; 4] = [u32::MAX, 2, 0, 0];
            let wide = vwaddu_vv(&a, &b, 2);
            assert_eq!(wide, [2 * u64::from(u32::MAX), 3, 0, 0]);
        }

        #[test]
        fn test_vnsrl_wx_masks_shift_amount() {
            let wide: [u64; 4] = [1 << 40, 6, 0, 0];

            // bit 39 falls outside the narrowed lane
            assert_eq!(vnsrl_wx::<u32, 4>(&wide, 1, 2), [0, 3, 0, 0]);
            assert_eq!(vnsrl_wx::<u32, 4>(&wide, 33, 2), [1 << 7, 0, 0, 0]);
            // 65 & 63 == 1
            assert_eq!(
                vnsrl_wx::<u32, 4>(&wide, 65, 2),
                vnsrl_wx::<u32, 4>(&wide, 1, 2)
            );
        }

        #[test]
        fn test_vnsrl_wx_leaves_tail_zeroed() {
            let wide: [u64; 4] = [2, 4, 6, 8];
            assert_eq!(vnsrl_wx::<u32, 4>(&wide, 1, 3), [1, 2, 3, 0]);
            assert_eq!(vnsrl_wx::<u32, 4>(&wide, 1, 0), [0; 4]);
        }

        #[test]
        fn test_vnsrl_wx_truncates_to_sew() {
            let wide: [u32; 8] = [0x0003_0004, 0, 0, 0, 0, 0, 0, 0];
            assert_eq!(vnsrl_wx::<u16, 8>(&wide, 0, 1)[0], 0x0004);
            assert_eq!(vnsrl_wx::<u16, 8>(&wide, 16, 1)[0], 0x0003);
        }
    }
}
