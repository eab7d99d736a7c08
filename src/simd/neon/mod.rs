//! ARM NEON backend.
//!
//! Calls the native `core::arch::aarch64` intrinsics the crate's API is named after. It is
//! compiled on every aarch64 target, whichever backend feature is selected, so the RVV
//! backend can be checked against real Neon results bit for bit.
//!
//! # Architecture Requirements
//!
//! - **Target Architecture**: AArch64. Advanced SIMD is part of the base ISA there, so no
//!   runtime detection is needed.

use std::arch::aarch64::*;

use crate::simd::traits::Backend;
use crate::simd::types::{U16x8, U32x2, U32x4, U64x1, U64x2};

/// The native Neon instructions.
#[derive(Copy, Clone, Debug, Default)]
pub struct Neon;

impl Backend for Neon {
    const NAME: &'static str = "neon";

    #[inline(always)]
    fn vaddq_u16(a: U16x8, b: U16x8) -> U16x8 {
        let mut out = U16x8::default();

        unsafe {
            let x = vld1q_u16(a.0.as_ptr());
            let y = vld1q_u16(b.0.as_ptr());
            vst1q_u16(out.0.as_mut_ptr(), vaddq_u16(x, y));
        }

        out
    }

    #[inline(always)]
    fn vhadd_u32(a: U32x2, b: U32x2) -> U32x2 {
        let mut out = U32x2::default();

        unsafe {
            let x = vld1_u32(a.0.as_ptr());
            let y = vld1_u32(b.0.as_ptr());
            vst1_u32(out.0.as_mut_ptr(), vhadd_u32(x, y));
        }

        out
    }

    #[inline(always)]
    fn vqaddq_u32(a: U32x4, b: U32x4) -> U32x4 {
        let mut out = U32x4::default();

        unsafe {
            let x = vld1q_u32(a.0.as_ptr());
            let y = vld1q_u32(b.0.as_ptr());
            vst1q_u32(out.0.as_mut_ptr(), vqaddq_u32(x, y));
        }

        out
    }

    #[inline(always)]
    fn vsubq_u64(a: U64x2, b: U64x2) -> U64x2 {
        let mut out = U64x2::default();

        unsafe {
            let x = vld1q_u64(a.0.as_ptr());
            let y = vld1q_u64(b.0.as_ptr());
            vst1q_u64(out.0.as_mut_ptr(), vsubq_u64(x, y));
        }

        out
    }

    #[inline(always)]
    fn vadd_u64(a: U64x1, b: U64x1) -> U64x1 {
        let mut out = U64x1::default();

        unsafe {
            let x = vld1_u64(a.0.as_ptr());
            let y = vld1_u64(b.0.as_ptr());
            vst1_u64(out.0.as_mut_ptr(), vadd_u64(x, y));
        }

        out
    }

    #[inline(always)]
    fn vaddq_u64(a: U64x2, b: U64x2) -> U64x2 {
        let mut out = U64x2::default();

        unsafe {
            let x = vld1q_u64(a.0.as_ptr());
            let y = vld1q_u64(b.0.as_ptr());
            vst1q_u64(out.0.as_mut_ptr(), vaddq_u64(x, y));
        }

        out
    }
}
