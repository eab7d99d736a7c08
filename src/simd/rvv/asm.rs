//! The RVV sequences as real vector instructions.
//!
//! Only built for `riscv64` targets compiled with the `v` feature, where `build.rs`
//! emits `cfg(rvv_asm)`. Every sequence loads both operands, runs the arithmetic and
//! stores the result, so vector registers never cross the `asm!` boundary.

use std::arch::asm;

use crate::simd::types::{U16x8, U32x2, U32x4, U64x1, U64x2};

#[inline(always)]
pub fn vaddq_u16(a: &U16x8, b: &U16x8) -> U16x8 {
    let mut out = U16x8::default();

    // SAFETY: each pointer covers eight u16 lanes and vl is set to 8.
    unsafe {
        asm!(
            "vsetivli zero, 8, e16, m1, ta, ma",
            "vle16.v v8, ({a})",
            "vle16.v v9, ({b})",
            "vadd.vv v8, v8, v9",
            "vse16.v v8, ({dst})",
            a = in(reg) a.0.as_ptr(),
            b = in(reg) b.0.as_ptr(),
            dst = in(reg) out.0.as_mut_ptr(),
            out("v8") _,
            out("v9") _,
            options(nostack),
        );
    }

    out
}

#[inline(always)]
pub fn vhadd_u32(a: &U32x2, b: &U32x2) -> U32x2 {
    let mut out = U32x2::default();

    // SAFETY: each pointer covers two u32 lanes and vl is set to 2. The widened sum
    // occupies the v10/v11 group, disjoint from both sources.
    unsafe {
        asm!(
            "vsetivli zero, 2, e32, m1, ta, ma",
            "vle32.v v8, ({a})",
            "vle32.v v9, ({b})",
            "vwaddu.vv v10, v8, v9",
            "vnsrl.wi v8, v10, 1",
            "vse32.v v8, ({dst})",
            a = in(reg) a.0.as_ptr(),
            b = in(reg) b.0.as_ptr(),
            dst = in(reg) out.0.as_mut_ptr(),
            out("v8") _,
            out("v9") _,
            out("v10") _,
            out("v11") _,
            options(nostack),
        );
    }

    out
}

#[inline(always)]
pub fn vqaddq_u32(a: &U32x4, b: &U32x4) -> U32x4 {
    let mut out = U32x4::default();

    // SAFETY: each pointer covers four u32 lanes and vl is set to 4.
    unsafe {
        asm!(
            "vsetivli zero, 4, e32, m1, ta, ma",
            "vle32.v v8, ({a})",
            "vle32.v v9, ({b})",
            "vsaddu.vv v8, v8, v9",
            "vse32.v v8, ({dst})",
            a = in(reg) a.0.as_ptr(),
            b = in(reg) b.0.as_ptr(),
            dst = in(reg) out.0.as_mut_ptr(),
            out("v8") _,
            out("v9") _,
            options(nostack),
        );
    }

    out
}

#[inline(always)]
pub fn vsubq_u64(a: &U64x2, b: &U64x2) -> U64x2 {
    let mut out = U64x2::default();

    // SAFETY: each pointer covers two u64 lanes and vl is set to 2.
    unsafe {
        asm!(
            "vsetivli zero, 2, e64, m1, ta, ma",
            "vle64.v v8, ({a})",
            "vle64.v v9, ({b})",
            "vsub.vv v8, v8, v9",
            "vse64.v v8, ({dst})",
            a = in(reg) a.0.as_ptr(),
            b = in(reg) b.0.as_ptr(),
            dst = in(reg) out.0.as_mut_ptr(),
            out("v8") _,
            out("v9") _,
            options(nostack),
        );
    }

    out
}

#[inline(always)]
pub fn vadd_u64(a: &U64x1, b: &U64x1) -> U64x1 {
    let mut out = U64x1::default();

    // SAFETY: each pointer covers one u64 lane and vl is set to 1.
    unsafe {
        asm!(
            "vsetivli zero, 1, e64, m1, ta, ma",
            "vle64.v v8, ({a})",
            "vle64.v v9, ({b})",
            "vadd.vv v8, v8, v9",
            "vse64.v v8, ({dst})",
            a = in(reg) a.0.as_ptr(),
            b = in(reg) b.0.as_ptr(),
            dst = in(reg) out.0.as_mut_ptr(),
            out("v8") _,
            out("v9") _,
            options(nostack),
        );
    }

    out
}

#[inline(always)]
pub fn vaddq_u64(a: &U64x2, b: &U64x2) -> U64x2 {
    let mut out = U64x2::default();

    // SAFETY: each pointer covers two u64 lanes and vl is set to 2.
    unsafe {
        asm!(
            "vsetivli zero, 2, e64, m1, ta, ma",
            "vle64.v v8, ({a})",
            "vle64.v v9, ({b})",
            "vadd.vv v8, v8, v9",
            "vse64.v v8, ({dst})",
            a = in(reg) a.0.as_ptr(),
            b = in(reg) b.0.as_ptr(),
            dst = in(reg) out.0.as_mut_ptr(),
            out("v8") _,
            out("v9") _,
            options(nostack),
        );
    }

    out
}
