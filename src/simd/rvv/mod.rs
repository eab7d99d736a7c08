//! RISC-V Vector backend.
//!
//! Each Neon operation is re-expressed as the RVV sequence that reproduces it exactly:
//!
//! | Neon         | RVV                                              |
//! |--------------|--------------------------------------------------|
//! | `vaddq_u16`  | `vadd.vv` at e16, vl 8                           |
//! | `vhadd_u32`  | `vwaddu.vv` to e64, then `vnsrl.wx` by 1, vl 2   |
//! | `vqaddq_u32` | `vsaddu.vv` at e32, vl 4                         |
//! | `vsubq_u64`  | `vsub.vv` at e64, vl 2                           |
//! | `vadd_u64`   | `vadd.vv` at e64, vl 1                           |
//! | `vaddq_u64`  | `vadd.vv` at e64, vl 2                           |
//!
//! With `cfg(rvv_asm)` the sequences run as real vector instructions. Otherwise they run
//! on the lane-exact instruction model in [`insn`], which lets the RVV path be built and
//! checked on any host.
//!
//! The halving add widens before shifting, so `(a + b)` never overflows and the result is
//! `floor((a + b) / 2)`, matching Neon's truncating `vhadd`.

#[cfg(rvv_asm)]
pub mod asm;

pub mod insn;

use crate::simd::traits::{Backend, LaneVector};
use crate::simd::types::{U16x8, U32x2, U32x4, U64x1, U64x2};

#[cfg(not(rvv_asm))]
use insn::{vadd_vv, vle, vlmax, vnsrl_wx, vsaddu_vv, vse, vsetivli, vsub_vv, vwaddu_vv};

/// Register capacities at LMUL = 1.
#[cfg(not(rvv_asm))]
const E16_M1: usize = vlmax(16, 1);
#[cfg(not(rvv_asm))]
const E32_M1: usize = vlmax(32, 1);
#[cfg(not(rvv_asm))]
const E64_M1: usize = vlmax(64, 1);

/// Neon operations expressed with RVV instructions.
#[derive(Copy, Clone, Debug, Default)]
pub struct Rvv;

#[cfg(not(rvv_asm))]
impl Backend for Rvv {
    const NAME: &'static str = "rvv";

    fn vaddq_u16(a: U16x8, b: U16x8) -> U16x8 {
        let vl = vsetivli::<u16>(U16x8::LANE_COUNT, 1);
        let va: [u16; E16_M1] = vle(a.lanes(), vl);
        let vb: [u16; E16_M1] = vle(b.lanes(), vl);

        let mut out = U16x8::default();
        vse(out.lanes_mut(), &vadd_vv(&va, &vb, vl), vl);
        out
    }

    fn vhadd_u32(a: U32x2, b: U32x2) -> U32x2 {
        let vl = vsetivli::<u32>(U32x2::LANE_COUNT, 1);
        let va: [u32; E32_M1] = vle(a.lanes(), vl);
        let vb: [u32; E32_M1] = vle(b.lanes(), vl);

        // The e64 group at LMUL 2 holds as many elements as one e32 register.
        let wide = vwaddu_vv(&va, &vb, vl);
        let halved = vnsrl_wx::<u32, E32_M1>(&wide, 1, vl);

        let mut out = U32x2::default();
        vse(out.lanes_mut(), &halved, vl);
        out
    }

    fn vqaddq_u32(a: U32x4, b: U32x4) -> U32x4 {
        let vl = vsetivli::<u32>(U32x4::LANE_COUNT, 1);
        let va: [u32; E32_M1] = vle(a.lanes(), vl);
        let vb: [u32; E32_M1] = vle(b.lanes(), vl);

        let mut out = U32x4::default();
        vse(out.lanes_mut(), &vsaddu_vv(&va, &vb, vl), vl);
        out
    }

    fn vsubq_u64(a: U64x2, b: U64x2) -> U64x2 {
        let vl = vsetivli::<u64>(U64x2::LANE_COUNT, 1);
        let va: [u64; E64_M1] = vle(a.lanes(), vl);
        let vb: [u64; E64_M1] = vle(b.lanes(), vl);

        let mut out = U64x2::default();
        vse(out.lanes_mut(), &vsub_vv(&va, &vb, vl), vl);
        out
    }

    fn vadd_u64(a: U64x1, b: U64x1) -> U64x1 {
        let vl = vsetivli::<u64>(U64x1::LANE_COUNT, 1);
        let va: [u64; E64_M1] = vle(a.lanes(), vl);
        let vb: [u64; E64_M1] = vle(b.lanes(), vl);

        let mut out = U64x1::default();
        vse(out.lanes_mut(), &vadd_vv(&va, &vb, vl), vl);
        out
    }

    fn vaddq_u64(a: U64x2, b: U64x2) -> U64x2 {
        let vl = vsetivli::<u64>(U64x2::LANE_COUNT, 1);
        let va: [u64; E64_M1] = vle(a.lanes(), vl);
        let vb: [u64; E64_M1] = vle(b.lanes(), vl);

        let mut out = U64x2::default();
        vse(out.lanes_mut(), &vadd_vv(&va, &vb, vl), vl);
        out
    }
}

#[cfg(rvv_asm)]
impl Backend for Rvv {
    const NAME: &'static str = "rvv";

    #[inline(always)]
    fn vaddq_u16(a: U16x8, b: U16x8) -> U16x8 {
        asm::vaddq_u16(&a, &b)
    }

    #[inline(always)]
    fn vhadd_u32(a: U32x2, b: U32x2) -> U32x2 {
        asm::vhadd_u32(&a, &b)
    }

    #[inline(always)]
    fn vqaddq_u32(a: U32x4, b: U32x4) -> U32x4 {
        asm::vqaddq_u32(&a, &b)
    }

    #[inline(always)]
    fn vsubq_u64(a: U64x2, b: U64x2) -> U64x2 {
        asm::vsubq_u64(&a, &b)
    }

    #[inline(always)]
    fn vadd_u64(a: U64x1, b: U64x1) -> U64x1 {
        asm::vadd_u64(&a, &b)
    }

    #[inline(always)]
    fn vaddq_u64(a: U64x2, b: U64x2) -> U64x2 {
        asm::vaddq_u64(&a, &b)
    }
}
