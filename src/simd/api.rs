//! Free functions spelled like `arm_neon.h`.
//!
//! Arithmetic routes to [`ActiveBackend`](crate::simd::ActiveBackend), chosen by the `rvv`
//! or `neon` cargo feature. Loads and stores mirror `vld1*`/`vst1*`: they take raw pointers
//! with no alignment requirement.

use crate::simd::traits::{Backend, LaneVector};
use crate::simd::types::{uint16x8_t, uint32x2_t, uint32x4_t, uint64x1_t, uint64x2_t};
use crate::simd::ActiveBackend;

/// Lane-wise wrapping add of eight `u16` lanes.
#[inline(always)]
pub fn vaddq_u16(a: uint16x8_t, b: uint16x8_t) -> uint16x8_t {
    ActiveBackend::vaddq_u16(a, b)
}

/// Lane-wise `floor((a + b) / 2)` of two `u32` lanes.
#[inline(always)]
pub fn vhadd_u32(a: uint32x2_t, b: uint32x2_t) -> uint32x2_t {
    ActiveBackend::vhadd_u32(a, b)
}

/// Lane-wise saturating add of four `u32` lanes.
#[inline(always)]
pub fn vqaddq_u32(a: uint32x4_t, b: uint32x4_t) -> uint32x4_t {
    ActiveBackend::vqaddq_u32(a, b)
}

/// Lane-wise wrapping subtract of two `u64` lanes.
#[inline(always)]
pub fn vsubq_u64(a: uint64x2_t, b: uint64x2_t) -> uint64x2_t {
    ActiveBackend::vsubq_u64(a, b)
}

/// Wrapping add of one `u64` lane.
#[inline(always)]
pub fn vadd_u64(a: uint64x1_t, b: uint64x1_t) -> uint64x1_t {
    ActiveBackend::vadd_u64(a, b)
}

/// Lane-wise wrapping add of two `u64` lanes.
#[inline(always)]
pub fn vaddq_u64(a: uint64x2_t, b: uint64x2_t) -> uint64x2_t {
    ActiveBackend::vaddq_u64(a, b)
}

/// # Safety
///
/// `ptr` must be valid for reads of 8 lanes.
#[inline(always)]
pub unsafe fn vld1q_u16(ptr: *const u16) -> uint16x8_t {
    uint16x8_t::load(ptr)
}

/// # Safety
///
/// `ptr` must be valid for reads of 2 lanes.
#[inline(always)]
pub unsafe fn vld1_u32(ptr: *const u32) -> uint32x2_t {
    uint32x2_t::load(ptr)
}

/// # Safety
///
/// `ptr` must be valid for reads of 4 lanes.
#[inline(always)]
pub unsafe fn vld1q_u32(ptr: *const u32) -> uint32x4_t {
    uint32x4_t::load(ptr)
}

/// # Safety
///
/// `ptr` must be valid for reads of 1 lane.
#[inline(always)]
pub unsafe fn vld1_u64(ptr: *const u64) -> uint64x1_t {
    uint64x1_t::load(ptr)
}

/// # Safety
///
/// `ptr` must be valid for reads of 2 lanes.
#[inline(always)]
pub unsafe fn vld1q_u64(ptr: *const u64) -> uint64x2_t {
    uint64x2_t::load(ptr)
}

/// # Safety
///
/// `ptr` must be valid for writes of 8 lanes.
#[inline(always)]
pub unsafe fn vst1q_u16(ptr: *mut u16, v: uint16x8_t) {
    v.store_at(ptr)
}

/// # Safety
///
/// `ptr` must be valid for writes of 2 lanes.
#[inline(always)]
pub unsafe fn vst1_u32(ptr: *mut u32, v: uint32x2_t) {
    v.store_at(ptr)
}

/// # Safety
///
/// `ptr` must be valid for writes of 4 lanes.
#[inline(always)]
pub unsafe fn vst1q_u32(ptr: *mut u32, v: uint32x4_t) {
    v.store_at(ptr)
}

/// # Safety
///
/// `ptr` must be valid for writes of 1 lane.
#[inline(always)]
pub unsafe fn vst1_u64(ptr: *mut u64, v: uint64x1_t) {
    v.store_at(ptr)
}

/// # Safety
///
/// `ptr` must be valid for writes of 2 lanes.
#[inline(always)]
pub unsafe fn vst1q_u64(ptr: *mut u64, v: uint64x2_t) {
    v.store_at(ptr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_op_store_sequence() {
        let a = [6u64];
        let b = [1u64];
        let mut result = [0u64];

        unsafe {
            let x = vld1_u64(a.as_ptr());
            let y = vld1_u64(b.as_ptr());
            vst1_u64(result.as_mut_ptr(), vadd_u64(x, y));
        }

        assert_eq!(result, [7]);
    }

    #[test]
    fn test_q_register_sequence() {
        let a = [u32::MAX, 1, 2, 3];
        let b = [1u32, 1, 1, 1];
        let mut result = [0u32; 4];

        unsafe {
            let x = vld1q_u32(a.as_ptr());
            let y = vld1q_u32(b.as_ptr());
            vst1q_u32(result.as_mut_ptr(), vqaddq_u32(x, y));
        }

        assert_eq!(result, [u32::MAX, 2, 3, 4]);
    }

    #[test]
    fn test_remaining_entry_points() {
        let halves = [10u32, 11];
        let mut out2 = [0u32; 2];
        unsafe {
            let v = vld1_u32(halves.as_ptr());
            vst1_u32(out2.as_mut_ptr(), vhadd_u32(v, v));
        }
        assert_eq!(out2, [10, 11]);

        let shorts = [u16::MAX; 8];
        let mut out8 = [0u16; 8];
        unsafe {
            let v = vld1q_u16(shorts.as_ptr());
            vst1q_u16(out8.as_mut_ptr(), vaddq_u16(v, v));
        }
        assert_eq!(out8, [u16::MAX - 1; 8]);

        let longs = [0u64, 1];
        let mut out = [0u64; 2];
        unsafe {
            let x = vld1q_u64(longs.as_ptr());
            let y = vld1q_u64([1u64, 1].as_ptr());
            vst1q_u64(out.as_mut_ptr(), vsubq_u64(x, y));
        }
        assert_eq!(out, [u64::MAX, 0]);

        unsafe {
            let x = vld1q_u64(longs.as_ptr());
            vst1q_u64(out.as_mut_ptr(), vaddq_u64(x, x));
        }
        assert_eq!(out, [0, 2]);
    }
}
