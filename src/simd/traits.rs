use std::fmt::Debug;

use crate::error::{lane_count_error, Result};
use crate::simd::types::{U16x8, U32x2, U32x4, U64x1, U64x2};

/// A fixed-width vector of unsigned integer lanes, passed and returned by value.
pub trait LaneVector: Copy + Default + PartialEq + Debug {
    type Lane: Copy + Default + PartialEq + Debug + Send + Sync;

    /// The number of lanes in the vector
    const LANE_COUNT: usize;

    fn lanes(&self) -> &[Self::Lane];

    fn lanes_mut(&mut self) -> &mut [Self::Lane];

    /// Creates a vector from a slice holding exactly `LANE_COUNT` lanes.
    ///
    /// # Panics
    ///
    /// Panics if the slice length differs from `LANE_COUNT`.
    #[inline(always)]
    fn new(slice: &[Self::Lane]) -> Self {
        assert!(
            slice.len() == Self::LANE_COUNT,
            "Size must be == {}",
            Self::LANE_COUNT
        );

        let mut v = Self::default();
        v.lanes_mut().copy_from_slice(slice);
        v
    }

    /// Fallible counterpart of [`LaneVector::new`].
    #[inline(always)]
    fn try_from_slice(slice: &[Self::Lane]) -> Result<Self> {
        if slice.len() != Self::LANE_COUNT {
            return Err(lane_count_error(Self::LANE_COUNT, slice.len()));
        }

        Ok(Self::new(slice))
    }

    /// Creates a new vector with all lanes set to the same value.
    #[inline(always)]
    fn splat(value: Self::Lane) -> Self {
        let mut v = Self::default();
        v.lanes_mut().fill(value);
        v
    }

    /// Loads `LANE_COUNT` lanes starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANE_COUNT` lanes. No alignment is required.
    #[inline(always)]
    unsafe fn load(ptr: *const Self::Lane) -> Self {
        assert!(!ptr.is_null(), "Pointer must not be null");

        let mut v = Self::default();
        std::ptr::copy_nonoverlapping(ptr, v.lanes_mut().as_mut_ptr(), Self::LANE_COUNT);
        v
    }

    /// Stores all lanes starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `LANE_COUNT` lanes. No alignment is required.
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut Self::Lane) {
        assert!(!ptr.is_null(), "Pointer must not be null");

        std::ptr::copy_nonoverlapping(self.lanes().as_ptr(), ptr, Self::LANE_COUNT);
    }

    #[inline(always)]
    fn to_vec(self) -> Vec<Self::Lane> {
        self.lanes().to_vec()
    }
}

/// One implementation of the Neon operations this crate mirrors.
///
/// Every method is a pure per-lane function: output lane `i` depends only on lane `i`
/// of each operand.
pub trait Backend {
    /// Short name used in logs and reports.
    const NAME: &'static str;

    /// Lane-wise wrapping add of eight `u16` lanes.
    fn vaddq_u16(a: U16x8, b: U16x8) -> U16x8;

    /// Lane-wise `floor((a + b) / 2)` of two `u32` lanes, computed without overflow.
    fn vhadd_u32(a: U32x2, b: U32x2) -> U32x2;

    /// Lane-wise unsigned saturating add of four `u32` lanes.
    fn vqaddq_u32(a: U32x4, b: U32x4) -> U32x4;

    /// Lane-wise wrapping subtract of two `u64` lanes.
    fn vsubq_u64(a: U64x2, b: U64x2) -> U64x2;

    /// Wrapping add of a single `u64` lane.
    fn vadd_u64(a: U64x1, b: U64x1) -> U64x1;

    /// Lane-wise wrapping add of two `u64` lanes.
    fn vaddq_u64(a: U64x2, b: U64x2) -> U64x2;
}
