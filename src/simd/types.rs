//! Lane containers for the Neon vector types this crate mirrors.
//!
//! Each container is a plain array of lanes with the alignment of the matching register
//! (8 bytes for the 64-bit `D` registers, 16 bytes for the 128-bit `Q` registers). The
//! lowercase Neon spellings (`uint16x8_t`, ...) are provided as aliases so call sites
//! written against `arm_neon.h` naming keep compiling.

use crate::simd::traits::LaneVector;

macro_rules! lane_vector {
    ($(#[$meta:meta])* $name:ident, $alias:ident, $lane:ty, $count:expr, $align:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        #[repr(C, align($align))]
        pub struct $name(pub [$lane; $count]);

        #[allow(non_camel_case_types)]
        pub type $alias = $name;

        impl $name {
            #[inline(always)]
            pub const fn from_array(lanes: [$lane; $count]) -> Self {
                Self(lanes)
            }

            #[inline(always)]
            pub const fn to_array(self) -> [$lane; $count] {
                self.0
            }
        }

        impl LaneVector for $name {
            type Lane = $lane;

            const LANE_COUNT: usize = $count;

            #[inline(always)]
            fn lanes(&self) -> &[$lane] {
                &self.0
            }

            #[inline(always)]
            fn lanes_mut(&mut self) -> &mut [$lane] {
                &mut self.0
            }
        }

        impl From<[$lane; $count]> for $name {
            #[inline(always)]
            fn from(lanes: [$lane; $count]) -> Self {
                Self(lanes)
            }
        }

        impl From<$name> for [$lane; $count] {
            #[inline(always)]
            fn from(v: $name) -> Self {
                v.0
            }
        }
    };
}

lane_vector!(
    /// 128-bit vector of eight `u16` lanes.
    U16x8, uint16x8_t, u16, 8, 16
);

lane_vector!(
    /// 64-bit vector of two `u32` lanes.
    U32x2, uint32x2_t, u32, 2, 8
);

lane_vector!(
    /// 128-bit vector of four `u32` lanes.
    U32x4, uint32x4_t, u32, 4, 16
);

lane_vector!(
    /// 64-bit vector of one `u64` lane.
    U64x1, uint64x1_t, u64, 1, 8
);

lane_vector!(
    /// 128-bit vector of two `u64` lanes.
    U64x2, uint64x2_t, u64, 2, 16
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RhalError;
    use std::mem;
    use std::ptr;

    mod layout {
        use super::*;

        #[test]
        fn test_register_sizes() {
            assert_eq!(mem::size_of::<U16x8>(), 16);
            assert_eq!(mem::size_of::<U32x2>(), 8);
            assert_eq!(mem::size_of::<U32x4>(), 16);
            assert_eq!(mem::size_of::<U64x1>(), 8);
            assert_eq!(mem::size_of::<U64x2>(), 16);
        }

        #[test]
        fn test_register_alignments() {
            assert_eq!(mem::align_of::<U16x8>(), 16);
            assert_eq!(mem::align_of::<U32x2>(), 8);
            assert_eq!(mem::align_of::<U32x4>(), 16);
            assert_eq!(mem::align_of::<U64x1>(), 8);
            assert_eq!(mem::align_of::<U64x2>(), 16);
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn test_new_copies_lanes_in_order() {
            let v = U16x8::new(&[1, 2, 3, 4, 5, 6, 7, 8]);
            assert_eq!(v.to_array(), [1, 2, 3, 4, 5, 6, 7, 8]);
            assert_eq!(v.lanes().len(), U16x8::LANE_COUNT);
        }

        #[test]
        #[should_panic(expected = "Size must be == 4")]
        fn test_new_wrong_length_panics() {
            let _ = U32x4::new(&[1, 2, 3]);
        }

        #[test]
        fn test_try_from_slice_reports_lane_count() {
            let err = U64x2::try_from_slice(&[1, 2, 3]).unwrap_err();
            assert_eq!(
                err,
                RhalError::LaneCount {
                    expected: 2,
                    actual: 3
                }
            );

            let ok = U64x2::try_from_slice(&[9, 10]).unwrap();
            assert_eq!(ok, U64x2([9, 10]));
        }

        #[test]
        fn test_splat_and_default() {
            assert_eq!(U32x2::splat(7).to_array(), [7, 7]);
            assert_eq!(U64x1::default().to_array(), [0]);
        }

        #[test]
        fn test_array_conversions() {
            let v: U32x4 = [1, 2, 3, 4].into();
            let back: [u32; 4] = v.into();
            assert_eq!(back, [1, 2, 3, 4]);
            assert_eq!(U32x4::from_array(back), v);
        }
    }

    mod memory {
        use super::*;

        #[test]
        fn test_load_from_unaligned_pointer() {
            // Offsetting by one lane breaks the 16-byte alignment of the backing array.
            let data: [u16; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
            let v = unsafe { U16x8::load(data.as_ptr().add(1)) };
            assert_eq!(v.to_array(), [1, 2, 3, 4, 5, 6, 7, 8]);
        }

        #[test]
        fn test_store_at() {
            let v = U64x2([u64::MAX, 3]);
            let mut storage = [0u64; 3];
            unsafe { v.store_at(storage.as_mut_ptr().add(1)) };
            assert_eq!(storage, [0, u64::MAX, 3]);
        }

        #[test]
        #[should_panic(expected = "Pointer must not be null")]
        fn test_load_null_ptr_panics() {
            let _ = unsafe { U32x2::load(ptr::null()) };
        }

        #[test]
        #[should_panic(expected = "Pointer must not be null")]
        fn test_store_at_null_ptr_panics() {
            let v = U64x1([1]);
            unsafe { v.store_at(ptr::null_mut()) };
        }

        #[test]
        fn test_to_vec() {
            assert_eq!(U32x2([5, 6]).to_vec(), vec![5, 6]);
        }
    }
}
