//! ARM Neon unsigned integer intrinsics re-expressed with the RISC-V Vector extension.
//!
//! Code written against the Neon names (`vaddq_u16`, `vhadd_u32`, `vqaddq_u32`,
//! `vsubq_u64`, `vadd_u64`, `vaddq_u64` and their loads/stores) builds unchanged against
//! this crate. The backend behind those names is picked at compile time with exactly one
//! of the `rvv` (default) or `neon` cargo features.
//!
//! Because `rvv` is on by default, selecting Neon also needs the default turned off,
//! otherwise the two features collide:
//!
//! ```text
//! cargo build --no-default-features --features neon
//! ```
//!
//! ```
//! use rhal::{vqaddq_u32, LaneVector, U32x4};
//!
//! let a = U32x4::new(&[u32::MAX, 1, 2, 3]);
//! let b = U32x4::new(&[1, 1, 1, 1]);
//! assert_eq!(vqaddq_u32(a, b).to_array(), [u32::MAX, 2, 3, 4]);
//! ```

#[cfg(all(feature = "rvv", feature = "neon"))]
compile_error!("The `rvv` and `neon` features are mutually exclusive. Enable exactly one.");

#[cfg(not(any(feature = "rvv", feature = "neon")))]
compile_error!("Unsupported architecture. Please enable either the `neon` or the `rvv` feature.");

#[cfg(all(feature = "neon", not(target_arch = "aarch64")))]
compile_error!("The `neon` feature requires an aarch64 target.");

pub mod error;
#[cfg(any(feature = "rvv", all(feature = "neon", target_arch = "aarch64")))]
pub mod harness;
#[cfg(any(feature = "rvv", all(feature = "neon", target_arch = "aarch64")))]
pub mod simd;

pub use error::{Result, RhalError};
#[cfg(any(feature = "rvv", all(feature = "neon", target_arch = "aarch64")))]
pub use simd::api::*;
#[cfg(any(feature = "rvv", all(feature = "neon", target_arch = "aarch64")))]
pub use simd::traits::{Backend, LaneVector};
#[cfg(any(feature = "rvv", all(feature = "neon", target_arch = "aarch64")))]
pub use simd::types::*;
