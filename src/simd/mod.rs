pub mod api;

#[cfg(target_arch = "aarch64")]
pub mod neon;

pub mod rvv;

pub mod scalar;

pub mod traits;

pub mod types;

/// Backend the Neon-named free functions route to.
#[cfg(feature = "rvv")]
pub type ActiveBackend = rvv::Rvv;

/// Backend the Neon-named free functions route to.
#[cfg(all(feature = "neon", not(feature = "rvv"), target_arch = "aarch64"))]
pub type ActiveBackend = neon::Neon;
