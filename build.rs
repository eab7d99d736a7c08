use std::env;

// Vector extensions the RVV backend can emit instructions for
#[derive(PartialEq, Eq, Debug)]
struct VectorFeature {
    arch: &'static str,
    target_feature: &'static str,
    cfg_flag: &'static str,
    detected: bool,
}

impl VectorFeature {
    // Only RVV needs a cfg of its own: the neon backend keys off `target_arch` directly
    // and the rvv backend falls back to its instruction model when no vector unit is usable.
    fn features() -> Vec<VectorFeature> {
        vec![VectorFeature {
            arch: "riscv64",
            target_feature: "v",
            cfg_flag: "rvv_asm",
            detected: false,
        }]
    }
}

// Reads what the *target* supports, not the host. Cross builds for a riscv64 board
// with `-C target-feature=+v` get real vector instructions.
fn detect_target_features(features: &mut [VectorFeature]) {
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let target_features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

    for feature in features.iter_mut() {
        feature.detected = arch == feature.arch
            && target_features
                .split(',')
                .any(|name| name == feature.target_feature);
    }
}

fn apply(features: &[VectorFeature]) {
    for feature in features {
        println!("cargo::rustc-check-cfg=cfg({})", feature.cfg_flag);

        if feature.detected {
            println!("cargo:rustc-cfg={}", feature.cfg_flag);
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut features = VectorFeature::features();

    detect_target_features(&mut features);

    apply(&features);
}
