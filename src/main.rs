//! `rhal`: runs the correctness, performance and verification harnesses against the
//! backend selected at build time.
//!
//! ```text
//! rhal [correctness] [performance] [verify] [--seed N] [--samples N] [--iterations N]
//! ```

use std::process::ExitCode;

use log::{error, info};

use rhal::harness::{run_correctness, run_performance, verify_active, HarnessConfig, Mode};
use rhal::simd::ActiveBackend;
use rhal::{Backend, Result};

fn run() -> Result<bool> {
    let (config, modes) = HarnessConfig::from_env()?.parse_args(std::env::args().skip(1))?;

    info!("backend: {}, {:?}", ActiveBackend::NAME, config);

    let mut ok = true;

    for mode in modes {
        match mode {
            Mode::Correctness => {
                let report = run_correctness::<ActiveBackend>();
                println!("{report}");
                ok &= report.failed() == 0;
            }
            Mode::Performance => {
                let report = run_performance::<ActiveBackend>(&config);
                print!("{report}");
            }
            Mode::Verify => {
                let checked = verify_active(&config)?;
                println!(
                    "Verified {checked} random vector pairs per operation (seed {:#x})",
                    config.seed
                );
            }
        }
    }

    Ok(ok)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("correctness cases failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
