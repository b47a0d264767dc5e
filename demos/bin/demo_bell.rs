//! Bell State Demo
//!
//! Prepares `(|00⟩ + |11⟩)/√2`, prints the amplitudes and samples it.
//!
//! Configuration is read from the file named by `QCE_CONFIG` (if set) and
//! `QCE_*` environment variables. Set `RUST_LOG=debug` to see the simulator's
//! events.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qce_demos::{bell_register, print_counts, print_header, print_result, print_section};
use qce_sim::{DenseSimulator, SimulatorConfig};

const SHOTS: usize = 1000;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = std::env::var_os("QCE_CONFIG").map(PathBuf::from);
    let config = SimulatorConfig::load(config_path.as_deref())
        .context("failed to load simulator configuration")?;
    info!(?config, "Loaded configuration");

    print_header("Bell state");

    let reg = bell_register()?;
    let simulator = DenseSimulator::with_config(config.clone())?;
    let solution = reg.simulate_with(&simulator)?;

    print_section("Amplitudes");
    for (index, amp) in solution.amplitudes().iter().enumerate() {
        print_result(&format!("|{}⟩", solution.bitstring(index)), amp);
    }

    print_section(&format!("Sampling ({SHOTS} shots)"));
    let mut rng = config.rng();
    let counts = solution.sample_counts(SHOTS, &mut rng);
    print_counts(&counts);

    Ok(())
}
