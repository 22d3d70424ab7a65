//! Start-up helpers shared by the viewer and the runner.

use anyhow::{Context, Result};
use clap::Args;
use equilibrium::SimConfig;
use std::path::Path;

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Load a configuration file, or fall back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    match path {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(SimConfig::default()),
    }
}

/// Command-line overrides for the starting slider positions and seed.
#[derive(Args, Debug, Default, Clone)]
pub struct ParamOverrides {
    /// Temperature in kelvin (0-1000).
    #[arg(long)]
    pub temperature: Option<f32>,
    /// Activation energy (0-100).
    #[arg(long)]
    pub activation_energy: Option<f32>,
    /// Energy of the reactants A + B (0-100).
    #[arg(long)]
    pub reactant_energy: Option<f32>,
    /// Energy of the product AB (0-100).
    #[arg(long)]
    pub product_energy: Option<f32>,
    /// Fixed RNG seed for a reproducible run.
    #[arg(long, env = "EQUILIBRIUM_SEED")]
    pub seed: Option<u64>,
}

impl ParamOverrides {
    /// Apply the overrides and re-validate the result.
    pub fn apply(&self, mut config: SimConfig) -> Result<SimConfig> {
        // Unclamped on purpose: out-of-range values must fail validation.
        let params = &mut config.params;
        for (slot, value) in [
            (&mut params.temperature, self.temperature),
            (&mut params.activation_energy, self.activation_energy),
            (&mut params.reactant_energy, self.reactant_energy),
            (&mut params.product_energy, self.product_energy),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate().context("invalid command-line parameters")?;
        Ok(config)
    }
}
