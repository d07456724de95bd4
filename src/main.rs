use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reflex_controller::{MachineConfig, Variant};
use reflex_core::RngSource;
use std::io;
use std::path::PathBuf;

mod driver;
mod input;
mod terminal;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    Enhanced,
    Simple,
}

impl From<VariantArg> for Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Enhanced => Variant::Enhanced,
            VariantArg::Simple => Variant::Simple,
        }
    }
}

/// Coin-operated reaction-time machine.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Cabinet program
    #[arg(long, value_enum, default_value = "enhanced")]
    variant: VariantArg,

    /// Seed for the random delays; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Replay a JSON event script instead of reading the keyboard
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = MachineConfig::new(args.variant.into());
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let rng = RngSource::new(rng);
    log::info!(
        "starting {:?} machine on {} ({})",
        config.variant,
        std::env::consts::OS,
        std::env::consts::ARCH
    );

    match args.script {
        Some(path) => {
            driver::run_script(&path, config, rng, io::stdout())?;
        }
        None => driver::run_interactive(config, rng)?,
    }
    Ok(())
}
