//! CLI commands module.

use anyhow::Result;
use clap::Subcommand;

mod b58;
mod bench;
mod params;

#[derive(Subcommand)]
pub enum Commands {
    /// Base58 encoding of keys and signatures
    B58(b58::B58Args),
    /// VM input block serialization
    Params(params::ParamsArgs),
    /// Time the base58 encode and decode paths
    Bench(bench::BenchArgs),
}

pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::B58(args) => b58::run(args),
        Commands::Params(args) => params::run(args),
        Commands::Bench(args) => bench::run(args),
    }
}
