//! VM input block command.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use svmcodec_sealevel::{AccountParam, Params};
use tracing::info;

#[derive(Args)]
pub struct ParamsArgs {
    #[command(subcommand)]
    command: ParamsCommand,
}

#[derive(Subcommand)]
enum ParamsCommand {
    /// Build a VM input block from a JSON params file
    Serialize {
        /// Params file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the block
        #[arg(short, long, default_value = "block.bin")]
        output: PathBuf,
    },
    /// Apply a VM-modified block to the params it was built from
    Update {
        /// Original params file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Block written back by the VM
        #[arg(short, long)]
        block: PathBuf,

        /// Where to write the updated params (printed if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run(args: ParamsArgs) -> Result<()> {
    match args.command {
        ParamsCommand::Serialize { input, output } => {
            let (params, len) = serialize_file(&input, &output)?;
            println!(
                "{}  Wrote {} bytes to {}",
                "✓".green().bold(),
                len.to_string().bright_cyan(),
                output.display().to_string().bright_black()
            );
            print_accounts(&params);
            Ok(())
        }
        ParamsCommand::Update {
            input,
            block,
            output,
        } => {
            let params = update_file(&input, &block)?;
            let json = serde_json::to_string_pretty(&params)?;
            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!(
                        "{}  Saved updated params to: {}",
                        "✓".green().bold(),
                        path.display().to_string().bright_black()
                    );
                }
                None => println!("{}", json),
            }
            Ok(())
        }
    }
}

fn load_params(path: &Path) -> Result<Params> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read params file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse params file: {}", path.display()))
}

fn serialize_file(input: &Path, output: &Path) -> Result<(Params, usize)> {
    let mut params = load_params(input)?;
    let block = params.serialize().context("Failed to serialize params")?;
    fs::write(output, &block)
        .with_context(|| format!("Failed to write block: {}", output.display()))?;
    info!(path = %output.display(), len = block.len(), "wrote VM input block");
    Ok((params, block.len()))
}

fn update_file(input: &Path, block_path: &Path) -> Result<Params> {
    let mut params = load_params(input)?;
    // Padding is not part of the JSON; laying the block out again recovers it.
    params.serialize().context("Failed to serialize params")?;

    let block = fs::read(block_path)
        .with_context(|| format!("Failed to read block: {}", block_path.display()))?;
    params
        .update(&block)
        .context("VM output does not match the original params")?;
    Ok(params)
}

fn print_accounts(params: &Params) {
    println!();
    println!("{}", "Accounts:".bold());
    for (i, account) in params.accounts.iter().enumerate() {
        match account {
            AccountParam::Primary(info) => println!(
                "  {:>3}  {}  lamports={} data={} padding={}",
                i,
                info.key.to_string().bright_yellow(),
                info.lamports,
                info.data.len(),
                info.padding().unwrap_or_default()
            ),
            AccountParam::Duplicate { index } => {
                println!("  {:>3}  {} {}", i, "duplicate of".bright_black(), index)
            }
        }
    }
    println!("  {} {}", "Program:".bold(), params.program_id.to_string().bright_yellow());
}
