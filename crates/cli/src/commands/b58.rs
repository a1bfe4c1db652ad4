//! Base58 command.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use svmcodec_base58::{Width, MAX_ENCODED_LEN_32};

#[derive(Args)]
pub struct B58Args {
    #[command(subcommand)]
    command: B58Command,
}

#[derive(Subcommand)]
enum B58Command {
    /// Encode a 32 or 64 byte hex value
    Encode {
        /// Value in hex (with or without 0x prefix)
        hex: String,
    },
    /// Decode a base58 key or signature to hex
    Decode {
        /// Base58 text
        text: String,

        /// Expected width in bytes (32 or 64); inferred from the length if omitted
        #[arg(short, long)]
        width: Option<usize>,
    },
}

pub fn run(args: B58Args) -> Result<()> {
    match args.command {
        B58Command::Encode { hex } => {
            let encoded = encode_hex(&hex)?;
            println!("{}", encoded.bright_yellow());
        }
        B58Command::Decode { text, width } => {
            let (width, bytes) = decode_text(&text, width)?;
            println!("{}", format!("0x{}", hex::encode(&bytes)).bright_yellow());
            println!("  {} {}", "Width:".bold(), width);
        }
    }
    Ok(())
}

fn encode_hex(input: &str) -> Result<String> {
    let input = input.strip_prefix("0x").unwrap_or(input);
    let bytes = hex::decode(input).context("Invalid hex input")?;
    svmcodec_base58::encode(&bytes).context("Cannot encode value")
}

fn decode_text(text: &str, width: Option<usize>) -> Result<(Width, Vec<u8>)> {
    let width = match width {
        Some(len) => Width::from_len(len)?,
        // The two length ranges do not overlap.
        None if text.len() <= MAX_ENCODED_LEN_32 => Width::W32,
        None => Width::W64,
    };
    let bytes = svmcodec_base58::decode(text, width)
        .with_context(|| format!("Cannot decode {:?} as a {} value", text, width))?;
    Ok((width, bytes))
}
