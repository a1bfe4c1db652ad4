//! Base58 hot path timings.

use anyhow::{ensure, Result};
use clap::Args;
use colored::Colorize;
use std::hint::black_box;
use std::time::{Duration, Instant};
use svmcodec_base58::{decode_32, decode_64, encode_32, encode_64};

#[derive(Args)]
pub struct BenchArgs {
    /// Calls per measured operation
    #[arg(short = 'n', long, default_value_t = 100_000)]
    iterations: u32,
}

struct BenchResult {
    name: &'static str,
    iterations: u32,
    total: Duration,
}

impl BenchResult {
    fn ns_per_op(&self) -> f64 {
        self.total.as_nanos() as f64 / self.iterations as f64
    }

    fn print(&self) {
        println!(
            "  {:<12} {:>9} iters {:>10.1} ns/op",
            self.name.bright_cyan(),
            self.iterations,
            self.ns_per_op()
        );
    }
}

fn measure(name: &'static str, iterations: u32, mut op: impl FnMut()) -> BenchResult {
    // Warm-up.
    for _ in 0..iterations.min(1_000) {
        op();
    }
    let start = Instant::now();
    for _ in 0..iterations {
        op();
    }
    BenchResult {
        name,
        iterations,
        total: start.elapsed(),
    }
}

fn run_all(iterations: u32) -> Result<Vec<BenchResult>> {
    ensure!(iterations > 0, "iterations must be positive");

    // Same inputs as the encoder vectors: 0x00, 0x01, ... 0x3F.
    let mut bytes_64 = [0u8; 64];
    for (i, b) in bytes_64.iter_mut().enumerate() {
        *b = i as u8;
    }
    let mut bytes_32 = [0u8; 32];
    bytes_32.copy_from_slice(&bytes_64[..32]);
    let text_32 = encode_32(&bytes_32);
    let text_64 = encode_64(&bytes_64);

    Ok(vec![
        measure("encode_32", iterations, || {
            black_box(encode_32(black_box(&bytes_32)));
        }),
        measure("decode_32", iterations, || {
            let _ = black_box(decode_32(black_box(&text_32)));
        }),
        measure("encode_64", iterations, || {
            black_box(encode_64(black_box(&bytes_64)));
        }),
        measure("decode_64", iterations, || {
            let _ = black_box(decode_64(black_box(&text_64)));
        }),
    ])
}

pub fn run(args: BenchArgs) -> Result<()> {
    println!("{}", "Base58 codec".bold());
    for result in run_all(args.iterations)? {
        result.print();
    }
    println!(
        "{}",
        "  (build with --release for representative numbers)".bright_black()
    );
    Ok(())
}
