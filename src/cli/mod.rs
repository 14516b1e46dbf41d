// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and dispatches to the
// application layer. Printing the final summary happens here;
// all pipeline work is delegated to Layer 2.
//
// Two commands are supported:
//   1. `prepare` — raw sentences → corrupted/original pair CSV
//   2. `noise`   — pair CSV → noised pair CSV

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, NoiseArgs, PrepareArgs};

#[derive(Parser, Debug)]
#[command(
    name = "denoise-prep",
    version,
    about = "Prepare corrupted/original sentence pairs for denoising language-model training."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Noise(args)   => run_noise(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    tracing::info!("Preparing corpus from: {}", args.input);

    let output   = args.output.clone();
    let use_case = PrepareUseCase::new(args.into());
    let report   = use_case.execute()?;

    println!("Skipped: {}", report.skipped);
    println!(
        "Wrote {} pairs to {} ({} lines read, {} blank)",
        report.kept, output, report.read, report.blank
    );
    if report.noised > 0 {
        println!("Wrote {} noised pairs", report.noised);
    }
    Ok(())
}

fn run_noise(args: NoiseArgs) -> Result<()> {
    use crate::application::noise_use_case::NoiseUseCase;

    let output  = args.output.clone();
    let written = NoiseUseCase::new(args.into()).execute()?;

    println!("Wrote {} noised pairs to {}", written, output);
    Ok(())
}
