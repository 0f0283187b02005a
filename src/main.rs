//! Garb CLI - Command-line tool for converting GTA V outfit files.
//!
//! This is the main entry point for the garb command-line application.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use garb::prelude::*;

/// Garb - GTA V outfit file converter
#[derive(Parser)]
#[command(name = "garb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the format of an outfit file
    Detect {
        /// Path to the outfit file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Convert a single outfit file
    Convert {
        /// Path to the outfit file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, env = "OUTPUT_FOLDER", default_value = "converted")]
        output: PathBuf,

        /// Force the source format instead of detecting it
        #[arg(short, long)]
        source: Option<Format>,

        /// Target format (defaults to YimMenu)
        #[arg(short, long)]
        target: Option<Format>,
    },

    /// Convert multiple outfit files at once
    Batch {
        /// Paths to the outfit files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, env = "OUTPUT_FOLDER", default_value = "converted")]
        output: PathBuf,

        /// Force the source format instead of detecting it
        #[arg(short, long)]
        source: Option<Format>,

        /// Target format (defaults to YimMenu)
        #[arg(short, long)]
        target: Option<Format>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { input } => {
            cmd_detect(&input)?;
        }
        Commands::Convert {
            input,
            output,
            source,
            target,
        } => {
            cmd_convert(&input, &output, Options { source, target })?;
        }
        Commands::Batch {
            inputs,
            output,
            source,
            target,
        } => {
            cmd_batch(&inputs, &output, Options { source, target })?;
        }
    }

    Ok(())
}

fn cmd_detect(input: &PathBuf) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;

    match detect(input, &data) {
        Some(format) => println!("{}", format),
        None => println!("unknown"),
    }

    Ok(())
}

fn cmd_convert(input: &PathBuf, output: &PathBuf, options: Options) -> Result<()> {
    let converted = convert_one(input, &options)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    for warning in &converted.warnings {
        eprintln!("Warning: {}", warning);
    }

    let written = write_converted(output, input, &converted)
        .context("Failed to write output file")?;

    println!(
        "Converted {} -> {}: {}",
        converted.source,
        converted.target,
        written.display()
    );

    Ok(())
}

fn cmd_batch(inputs: &[PathBuf], output: &PathBuf, options: Options) -> Result<()> {
    println!("Converting {} files to {}...", inputs.len(), options.target());

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let report = convert_batch_with(inputs, output, &options, |_, _| pb.inc(1));

    pb.finish_with_message("Done");

    println!(
        "Converted {} of {} files to {}",
        report.succeeded.len(),
        report.total(),
        report.output_dir.display()
    );

    if !report.is_all_ok() {
        eprintln!("\nFailed files:");
        for (path, error) in &report.failed {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    Ok(())
}
