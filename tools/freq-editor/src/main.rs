// Command line front end: open a signal, edit it in the DCT domain, save the result

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use freq::{open_signal, Signal, TransformOptions};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "freq-editor", version, about = "Edit images and audio in the DCT domain")]
struct Cli {
    /// Directory the result is written to
    #[arg(short, long, global = true, default_value = ".")]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Save the histogram-expanded magnitude spectrum of an image
    Spectrum { path: PathBuf },
    /// Butterworth low-pass filter, then reconstruct
    Filter {
        path: PathBuf,
        #[arg(short, long)]
        cutoff: usize,
        #[arg(short = 'n', long)]
        order: u32,
    },
    /// Keep only the largest coefficients, then reconstruct
    Compress {
        path: PathBuf,
        #[arg(short, long)]
        retain: usize,
    },
    /// Forward and inverse transform with no filter
    Roundtrip { path: PathBuf },
}

impl Command {
    fn path(&self) -> &Path {
        match self {
            Command::Spectrum { path }
            | Command::Filter { path, .. }
            | Command::Compress { path, .. }
            | Command::Roundtrip { path } => path,
        }
    }

    fn options(&self) -> TransformOptions {
        match *self {
            Command::Spectrum { .. } => TransformOptions::new().histogram(true),
            Command::Filter { cutoff, order, .. } => {
                TransformOptions::new().cut_frequency(cutoff).order(order)
            }
            Command::Compress { retain, .. } => TransformOptions::new().cut_frequency(retain),
            Command::Roundtrip { .. } => TransformOptions::new(),
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf> {
    if !cli.output_dir.is_dir() {
        bail!("output directory {} does not exist", cli.output_dir.display());
    }

    let path = cli.command.path();
    let mut signal: Box<dyn Signal> =
        open_signal(path).with_context(|| format!("failed to open {}", path.display()))?;
    if matches!(cli.command, Command::Spectrum { .. }) && !signal.supports_spectrum() {
        bail!("{} has no spectrum view, only images do", path.display());
    }

    let grid = signal
        .forward(&cli.command.options())
        .context("forward transform failed")?;
    info!("{} coefficients labelled {}", grid.len(), grid.label());

    match cli.command {
        Command::Spectrum { .. } => signal.visualize(grid)?,
        _ => signal.inverse(grid).context("inverse transform failed")?,
    }

    Ok(signal.save(&cli.output_dir)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let written = run(&cli)?;
    println!("{}", written.display());
    Ok(())
}
