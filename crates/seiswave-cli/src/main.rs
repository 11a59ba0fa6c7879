//! seiswave CLI - synthesize, inspect, and render seismic wavelets.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seiswave")]
#[command(author, version, about = "Seismic wavelet synthesis", long_about = None)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a wavelet and print or export its samples
    Generate(commands::generate::GenerateArgs),

    /// Print the magnitude spectrum of a wavelet
    Spectrum(commands::spectrum::SpectrumArgs),

    /// Render a wavelet to a WAV file for listening
    Render(commands::render::RenderArgs),

    /// Show the frequency bounds for a sample interval
    Limits(commands::limits::LimitsArgs),

    /// List, show, and save wavelet presets
    Presets(commands::presets::PresetsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Spectrum(args) => commands::spectrum::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Limits(args) => commands::limits::run(args),
        Commands::Presets(args) => commands::presets::run(args),
    }
}
