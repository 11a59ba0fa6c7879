//! Magnitude spectrum command.

use anyhow::Context;
use clap::Args;
use seiswave_analysis::magnitude_spectrum;
use seiswave_io::{SpectrumData, write_spectrum_csv};
use std::io::Write;
use std::path::PathBuf;

use super::common::{OutputFormat, WaveletArgs, load_settings, open_output, warn_out_of_range};

#[derive(Args)]
pub struct SpectrumArgs {
    #[command(flatten)]
    wavelet: WaveletArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show magnitudes in dB (table only)
    #[arg(long)]
    db: bool,
}

pub fn run(args: SpectrumArgs) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let (params, dt) = args.wavelet.resolve(&settings)?;
    warn_out_of_range(&params, dt);

    let wavelet = settings.engine().generate(&params, dt)?;
    let spectrum = magnitude_spectrum(&wavelet);
    let mut out = open_output(args.output.as_deref())?;

    match args.format {
        OutputFormat::Table => {
            writeln!(
                out,
                "{} wavelet spectrum: {} bins, {:.4} Hz apart, Nyquist {} Hz",
                wavelet.kind().name(),
                spectrum.len(),
                spectrum.bin_width(),
                wavelet.nyquist()
            )?;
            if let Some((freq, mag)) = spectrum.peak() {
                writeln!(out, "  peak {mag:.6} at {freq:.3} Hz")?;
            }
            writeln!(out)?;

            if args.db {
                writeln!(out, "{:>14} {:>16}", "frequency_hz", "magnitude_db")?;
                for (f, db) in spectrum.frequencies().iter().zip(spectrum.magnitudes_db()) {
                    writeln!(out, "{f:>14.4} {db:>16.3}")?;
                }
            } else {
                writeln!(out, "{:>14} {:>16}", "frequency_hz", "magnitude")?;
                for (f, m) in spectrum.iter() {
                    writeln!(out, "{f:>14.4} {m:>16.8e}")?;
                }
            }
        }
        OutputFormat::Csv => write_spectrum_csv(&mut out, &spectrum)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &SpectrumData::from(spectrum))?;
            writeln!(out)?;
        }
    }
    out.flush().context("failed to write output")?;
    Ok(())
}
