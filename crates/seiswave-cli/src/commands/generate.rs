//! Wavelet synthesis command.

use anyhow::Context;
use clap::Args;
use seiswave_analysis::{magnitude_spectrum, rms};
use seiswave_core::WaveletResult;
use seiswave_io::{WaveletResponse, write_csv};
use std::io::Write;
use std::path::PathBuf;

use super::common::{OutputFormat, WaveletArgs, load_settings, open_output, warn_out_of_range};

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    wavelet: WaveletArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Include the magnitude spectrum (json) or a spectrum summary (table)
    #[arg(long)]
    spectrum: bool,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let (params, dt) = args.wavelet.resolve(&settings)?;
    warn_out_of_range(&params, dt);

    let wavelet = settings.engine().generate(&params, dt)?;
    let mut out = open_output(args.output.as_deref())?;

    match args.format {
        OutputFormat::Table => print_table(&mut out, &wavelet, args.spectrum)?,
        OutputFormat::Csv => {
            if args.spectrum {
                tracing::warn!(
                    "--spectrum is ignored for csv; use `seiswave spectrum --format csv`"
                );
            }
            write_csv(&mut out, &wavelet)?;
        }
        OutputFormat::Json => {
            WaveletResponse::new(&wavelet, args.spectrum).write_json(&mut out, true)?;
            writeln!(out)?;
        }
    }
    out.flush().context("failed to write output")?;

    if let Some(path) = &args.output {
        eprintln!("Wrote {} samples to {}", wavelet.len(), path.display());
    }
    Ok(())
}

fn print_table(
    out: &mut dyn Write,
    wavelet: &WaveletResult,
    with_spectrum: bool,
) -> anyhow::Result<()> {
    let start = wavelet.times().first().copied().unwrap_or_default();
    let end = wavelet.times().last().copied().unwrap_or_default();

    writeln!(out, "{} wavelet", wavelet.kind().name())?;
    writeln!(
        out,
        "  {} samples, dt = {} s ({} Hz), t = [{start:.6}, {end:.6}] s",
        wavelet.len(),
        wavelet.dt(),
        wavelet.sample_rate()
    )?;
    if let Some(peak) = wavelet.peak() {
        writeln!(
            out,
            "  peak {:.6} at t = {:.6} s (sample {})",
            peak.amplitude, peak.time, peak.index
        )?;
    }
    writeln!(out, "  rms {:.6}", rms(wavelet.amplitudes()))?;
    if with_spectrum {
        let spectrum = magnitude_spectrum(wavelet);
        if let Some((freq, mag)) = spectrum.peak() {
            writeln!(out, "  spectral peak {mag:.6} at {freq:.3} Hz")?;
        }
        writeln!(out, "  spectral centroid {:.3} Hz", spectrum.centroid())?;
    }
    writeln!(out)?;
    writeln!(out, "{:>14} {:>16}", "time_s", "amplitude")?;
    for (t, a) in wavelet.iter() {
        writeln!(out, "{t:>14.6} {a:>16.8e}")?;
    }
    Ok(())
}
