//! Audio rendering command.

use clap::Args;
use seiswave_io::{PlaybackBuffer, WavSpec, write_wav};
use std::path::PathBuf;

use super::common::{WaveletArgs, load_settings, warn_out_of_range};

#[derive(Args)]
pub struct RenderArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    wavelet: WaveletArgs,

    /// Number of back-to-back repetitions (default from settings)
    #[arg(long)]
    loops: Option<usize>,

    /// Bit depth: 16, 24, or 32 (float); default from settings
    #[arg(long)]
    bits: Option<u16>,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let (params, dt) = args.wavelet.resolve(&settings)?;
    warn_out_of_range(&params, dt);

    let wavelet = settings.engine().generate(&params, dt)?;
    let loops = args.loops.unwrap_or(settings.loops);
    let bits = args.bits.unwrap_or(settings.bits_per_sample);

    let buffer = PlaybackBuffer::from_wavelet(&wavelet)?.looped(loops, settings.max_samples)?;
    write_wav(&args.output, &buffer, WavSpec::for_buffer(&buffer, bits))?;

    println!(
        "Rendered {} wavelet: {} samples at {} Hz ({:.3} s, {} loop{}) to {}",
        wavelet.kind().name(),
        buffer.len(),
        buffer.sample_rate(),
        buffer.duration_secs(),
        loops.max(1),
        if loops.max(1) == 1 { "" } else { "s" },
        args.output.display()
    );
    Ok(())
}
