//! Frequency bounds command.

use clap::Args;
use seiswave_core::FrequencyLimits;

use super::common::{OutputFormat, load_settings};

#[derive(Args)]
pub struct LimitsArgs {
    /// Sample interval in seconds (default from settings)
    #[arg(long)]
    dt: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

pub fn run(args: LimitsArgs) -> anyhow::Result<()> {
    let dt = match args.dt {
        Some(dt) => dt,
        None => load_settings()?.default_dt,
    };
    let limits = FrequencyLimits::for_dt(dt)?;

    match args.format {
        OutputFormat::Table => {
            println!("dt = {dt} s");
            println!("  minimum frequency: {} Hz", limits.min);
            println!("  maximum frequency: {} Hz", limits.max);
            println!("  Nyquist:           {} Hz", limits.nyquist);
        }
        OutputFormat::Csv => {
            println!("dt_s,min_hz,max_hz,nyquist_hz");
            println!("{dt},{},{},{}", limits.min, limits.max, limits.nyquist);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&limits)?),
    }
    Ok(())
}
