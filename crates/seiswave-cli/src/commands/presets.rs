//! Preset management commands.
//!
//! Provides commands to list, show, save, and delete wavelet presets.

use anyhow::{Context, bail};
use clap::{Args, Subcommand};
use seiswave_config::{
    WaveletPreset, ensure_user_presets_dir, factory_presets, is_factory_preset, list_user_presets,
    preset_name_from_path, settings_path, user_presets_dir, validate_preset, validate_preset_name,
};
use seiswave_core::WaveletParams;

use super::common::{WaveletArgs, load_preset, load_settings};

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long)]
        factory: bool,

        /// Show only user presets
        #[arg(long)]
        user: bool,
    },

    /// Show details of a preset
    Show {
        /// Preset name or path
        name: String,
    },

    /// Save a wavelet configuration as a user preset
    Save {
        /// Name for the new preset
        name: String,

        #[command(flatten)]
        wavelet: WaveletArgs,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite if preset already exists
        #[arg(long)]
        force: bool,
    },

    /// Delete a user preset
    Delete {
        /// Preset name to delete
        name: String,
    },

    /// Show preset and settings locations
    Paths,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => list_presets(factory, user),
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Save {
            name,
            wavelet,
            description,
            force,
        } => save_preset(&name, &wavelet, description, force),
        PresetsCommand::Delete { name } => delete_preset(&name),
        PresetsCommand::Paths => {
            println!("User presets: {}", user_presets_dir().display());
            println!("Settings:     {}", settings_path().display());
            Ok(())
        }
    }
}

fn list_presets(factory_only: bool, user_only: bool) -> anyhow::Result<()> {
    if !user_only {
        println!("Factory Presets:");
        println!("================");
        for preset in factory_presets() {
            let desc = preset.description.as_deref().unwrap_or("");
            println!("  {:20} - {}", preset.name.to_lowercase(), desc);
        }
        println!();
    }

    if !factory_only {
        println!("User Presets:");
        println!("=============");
        let user_presets = list_user_presets();
        if user_presets.is_empty() {
            println!("  (none)");
            println!();
            println!(
                "  Create a preset with: seiswave presets save <name> <kind> [--frequency ...]"
            );
        } else {
            for path in user_presets {
                let name = preset_name_from_path(&path).unwrap_or_else(|| "unknown".to_string());
                match WaveletPreset::load(&path) {
                    Ok(preset) => {
                        let desc = preset.description.as_deref().unwrap_or("");
                        println!("  {name:20} - [{}] {desc}", preset.kind().id());
                    }
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "unreadable preset");
                        println!("  {name:20} - (error loading)");
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {desc}");
        println!();
    }

    println!("Wavelet:  {}", preset.kind().name());
    println!("dt:       {} s", preset.dt);
    for (param, value) in preset.wavelet.frequencies() {
        println!("{:9} {value} Hz", format!("{param}:"));
    }
    println!("duration: {} s", preset.wavelet.duration());
    if let WaveletParams::Berlage(p) = &preset.wavelet {
        println!("exponent: {}", p.exponent);
        println!("decay:    {} 1/s", p.decay);
        println!("phase:    {} rad", p.phase);
        let axis = if p.centered { "centered" } else { "causal" };
        println!("axis:     {axis}");
    }
    println!();

    match validate_preset(&preset) {
        Ok(()) => println!("Status: valid"),
        Err(e) => println!("Status: {e}"),
    }

    Ok(())
}

fn save_preset(
    name: &str,
    wavelet: &WaveletArgs,
    description: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    validate_preset_name(name)?;
    if is_factory_preset(name) {
        bail!("'{name}' is a factory preset name. Choose a different name.");
    }

    let dir = ensure_user_presets_dir()?;
    let preset_path = dir.join(format!("{name}.toml"));

    if preset_path.exists() && !force {
        bail!("Preset '{name}' already exists. Use --force to overwrite.");
    }

    let settings = load_settings()?;
    let (params, dt) = wavelet.resolve(&settings)?;
    let mut preset = WaveletPreset::new(name, params).with_dt(dt);
    preset.description = description;

    validate_preset(&preset).with_context(|| format!("preset '{name}' is not valid"))?;
    preset.save(&preset_path)?;

    println!("Saved preset '{name}' to {}", preset_path.display());
    Ok(())
}

fn delete_preset(name: &str) -> anyhow::Result<()> {
    validate_preset_name(name)?;
    if is_factory_preset(name) {
        bail!("Cannot delete factory preset '{name}'. Factory presets are built-in.");
    }

    let preset_path = user_presets_dir().join(format!("{name}.toml"));
    if !preset_path.is_file() {
        bail!("User preset '{name}' not found.");
    }

    std::fs::remove_file(&preset_path)
        .with_context(|| format!("failed to delete '{}'", preset_path.display()))?;
    println!("Deleted preset '{name}'.");
    Ok(())
}
