#![deny(unsafe_code)]
//! CLI binary for the flowcanvas animation system.
//!
//! Subcommands:
//! - `render <preset>` — advance a preset N frames with a fixed pointer, write PNG
//! - `list` — print available presets and palettes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use flowcanvas_core::{Animator, Palette, Pointer, Scene, Take};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "flowcanvas", about = "Particle flow-field animation CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Advance a preset for N frames and write a PNG snapshot of the last one.
    Render {
        /// Preset name (e.g. "flowing" or "aura").
        preset: String,

        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: u32,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: u32,

        /// Number of frames to advance.
        #[arg(short, long, default_value_t = 300)]
        frames: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Stationary pointer x in surface space (omit for no pointer).
        #[arg(long)]
        pointer_x: Option<f64>,

        /// Stationary pointer y in surface space (omit for no pointer).
        #[arg(long)]
        pointer_y: Option<f64>,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,

        /// Animator parameter overrides as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available presets and palettes.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let presets = flowcanvas_render::list_presets();
            let palettes = Palette::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "presets": presets,
                    "palettes": palettes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Presets:");
                for name in presets {
                    println!("  {name}");
                }
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
            }
        }
        Command::Render {
            preset,
            width,
            height,
            frames,
            seed,
            pointer_x,
            pointer_y,
            output,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let pointer = match (pointer_x, pointer_y) {
                (Some(x), Some(y)) => Pointer::new(x, y),
                (None, None) => Pointer::OFFSCREEN,
                _ => {
                    return Err(CliError::Input(
                        "--pointer-x and --pointer-y must be given together".into(),
                    ))
                }
            };

            let take = Take {
                preset: preset.clone(),
                width: width as f64,
                height: height as f64,
                params: params.clone(),
                seed,
                frames,
                pointer,
            };
            take.validate()?;

            let mut animator =
                flowcanvas_render::from_name(&preset, take.width, take.height, seed, &params)?;
            let background = flowcanvas_render::background(&preset)?;

            let mut scene = Scene::new();
            for _ in 0..frames {
                scene = animator.advance(pointer)?;
            }

            flowcanvas_render::snapshot::write_png(&scene, width, height, background, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "take": take,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {preset} ({width}x{height}, {frames} frames, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
