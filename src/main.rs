use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use surface_brush::config::{ColorSpec, Config};
use surface_brush::input::{Editor, PointerEvent};

#[derive(Parser, Debug)]
#[command(name = "surface-brush")]
#[command(version, about = "Freehand brush stroke capture for edgeless canvases")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON pointer script and print the resulting surface
    Replay {
        /// Pointer script: a JSON array of {"kind", "x", "y"} events
        script: PathBuf,

        /// Config file to use instead of ~/.config/surface-brush/config.toml
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Override the brush line width
        #[arg(long, value_name = "WIDTH")]
        line_width: Option<f64>,

        /// Override the brush color (named color)
        #[arg(long, value_name = "COLOR")]
        color: Option<String>,

        /// Turn off surface editing (drags are ignored)
        #[arg(long, action = ArgAction::SetTrue)]
        disable_surface: bool,

        /// Write the surface JSON here instead of stdout
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Write the default config file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            script,
            config,
            line_width,
            color,
            disable_surface,
            output,
        } => {
            let mut config = match config {
                Some(path) => Config::load_from(&path)?,
                None => Config::load()?,
            };
            if let Some(width) = line_width {
                config.brush.line_width = width;
            }
            if let Some(name) = color {
                config.brush.default_color = ColorSpec::Name(name);
            }
            if disable_surface {
                config.features.enable_surface = false;
            }
            config.validate_and_clamp();

            replay(&config, script, output)
        }
        Command::InitConfig { force } => init_config(force),
    }
}

fn replay(config: &Config, script: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let script_str = fs::read_to_string(&script)
        .with_context(|| format!("Failed to read pointer script {}", script.display()))?;
    let events: Vec<PointerEvent> = serde_json::from_str(&script_str)
        .with_context(|| format!("Failed to parse pointer script {}", script.display()))?;

    let mut editor = Editor::from_config(config);
    for (index, event) in events.iter().enumerate() {
        editor
            .dispatch(event)
            .with_context(|| format!("Event #{index} ({:?}) failed", event.kind))?;
    }

    if editor.controller().session().is_dragging() {
        log::warn!("Pointer script ended mid-drag; the last stroke was left open");
    }
    log::info!(
        "Replayed {} events: {} elements, {} undo units, {} repaints",
        events.len(),
        editor.surface.len(),
        editor.history.committed(),
        editor.surface_updated.emitted()
    );

    let json = serde_json::to_string_pretty(&editor.surface)
        .context("Failed to serialize surface")?;
    match output {
        Some(path) => fs::write(&path, json)
            .with_context(|| format!("Failed to write surface to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    let config_path = Config::get_config_path()?;
    if config_path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save()?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
