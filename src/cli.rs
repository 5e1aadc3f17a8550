//! Command-line interface definitions and subcommand handlers.

use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::camera::{
    select, Backend, BackendError, CameraEnumerator, CameraLister, CameraSelector,
    NokhwaEnumerator, SelectError,
};
use crate::config::{default_path, Config, ConfigError};
use crate::output::{render, OutputFormat};

// ==================== CLI Arguments ====================

/// List the cameras attached to this machine
#[derive(Parser, Debug)]
#[command(name = "camera-lister")]
#[command(version, about = "List the cameras attached to this machine", long_about = None)]
#[command(after_help = "EXAMPLES:
    camera-lister                         # List cameras
    camera-lister list --format json      # List cameras as JSON
    camera-lister find usb                # Show the first camera named like 'usb'
    camera-lister config init             # Create default config file")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    List(ListArgs),
    /// Show one camera by index or by part of its name
    Find {
        /// Camera index or name
        selector: CameraSelector,
        /// Camera API to query
        #[arg(long)]
        backend: Option<Backend>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    /// Output format
    #[arg(long)]
    pub format: Option<OutputFormat>,
    /// Camera API to query
    #[arg(long)]
    pub backend: Option<Backend>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

/// Anything that can make the binary exit non-zero.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

// ==================== Subcommand Handlers ====================

/// Dispatch the parsed command line, writing results to stdout.
pub fn run(args: Args) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let config_path = args.config.as_deref();

    match args.command.unwrap_or_else(|| Command::List(ListArgs::default())) {
        Command::List(list) => {
            let config = Config::load(config_path)?;
            let backend = list.backend.unwrap_or(config.camera.backend);
            let format = list.format.unwrap_or(config.output.format);
            let lister = CameraLister::new(NokhwaEnumerator::new(backend));
            list_cameras(&lister, format, &mut out)
        }
        Command::Find { selector, backend } => {
            let config = Config::load(config_path)?;
            let backend = backend.unwrap_or(config.camera.backend);
            let lister = CameraLister::new(NokhwaEnumerator::new(backend));
            find_camera(&lister, &selector, &mut out)
        }
        Command::Config { action } => handle_config_action(action, config_path, &mut out),
    }
}

/// Enumerate cameras and print them in `format`.
pub fn list_cameras<E, W>(
    lister: &CameraLister<E>,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError>
where
    E: CameraEnumerator,
    AppError: From<E::Error>,
    W: Write,
{
    let cameras = lister.enumerate_cameras()?;
    log::info!("found {} camera(s)", cameras.len());
    render(out, &cameras, format)?;
    Ok(())
}

/// Enumerate cameras and print the first one `selector` matches.
pub fn find_camera<E, W>(
    lister: &CameraLister<E>,
    selector: &CameraSelector,
    out: &mut W,
) -> Result<(), AppError>
where
    E: CameraEnumerator,
    AppError: From<E::Error>,
    W: Write,
{
    let cameras = lister.enumerate_cameras()?;
    let camera = select(&cameras, selector)?;
    writeln!(out, "{}", camera)?;
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action<W: Write>(
    action: ConfigAction,
    path: Option<&Path>,
    out: &mut W,
) -> Result<(), AppError> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(config_path.as_path()))?;
            writeln!(out, "Current configuration:")?;
            writeln!(out, "  Backend: {}", config.camera.backend)?;
            writeln!(out, "  Output format: {}", config.output.format)?;
            writeln!(out)?;

            let state = if config_path.exists() { "exists" } else { "not found" };
            writeln!(out, "Config file: {} ({})", config_path.display(), state)?;
        }
        ConfigAction::Init => {
            Config::init(&config_path)?;
            writeln!(out, "Created config file: {}", config_path.display())?;
        }
    }
    Ok(())
}
