//! Rendering camera lists for the terminal.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::io::{self, Write};

use crate::camera::CameraDescriptor;

/// How `list` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON array of `{index, name}` objects
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Write the camera list in the requested format.
pub fn render<W: Write>(
    out: &mut W,
    cameras: &[CameraDescriptor],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(out, cameras),
        OutputFormat::Json => render_json(out, cameras),
    }
}

fn render_text<W: Write>(out: &mut W, cameras: &[CameraDescriptor]) -> io::Result<()> {
    if cameras.is_empty() {
        writeln!(out, "No cameras found.")?;
        writeln!(out)?;
        writeln!(out, "Make sure your camera is connected and permissions are granted.")?;
        writeln!(
            out,
            "On macOS, grant access in System Settings > Privacy & Security > Camera."
        )?;
        return Ok(());
    }

    writeln!(out, "Available cameras:")?;
    for camera in cameras {
        writeln!(out, "  {}", camera)?;
    }
    Ok(())
}

fn render_json<W: Write>(out: &mut W, cameras: &[CameraDescriptor]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, cameras)?;
    writeln!(out)
}
