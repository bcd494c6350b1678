use itertools::Itertools;
use miette::{Context, IntoDiagnostic, Result};
use std::{fs::File, io::BufReader, path::Path};
use swatch_ase::{decode, Color, ColorModel, Document, GroupMode};
use tracing::info;

pub mod diff;
pub mod export;
pub mod import;
pub mod show;

#[derive(clap::Subcommand)]
pub enum AseCommands {
    /// Compare two ASE files
    Diff(diff::DiffArgs),
    /// Export an ASE file as JSON
    Export(export::ExportArgs),
    /// Create an ASE file from JSON
    Import(import::ImportArgs),
    /// Print the colors of an ASE file
    Show(show::ShowArgs),
}

impl AseCommands {
    pub fn handle(&self) -> Result<()> {
        match self {
            AseCommands::Diff(diff) => diff.handle(),
            AseCommands::Export(export) => export.handle(),
            AseCommands::Import(import) => import.handle(),
            AseCommands::Show(show) => show.handle(),
        }
    }
}

pub(crate) fn open_document(path: &Path, flatten: bool) -> Result<Document> {
    let f = File::open(path)
        .into_diagnostic()
        .context(format!("path: {}", path.display()))?;

    let mode = if flatten {
        GroupMode::Flattened
    } else {
        GroupMode::Nested
    };

    let document =
        decode(BufReader::new(f), mode).context(format!("reading {}", path.display()))?;
    info!(
        "read {} with {} blocks",
        path.display(),
        document.header.blocks
    );

    Ok(document)
}

pub(crate) fn create_output(path: &Path, overwrite: bool) -> Result<File> {
    if !overwrite {
        File::create_new(path)
            .into_diagnostic()
            .context(format!("creating {}", path.display()))
    } else {
        File::create(path)
            .into_diagnostic()
            .context(format!("creating {}", path.display()))
    }
}

/// Values of a color as a compact list
pub(crate) fn format_values(color: &Color) -> String {
    color.values.iter().join(", ")
}

/// Approximate screen color for previews, only for models that map directly onto RGB
pub(crate) fn preview_rgb(color: &Color) -> Option<(u8, u8, u8)> {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

    match (color.model, color.values.as_slice()) {
        (ColorModel::Rgb, [r, g, b]) => Some((channel(*r), channel(*g), channel(*b))),
        (ColorModel::Gray, [v]) => {
            let v = channel(*v);
            Some((v, v, v))
        }
        _ => None,
    }
}
