use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use std::{io::Write, path::PathBuf};
use tracing::info;

use super::{create_output, open_document};

#[derive(Args)]
pub struct ExportArgs {
    /// An input ASE file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target JSON file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Pool grouped colors with the ungrouped ones
    #[arg(long, default_value_t = false)]
    flatten: bool,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl ExportArgs {
    pub fn handle(&self) -> Result<()> {
        let document = open_document(&self.file, self.flatten)?;

        let json = serde_json::to_string_pretty(&document)
            .into_diagnostic()
            .context("serializing document")?;

        info!("writing {}", self.output.display());
        let mut out = create_output(&self.output, self.overwrite)?;
        out.write_all(json.as_bytes())
            .into_diagnostic()
            .context(format!("writing {}", self.output.display()))?;

        Ok(())
    }
}
