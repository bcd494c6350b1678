use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use std::{fs::File, io::BufReader, io::Write, path::PathBuf};
use swatch_ase::{encode, Document};
use tracing::info;

use super::create_output;

#[derive(Args)]
pub struct ImportArgs {
    /// An input JSON file, as produced by `export`
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// A target ASE file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl ImportArgs {
    pub fn handle(&self) -> Result<()> {
        let f = File::open(&self.input)
            .into_diagnostic()
            .context(format!("path: {}", &self.input.display()))?;

        let parsed: Document = serde_json::from_reader(BufReader::new(f))
            .into_diagnostic()
            .context(format!("parsing {}", &self.input.display()))?;

        // The header always follows the content, whatever the JSON says
        let document = Document::new(parsed.colors, parsed.groups);

        let bytes = encode(&document, Vec::<u8>::new()).context("encoding document")?;

        info!(
            "writing {} with {} blocks",
            self.file.display(),
            document.header.blocks
        );
        let mut out = create_output(&self.file, self.overwrite)?;
        out.write_all(&bytes)
            .into_diagnostic()
            .context(format!("writing {}", self.file.display()))?;

        Ok(())
    }
}
