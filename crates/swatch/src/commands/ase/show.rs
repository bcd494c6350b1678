use clap::Args;
use miette::Result;
use owo_colors::{OwoColorize, Stream};
use std::path::PathBuf;
use swatch_ase::Color;

use super::{format_values, open_document, preview_rgb};

#[derive(Args)]
pub struct ShowArgs {
    /// An input ASE file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Pool grouped colors with the ungrouped ones
    #[arg(long, default_value_t = false)]
    flatten: bool,
}

fn print_color(color: &Color, indent: usize) {
    let swatch = match preview_rgb(color) {
        Some((r, g, b)) => format!(
            "{}",
            "██".if_supports_color(Stream::Stdout, |t| t.truecolor(r, g, b))
        ),
        None => "  ".to_string(),
    };

    println!(
        "{:indent$}{} {} {} [{}] {}",
        "",
        swatch,
        color.name.bold(),
        color.model,
        format_values(color),
        color.kind.dimmed(),
    );
}

impl ShowArgs {
    pub fn handle(&self) -> Result<()> {
        let document = open_document(&self.file, self.flatten)?;

        println!(
            "{} ({} blocks)",
            self.file.display().blue(),
            document.header.blocks
        );

        for color in &document.colors {
            print_color(color, 2);
        }

        for group in &document.groups {
            println!("  {} ({} colors)", group.name.underline(), group.colors.len());
            for color in &group.colors {
                print_color(color, 4);
            }
        }

        Ok(())
    }
}
