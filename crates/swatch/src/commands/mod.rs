pub mod ase;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle ASE swatch files
    Ase {
        #[command(subcommand)]
        command: ase::AseCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Ase { command } => command.handle(),
        }
    }
}
