mod check;
mod generate;
mod toolbox;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use toolbox::ToolboxCommand;

#[derive(Parser)]
#[command(name = "blockpy")]
#[command(version)]
#[command(about = "Generate Python source from saved block programs")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Toolbox(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Python from a saved block program
    Generate(GenerateCommand),

    /// Validate a saved block program without generating code
    Check(CheckCommand),

    /// Print the editor toolbox configuration
    Toolbox(ToolboxCommand),
}
