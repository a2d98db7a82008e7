use std::fs;
use std::path::PathBuf;

use blockpy_ir::Program;
use clap::Args;
use eyre::{Context, Result, bail};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the saved block program (workspace JSON)
    pub program: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let source = fs::read_to_string(&self.program)
            .wrap_err_with(|| format!("Failed to read {}", self.program.display()))?;
        let program = Program::from_json(&source)
            .wrap_err_with(|| format!("Failed to parse {}", self.program.display()))?;

        let total = program.all_blocks().count();
        println!("Blocks: {total}");
        println!("Variables: {}", program.variables.len());

        let unsupported: Vec<&str> = program
            .all_blocks()
            .filter(|b| !b.kind.is_supported())
            .map(|b| b.kind.as_str())
            .collect();

        if !unsupported.is_empty() {
            println!();
            println!("Unsupported blocks:");
            for kind in &unsupported {
                println!("  - {kind}");
            }
            bail!("{} unsupported block(s)", unsupported.len());
        }

        Ok(())
    }
}
