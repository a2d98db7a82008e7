use std::fs;
use std::path::PathBuf;

use blockpy_codegen_python::PythonGenerator;
use blockpy_ir::Program;
use clap::Args;
use eyre::{Context, Result};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the saved block program (workspace JSON)
    pub program: PathBuf,

    /// Write the Python source here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let source = fs::read_to_string(&self.program)
            .wrap_err_with(|| format!("Failed to read {}", self.program.display()))?;
        let program = Program::from_json(&source)
            .wrap_err_with(|| format!("Failed to parse {}", self.program.display()))?;

        let code = PythonGenerator::new()
            .generate(&program)
            .wrap_err("Failed to generate code")?;

        match &self.output {
            Some(path) => {
                fs::write(path, &code)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                println!("Generated: {}", path.display());
            }
            None => print!("{code}"),
        }

        Ok(())
    }
}
