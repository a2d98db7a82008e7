use clap::Args;
use eyre::{Context, Result};

#[derive(Args)]
pub struct ToolboxCommand {}

impl ToolboxCommand {
    /// Run the toolbox command
    pub fn run(&self) -> Result<()> {
        let toolbox = blockpy_codegen_python::toolbox();
        let json =
            serde_json::to_string_pretty(&toolbox).wrap_err("Failed to serialize toolbox")?;
        println!("{json}");
        Ok(())
    }
}
