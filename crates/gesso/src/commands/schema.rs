//! Schema command - Print the JSON Schema for `gesso.config.json`

use clap::Args;

use crate::config::GESSO_CONFIG_SCHEMA;
use crate::errors::CliError;

#[derive(Args)]
pub struct SchemaArgs {}

pub fn run(_args: SchemaArgs) -> Result<(), CliError> {
    println!("{GESSO_CONFIG_SCHEMA}");
    Ok(())
}
