//! Merge command - Fold attribute sets from JSON files into one

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use gesso_relief::{render_attrs, AttributeSet};
use gesso_weave::{AttributeMerger, DisplayOrder, MergeOptions};

use super::read_attrs;
use crate::config::GessoConfig;
use crate::errors::CliError;

#[derive(Args)]
pub struct MergeArgs {
    /// JSON attribute files, lowest priority first (`-` reads stdin)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Order keys and class tokens are written in
    #[arg(long, value_enum, default_value_t = Order::Source)]
    pub order: Order,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `name="value"` pairs
    Html,
    /// The merged set as a JSON object
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Lowest-priority source first
    Source,
    /// Highest-priority source first
    HighestFirst,
}

impl From<Order> for DisplayOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Source => DisplayOrder::SourceOrder,
            Order::HighestFirst => DisplayOrder::HighestFirst,
        }
    }
}

pub fn run(args: MergeArgs, config: &GessoConfig) -> Result<(), CliError> {
    let sources = args
        .files
        .iter()
        .map(|path| read_attrs(path))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(sources = sources.len(), "merging attribute sets");

    let output = merge_sources(&config.merger(), &sources, args.order, args.format)?;
    println!("{output}");
    Ok(())
}

fn merge_sources(
    merger: &AttributeMerger,
    sources: &[AttributeSet],
    order: Order,
    format: OutputFormat,
) -> Result<String, CliError> {
    let refs: Vec<&AttributeSet> = sources.iter().collect();
    let merged = merger.merge_with(
        &refs,
        MergeOptions {
            display: order.into(),
        },
    )?;

    Ok(match format {
        OutputFormat::Html => render_attrs(&merged)?.trim_start().to_string(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&merged.to_json()).unwrap_or_default()
        }
    })
}
