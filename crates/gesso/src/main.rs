//! # gesso
//!
//! Gesso - Attribute merging and as-child rendering for server-rendered
//! components.
//!
//! ## Name Origin
//!
//! **Gesso** is the primer coat laid on a panel before any paint goes on.
//! This binary exposes the primer directly: merge attribute sets, graft
//! them onto markup, or render a component from the command line.

mod commands;
mod config;
mod errors;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "gesso")]
#[command(about = "Attribute merging and as-child rendering for server-rendered components", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file path (defaults to ./gesso.config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge attribute sets read from JSON files
    #[command(visible_alias = "weave")]
    Merge(commands::merge::MergeArgs),

    /// Merge component attributes onto the root of an HTML fragment
    Graft(commands::graft::GraftArgs),

    /// Render a component
    #[command(visible_alias = "atelier")]
    Render(commands::render::RenderArgs),

    /// Print the JSON Schema for gesso.config.json
    Schema(commands::schema::SchemaArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load_config(cli.config.as_deref());
    let result = match cli.command {
        Commands::Merge(args) => commands::merge::run(args, &config),
        Commands::Graft(args) => commands::graft::run(args, &config),
        Commands::Render(args) => commands::render::run(args, &config),
        Commands::Schema(args) => commands::schema::run(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
