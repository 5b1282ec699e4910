//! Render command - Render one component to HTML

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use gesso_atelier::{Alert, Atelier, Badge, Button, Component, Node, Selection};
use gesso_relief::AttributeSet;

use super::read_attrs;
use crate::config::GessoConfig;
use crate::errors::CliError;

#[derive(Args)]
pub struct RenderArgs {
    /// Component to render
    #[arg(value_enum)]
    pub component: ComponentKind,

    /// Variant picks, e.g. `--set variant=destructive --set size=sm`
    #[arg(long = "set", value_name = "AXIS=OPTION")]
    pub set: Vec<String>,

    /// JSON file with caller attributes
    #[arg(long)]
    pub attrs: Option<PathBuf>,

    /// Text content
    #[arg(long)]
    pub text: Option<String>,

    /// Render onto this HTML fragment's root element instead of the
    /// component's own tag
    #[arg(long, value_name = "FRAGMENT")]
    pub as_child: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ComponentKind {
    Button,
    Badge,
    Alert,
}

pub fn run(args: RenderArgs, config: &GessoConfig) -> Result<(), CliError> {
    let attrs = match &args.attrs {
        Some(path) => read_attrs(path)?,
        None => AttributeSet::new(),
    };
    let html = render_component(&config.atelier(), &args, attrs)?;
    println!("{html}");
    Ok(())
}

fn render_component(
    atelier: &Atelier,
    args: &RenderArgs,
    attrs: AttributeSet,
) -> Result<String, CliError> {
    let selection =
        Selection::parse_pairs(args.set.iter().map(String::as_str)).map_err(CliError::Usage)?;
    let content: Vec<Node> = args.text.iter().map(Node::text).collect();

    let node = match args.component {
        ComponentKind::Button => {
            let button = match &args.as_child {
                Some(fragment) => Button {
                    selection,
                    attrs,
                    children: vec![Node::raw(fragment)],
                    as_child: true,
                },
                None => Button {
                    selection,
                    attrs,
                    children: content,
                    as_child: false,
                },
            };
            return Ok(atelier.render_component(&button)?);
        }
        ComponentKind::Badge => Badge {
            selection,
            attrs,
            children: content,
        }
        .build(atelier)?,
        ComponentKind::Alert => Alert {
            selection,
            attrs,
            children: content,
            ..Alert::new()
        }
        .build(atelier)?,
    };

    // Other components graft their root attributes onto the fragment
    let node = match (&args.as_child, node) {
        (Some(fragment), Node::Element { attrs, .. }) => {
            Node::as_child(attrs, Node::raw(fragment))
        }
        (_, node) => node,
    };
    tracing::debug!(component = ?args.component, "rendering component");
    Ok(atelier.render(&node)?)
}
