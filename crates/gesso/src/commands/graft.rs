//! Graft command - Merge component attributes onto a fragment's root element

use std::path::{Path, PathBuf};

use clap::Args;
use gesso_graft::AsChildRewriter;

use super::{read_attrs, read_input};
use crate::config::GessoConfig;
use crate::errors::CliError;

#[derive(Args)]
pub struct GraftArgs {
    /// JSON file with the component's attributes
    #[arg(short, long)]
    pub attrs: PathBuf,

    /// HTML fragment file (reads stdin when omitted)
    pub fragment: Option<PathBuf>,
}

pub fn run(args: GraftArgs, config: &GessoConfig) -> Result<(), CliError> {
    let fragment_path = args.fragment.as_deref().unwrap_or(Path::new("-"));
    if args.attrs == Path::new("-") && fragment_path == Path::new("-") {
        return Err(CliError::Usage(
            "--attrs and the fragment cannot both be read from stdin".to_string(),
        ));
    }
    let component = read_attrs(&args.attrs)?;
    let fragment = read_input(fragment_path)?;

    let rewriter = AsChildRewriter::new(config.merger());
    print!("{}", rewriter.rewrite(&fragment, &component)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_two_stdin_inputs() {
        let args = GraftArgs {
            attrs: PathBuf::from("-"),
            fragment: None,
        };
        let err = run(args, &GessoConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }
}
