//! Subcommands.

pub mod graft;
pub mod merge;
pub mod render;
pub mod schema;

use std::io::Read;
use std::path::Path;

use gesso_relief::AttributeSet;

use crate::errors::CliError;

/// Read a file, or stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    let read_error = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(read_error)?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).map_err(read_error)
}

/// Read an attribute set stored as a JSON object.
pub(crate) fn read_attrs(path: &Path) -> Result<AttributeSet, CliError> {
    let content = read_input(path)?;
    parse_attrs(path, &content)
}

pub(crate) fn parse_attrs(path: &Path, content: &str) -> Result<AttributeSet, CliError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    AttributeSet::from_json(&value).map_err(|source| CliError::Attributes {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attrs() {
        let attrs = parse_attrs(Path::new("a.json"), r#"{ "class": "a b", "hidden": true }"#)
            .unwrap();
        assert_eq!(attrs.get_text("class").as_deref(), Some("a b"));
    }

    #[test]
    fn test_parse_attrs_errors_name_the_file() {
        let err = parse_attrs(Path::new("a.json"), "[1, 2]").unwrap_err();
        assert!(err.to_string().starts_with("a.json: "));

        let err = parse_attrs(Path::new("b.json"), "{").unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON in b.json: "));
    }
}
