//! Loading compiler options from YAML.

use std::path::Path;

use ag_graph::{CompileOptions, EdgeErrorPolicy};

use crate::error::{CliError, CliResult};

pub fn load_options(path: &Path) -> CliResult<CompileOptions> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_options(&content).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_options(content: &str) -> Result<CompileOptions, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(CompileOptions::default());
    }
    serde_yaml::from_str(content)
}

/// Options from an optional config file, with `--all-errors` taking precedence.
pub fn resolve_options(config: Option<&Path>, all_errors: bool) -> CliResult<CompileOptions> {
    let mut options = match config {
        Some(path) => load_options(path)?,
        None => CompileOptions::default(),
    };
    if all_errors {
        options.edge_errors = EdgeErrorPolicy::Aggregate;
    }
    Ok(options)
}
