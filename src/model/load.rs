//! Entry points for reading and parsing a declaration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::model::{build_api_description, ApiDescription};

/// Parses declaration source text into an [`ApiDescription`].
///
/// # Errors
///
/// Returns an error if the text is not a parseable Rust source file; this is
/// the one fatal failure of the pipeline. Annotation-level anomalies land in
/// `diags` instead.
pub fn parse_source(content: &str, diags: &mut Diagnostics) -> Result<ApiDescription> {
    let file = syn::parse_file(content).context("failed to parse declaration source")?;
    Ok(build_api_description(&file, diags))
}

/// Reads and parses the declaration file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_source(path: &Path, diags: &mut Diagnostics) -> Result<ApiDescription> {
    debug!(path = %path.display(), "loading declaration source");
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read source file {}", path.display()))?;
    parse_source(&content, diags)
}
