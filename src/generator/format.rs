//! Canonicalizing formatter pass over the assembled output.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Environment variable overriding the formatter binary (defaults to
/// `rustfmt` on PATH). Lets tests and hermetic builds supply a stub.
pub const RUSTFMT_ENV: &str = "APIGEN_RUSTFMT_BIN";

/// Pipes `source` through `rustfmt --edition 2021`.
///
/// # Errors
///
/// Returns an error if the formatter cannot be spawned, exits non-zero, or
/// produces non-UTF-8 output. Callers treat this as soft: the unformatted
/// text is still written.
pub fn format_source(source: &str) -> Result<String> {
    let bin = std::env::var(RUSTFMT_ENV).unwrap_or_else(|_| "rustfmt".to_string());
    debug!(%bin, "running formatter");
    let mut child = Command::new(&bin)
        .arg("--edition")
        .arg("2021")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn formatter `{bin}`"))?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(source.as_bytes())
            .context("failed to write to formatter stdin")?;
    }
    let output = child
        .wait_with_output()
        .context("failed to wait for formatter")?;
    if !output.status.success() {
        bail!(
            "formatter `{bin}` exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    String::from_utf8(output.stdout).context("formatter produced non-UTF-8 output")
}
