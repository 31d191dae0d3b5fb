use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::diagnostics::Diagnostics;
use crate::generator::{format_source, generate, ErrorRegistry};
use crate::model::load_source;

/// Command-line interface for the apigen code generator.
///
/// Reads one annotated declaration file and writes the generated
/// validation/dispatch module next to it (or wherever `dest` points).
#[derive(Parser)]
#[command(name = "apigen-gen", version)]
#[command(
    about = "Generate HTTP validation and dispatch code from annotated declarations",
    long_about = None
)]
pub struct Cli {
    /// Path to the annotated declaration file
    pub source: PathBuf,

    /// Path the generated module is written to
    pub dest: PathBuf,

    /// Skip running rustfmt on the generated output
    #[arg(long, default_value_t = false)]
    pub no_fmt: bool,

    /// Increase log verbosity (RUST_LOG still takes precedence)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Parse arguments and run one generation pass.
///
/// # Errors
///
/// Returns an error if:
/// - The declaration file cannot be read or parsed as Rust source
/// - The generated module cannot be written to `dest`
///
/// Annotation-level anomalies do not fail the run; they are collected and
/// printed as a summary after the output file is written.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    generate_to_file(&cli)
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn generate_to_file(cli: &Cli) -> Result<()> {
    let mut diags = Diagnostics::new();
    let api = load_source(&cli.source, &mut diags)?;
    info!(
        structs = api.structs().len(),
        handlers = api.handlers.len(),
        "extracted declaration model"
    );

    let registry = ErrorRegistry::new();
    let mut output = generate(&api, &registry, &mut diags);

    if !cli.no_fmt {
        match format_source(&output) {
            Ok(formatted) => output = formatted,
            Err(err) => eprintln!("⚠️ rustfmt failed, writing unformatted output: {err:#}"),
        }
    }

    fs::write(&cli.dest, &output)
        .with_context(|| format!("failed to write generated module to {}", cli.dest.display()))?;

    diags.print_summary();
    println!("✅ Generated {}", cli.dest.display());
    Ok(())
}
