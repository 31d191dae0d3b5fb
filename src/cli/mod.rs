//! # CLI Module
//!
//! Command-line surface for the apigen code generator.
//!
//! ## Overview
//!
//! The CLI reads one annotated declaration file, runs the full pipeline
//! (extraction, rule normalization, emission), formats the result with
//! rustfmt, and writes the generated module:
//!
//! ```bash
//! apigen-gen api.rs api_handlers_gen.rs
//! ```
//!
//! ## Options
//!
//! - `<SOURCE>` - Annotated declaration file (required)
//! - `<DEST>` - Output path for the generated module (required)
//! - `--no-fmt` - Skip the rustfmt pass
//! - `-v, --verbose` - Debug-level logging (overridden by `RUST_LOG`)
//!
//! ## Behavior
//!
//! A run fails only when the source file cannot be read or parsed, or the
//! output cannot be written. Bad annotations never abort generation: the
//! offending field or handler is dropped and reported in the issue summary
//! printed after the output file lands.
//!
//! A missing or broken rustfmt is tolerated. The unformatted output is
//! written and a warning is printed; `APIGEN_RUSTFMT_BIN` selects an
//! alternative formatter binary.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! fn main() {
//!     if let Err(err) = apigen::cli::run() {
//!         eprintln!("❌ {err:#}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod commands;


pub use commands::{run, Cli};
