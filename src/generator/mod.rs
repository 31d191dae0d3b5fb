//! # Generator Module
//!
//! Renders the extracted [`ApiDescription`](crate::model::ApiDescription)
//! into one Rust module of validation/dispatch handlers.
//!
//! ## Architecture
//!
//! ```text
//! ApiDescription → per-field check blocks → Askama templates → assembled text → rustfmt
//! ```
//!
//! 1. **Registry** - the immutable table of the five well-known errors,
//!    built once and passed by reference through emission
//! 2. **Checks** - per-field extraction/validation blocks, precomputed as
//!    strings in normalized rule order
//! 3. **Templates** - structural Askama templates, one per emitted
//!    construct (header, runtime, envelope, handler, dispatcher)
//! 4. **Emit** - section-ordered assembly of the final module text
//! 5. **Format** - external `rustfmt` pass; failures fall back to the
//!    unformatted text
//!
//! ## Generated Module Structure
//!
//! ```text
//! // header: notice + imports + `use super::*;`
//! // runtime: ApiError impl, api_error, five err_* constructors,
//! //          auth/form/content-type helpers
//! // one envelope struct per handler      (declaration order)
//! // one handle_* method per handler      (declaration order)
//! // one serve_http dispatcher per owner  (first-appearance order)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use apigen::diagnostics::Diagnostics;
//! use apigen::generator::{generate, ErrorRegistry};
//!
//! let mut diags = Diagnostics::new();
//! let api = apigen::model::load_source("api.rs".as_ref(), &mut diags)?;
//! let registry = ErrorRegistry::new();
//! let text = generate(&api, &registry, &mut diags);
//! ```
//!
//! Templates are located in the `templates/` directory:
//!
//! - `header.rs.txt` - generated-file notice and imports
//! - `runtime.rs.txt` - shared error/transport runtime
//! - `envelope.rs.txt` - response envelope struct
//! - `handler.rs.txt` - handler method
//! - `dispatch.rs.txt` - per-owner dispatcher

mod checks;
mod emit;
mod format;
mod naming;
mod registry;
mod templates;

pub use emit::{generate, AUTH_HEADER, AUTH_TOKEN};
pub use format::{format_source, RUSTFMT_ENV};
pub use naming::{envelope_name, quote_str, to_camel_case};
pub use registry::{ErrorRegistry, WellKnownError};
