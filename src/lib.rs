//! # apigen
//!
//! **apigen** turns annotated Rust API declarations into complete HTTP
//! validation and dispatch modules. You write plain structs and business
//! methods; the generator derives the transport layer around them.
//!
//! ## Overview
//!
//! A declaration file marks parameter structs with `#[api_validator("...")]`
//! field attributes and business methods with an `apigen:api` doc marker:
//!
//! ```rust,ignore
//! #[derive(ApiValidator)]
//! pub struct CreateParams {
//!     #[api_validator("required,min=10")]
//!     pub login: String,
//!     #[api_validator("min=0,max=128")]
//!     pub age: i64,
//!     #[api_validator("enum=user|moderator|admin,default=user")]
//!     pub status: String,
//! }
//!
//! impl MyApi {
//!     /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
//!     pub fn create(&self, params: CreateParams) -> Result<NewUser, HandlerError> {
//!         // business logic only
//!     }
//! }
//! ```
//!
//! From this the generator emits a sibling module containing one wrapper
//! handler per method (verb check, auth check, form parsing, every
//! validation rule), serialization envelopes, a per-type `serve_http`
//! dispatcher, and the shared error runtime they all lean on.
//!
//! ## Architecture
//!
//! The pipeline has three stages, each its own module:
//!
//! - **[`model`]** - Extraction: parse the declaration file and collect
//!   [`StructDescriptor`]/[`HandlerDescriptor`] values in declaration order
//! - **[`rules`]** - Normalization: turn raw condition strings into typed
//!   [`ValidationRule`](model::ValidationRule)s in fixed precedence order
//! - **[`generator`]** - Emission: render the generated module from the
//!   descriptor model through Askama templates
//!
//! Two modules cut across the stages:
//!
//! - **[`diagnostics`]** - Soft-anomaly collection; bad annotations drop the
//!   offending item and record an issue instead of aborting the run
//! - **[`cli`]** - The `apigen-gen` binary surface
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(apigen-gen)
//!     participant Model as model::load_source
//!     participant Rules as rules::parse_conditions
//!     participant Emit as generator::generate
//!     participant Fmt as rustfmt
//!     participant FS as File System
//!
//!     User->>CLI: apigen-gen api.rs api_handlers_gen.rs
//!     CLI->>Model: load_source("api.rs")
//!     Model->>Model: syn::parse_file
//!     Model->>Rules: parse_conditions(field attrs)
//!     Rules-->>Model: Vec<ValidationRule> (normalized)
//!     Model-->>CLI: ApiDescription
//!     CLI->>Emit: generate(&api, &registry, &mut diags)
//!     Emit->>Emit: header + runtime
//!     Emit->>Emit: envelopes, handlers (declaration order)
//!     Emit->>Emit: dispatchers (owner order)
//!     Emit-->>CLI: generated module text
//!     CLI->>Fmt: rustfmt --edition 2021
//!     Fmt-->>CLI: formatted text (or tolerated failure)
//!     CLI->>FS: write api_handlers_gen.rs
//!     CLI-->>User: ✅ Generated api_handlers_gen.rs
//! ```
//!
//! ### Key Behaviors
//!
//! 1. **Deterministic Output**: identical input produces byte-identical
//!    output; everything is stored and emitted in declaration order
//! 2. **Fixed Rule Precedence**: conditions apply as
//!    `required` → `paramname` → `min` → `max` → `default` → `enum`
//!    regardless of authored order
//! 3. **Never Abort on Annotations**: malformed conditions, unknown keys,
//!    and unsupported field types drop the item and record a diagnostic
//! 4. **Self-Contained Output**: the generated module depends only on the
//!    declaration file's own types plus `http`, `serde_json`, and `url`
//! 5. **Plain Fields Pass Through**: fields without an attribute are never
//!    read from the request; a struct declaring any is constructed with a
//!    `..Default::default()` base
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use apigen::diagnostics::Diagnostics;
//! use apigen::generator::{generate, ErrorRegistry};
//! use apigen::model::load_source;
//!
//! let mut diags = Diagnostics::new();
//! let api = load_source(Path::new("api.rs"), &mut diags)?;
//! let output = generate(&api, &ErrorRegistry::new(), &mut diags);
//! std::fs::write("api_handlers_gen.rs", output)?;
//! diags.print_summary();
//! ```
//!
//! Or use the binary:
//!
//! ```bash
//! apigen-gen api.rs api_handlers_gen.rs
//! ```
//!
//! ## Generated Module Contract
//!
//! The declaration file provides two contract types the generated code
//! calls into:
//!
//! ```rust,ignore
//! pub struct ApiError {
//!     pub status: u16,
//!     pub message: String,
//! }
//!
//! pub enum HandlerError {
//!     Api(ApiError),
//!     Internal(String),
//! }
//! ```
//!
//! Business methods return `Result<T, HandlerError>`. An `Api` error flows
//! to the client with its own status and message; an `Internal` error is
//! masked behind the shared 500 response.

pub mod cli;
pub mod diagnostics;
pub mod generator;
pub mod model;
pub mod rules;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use generator::{generate, ErrorRegistry, AUTH_HEADER, AUTH_TOKEN};
pub use model::{
    load_source, parse_source, ApiDescription, FieldDescriptor, FieldType, HandlerDescriptor,
    RuleKind, StructDescriptor, ValidationRule,
};
pub use rules::parse_conditions;
