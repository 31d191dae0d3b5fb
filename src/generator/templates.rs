//! Askama data structs for each emitted construct.
//!
//! Templates live under `templates/` with escaping disabled; all dynamic
//! expression-level text (literals, field blocks) is precomputed by
//! [`checks`](super::checks) and [`naming`](super::naming) so the templates
//! stay purely structural.

use askama::Template;

use crate::generator::naming::quote_str;
use crate::generator::registry::ErrorRegistry;

/// File header: generated-file notice, lint allowances, imports.
#[derive(Template)]
#[template(path = "header.rs.txt", escape = "none")]
pub struct HeaderTemplate;

/// One well-known error constructor in the generated runtime.
pub struct ErrorEntry {
    pub ident: String,
    /// Message rendered as a quoted Rust literal.
    pub message_lit: String,
    pub status: u16,
}

/// Shared runtime: error impls, well-known error table, transport helpers.
#[derive(Template)]
#[template(path = "runtime.rs.txt", escape = "none")]
pub struct RuntimeTemplate {
    pub auth_header: &'static str,
    pub auth_token: &'static str,
    pub errors: Vec<ErrorEntry>,
}

impl RuntimeTemplate {
    pub fn new(
        auth_header: &'static str,
        auth_token: &'static str,
        registry: &ErrorRegistry,
    ) -> Self {
        let errors = registry
            .entries()
            .iter()
            .map(|entry| ErrorEntry {
                ident: entry.ident.to_string(),
                message_lit: quote_str(entry.message),
                status: entry.status.as_u16(),
            })
            .collect();
        RuntimeTemplate {
            auth_header,
            auth_token,
            errors,
        }
    }
}

/// Response envelope for one (owner, method) pair.
#[derive(Template)]
#[template(path = "envelope.rs.txt", escape = "none")]
pub struct EnvelopeTemplate {
    pub name: String,
    pub result_type: String,
}

/// One generated handler method.
#[derive(Template)]
#[template(path = "handler.rs.txt", escape = "none")]
pub struct HandlerTemplate {
    pub owner: String,
    pub handler_fn: String,
    pub business_fn: String,
    pub params_type: String,
    pub envelope: String,
    pub post_only: bool,
    pub auth: bool,
    /// Precomputed extraction/validation lines, one block per field.
    pub field_blocks: Vec<String>,
    /// Field names in declaration order, for struct construction.
    pub field_names: Vec<String>,
    /// Close the construction with `..Default::default()` when the struct
    /// declares fields no descriptor covers.
    pub fill_default: bool,
}

/// One dispatch arm inside a generated `serve_http`.
pub struct RouteArm {
    /// Route path rendered as a quoted Rust literal.
    pub path_lit: String,
    pub handler_fn: String,
}

/// Per-owner dispatcher.
#[derive(Template)]
#[template(path = "dispatch.rs.txt", escape = "none")]
pub struct DispatchTemplate {
    pub owner: String,
    pub routes: Vec<RouteArm>,
}
