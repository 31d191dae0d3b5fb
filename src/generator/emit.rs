//! Section-ordered assembly of the generated module.
//!
//! Output order mirrors the generated file top to bottom: header → shared
//! runtime → envelopes → handlers → dispatchers. Envelopes and handlers
//! follow handler declaration order; dispatchers the owners'
//! first-appearance order. The transform is pure and order-preserving, so
//! byte-identical input yields byte-identical output.

use askama::Template;
use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::generator::checks::{any_verb_field_block, post_field_block};
use crate::generator::naming::{envelope_name, quote_str};
use crate::generator::registry::ErrorRegistry;
use crate::generator::templates::{
    DispatchTemplate, EnvelopeTemplate, HandlerTemplate, HeaderTemplate, RouteArm,
    RuntimeTemplate,
};
use crate::model::{ApiDescription, HandlerDescriptor, StructDescriptor};

/// Header checked by generated auth guards.
pub const AUTH_HEADER: &str = "X-Auth";
/// Shared-secret sentinel expected in [`AUTH_HEADER`].
pub const AUTH_TOKEN: &str = "100500";

/// Renders the whole generated module as unformatted source text.
///
/// Handlers whose input struct never entered the table are skipped with a
/// diagnostic; a render failure drops only the affected section.
pub fn generate(api: &ApiDescription, registry: &ErrorRegistry, diags: &mut Diagnostics) -> String {
    let mut sections: Vec<String> = Vec::new();
    render_section(&HeaderTemplate, "header", &mut sections, diags);
    render_section(
        &RuntimeTemplate::new(AUTH_HEADER, AUTH_TOKEN, registry),
        "runtime",
        &mut sections,
        diags,
    );

    let emittable: Vec<(&HandlerDescriptor, &StructDescriptor)> = api
        .handlers
        .iter()
        .filter_map(|handler| match api.get_struct(&handler.input) {
            Some(desc) => Some((handler, desc)),
            None => {
                diags.record(
                    handler.location(),
                    "MissingInputStruct",
                    format!("input struct `{}` has no usable fields, handler skipped", handler.input),
                );
                None
            }
        })
        .collect();

    for (handler, _) in &emittable {
        render_section(
            &EnvelopeTemplate {
                name: envelope_name(&handler.owner, &handler.name),
                result_type: handler.output.clone(),
            },
            &handler.location(),
            &mut sections,
            diags,
        );
    }

    for (handler, params) in &emittable {
        let template = handler_template(handler, params, registry, diags);
        render_section(&template, &handler.location(), &mut sections, diags);
    }

    for owner in owners_in_order(&emittable) {
        let routes = emittable
            .iter()
            .filter(|(handler, _)| handler.owner == owner)
            .map(|(handler, _)| RouteArm {
                path_lit: quote_str(&handler.route),
                handler_fn: handler.handler_fn(),
            })
            .collect();
        render_section(
            &DispatchTemplate {
                owner: owner.to_string(),
                routes,
            },
            owner,
            &mut sections,
            diags,
        );
    }

    debug!(
        sections = sections.len(),
        handlers = emittable.len(),
        "assembled generated module"
    );
    sections.join("\n")
}

fn handler_template(
    handler: &HandlerDescriptor,
    params: &StructDescriptor,
    registry: &ErrorRegistry,
    diags: &mut Diagnostics,
) -> HandlerTemplate {
    let post_only = handler.post_only();
    let mut field_blocks = Vec::with_capacity(params.fields.len());
    for field in &params.fields {
        let block = if post_only {
            let location = format!("{}.{}", params.name, field.name);
            post_field_block(field, registry, &location, diags)
        } else {
            any_verb_field_block(field, registry)
        };
        field_blocks.push(block);
    }
    HandlerTemplate {
        owner: handler.owner.clone(),
        handler_fn: handler.handler_fn(),
        business_fn: handler.name.clone(),
        params_type: handler.input.clone(),
        envelope: envelope_name(&handler.owner, &handler.name),
        post_only,
        auth: handler.auth,
        field_blocks,
        field_names: params.fields.iter().map(|field| field.name.clone()).collect(),
        fill_default: params.needs_default_base(),
    }
}

fn owners_in_order<'a>(emittable: &[(&'a HandlerDescriptor, &StructDescriptor)]) -> Vec<&'a str> {
    let mut owners: Vec<&str> = Vec::new();
    for (handler, _) in emittable {
        if !owners.contains(&handler.owner.as_str()) {
            owners.push(handler.owner.as_str());
        }
    }
    owners
}

fn render_section<T: Template>(
    template: &T,
    location: &str,
    sections: &mut Vec<String>,
    diags: &mut Diagnostics,
) {
    match template.render() {
        Ok(text) => sections.push(text),
        Err(err) => diags.record(location, "RenderError", format!("render failed: {err}")),
    }
}
