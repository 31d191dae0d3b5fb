//! Per-field extraction/validation code builders.
//!
//! Each builder returns a block of handler-body lines (8-space indent,
//! trailing newline) for one field. Blocks are precomputed here and passed
//! into the handler template as plain strings; the template owns only the
//! handler skeleton.

use crate::diagnostics::Diagnostics;
use crate::generator::naming::quote_str;
use crate::generator::registry::ErrorRegistry;
use crate::model::{FieldDescriptor, FieldType, RuleKind};

const INDENT: &str = "        ";

/// Builds the POST-path block for one field: extraction plus every
/// normalized rule, in order.
pub(crate) fn post_field_block(
    field: &FieldDescriptor,
    registry: &ErrorRegistry,
    location: &str,
    diags: &mut Diagnostics,
) -> String {
    match field.ty {
        FieldType::Text => text_field_block(field, registry),
        FieldType::Integer => integer_field_block(field, registry, location, diags),
    }
}

/// Builds the any-verb block for one field: read, require non-empty, and
/// for integer fields the typed parse. The rule list is ignored on this
/// path.
pub(crate) fn any_verb_field_block(field: &FieldDescriptor, registry: &ErrorRegistry) -> String {
    let name = &field.name;
    let key = quote_str(name);
    let mut block = String::new();
    match field.ty {
        FieldType::Text => {
            block.push_str(&format!("{INDENT}let {name} = form_value(&form, {key});\n"));
            block.push_str(&empty_check(name, registry));
        }
        FieldType::Integer => {
            let raw = format!("{name}_raw");
            block.push_str(&format!("{INDENT}let {raw} = form_value(&form, {key});\n"));
            block.push_str(&empty_check(&raw, registry));
            block.push_str(&int_parse(name, &raw));
        }
    }
    block
}

fn text_field_block(field: &FieldDescriptor, registry: &ErrorRegistry) -> String {
    let name = &field.name;
    let key = quote_str(name);
    let mutable = if overridden(field) { "mut " } else { "" };
    let mut block = String::new();
    block.push_str(&format!(
        "{INDENT}let {mutable}{name} = form_value(&form, {key});\n"
    ));
    for rule in &field.rules {
        match rule.kind {
            RuleKind::Required => block.push_str(&empty_check(name, registry)),
            RuleKind::ParamAlias => {
                if let Some(alias) = rule.text_value() {
                    block.push_str(&alias_override(name, alias));
                }
            }
            RuleKind::Minimum => {
                if let Some(bound) = rule.int_value() {
                    block.push_str(&len_check(name, "<", ">=", bound));
                }
            }
            RuleKind::Maximum => {
                if let Some(bound) = rule.int_value() {
                    block.push_str(&len_check(name, ">", "<=", bound));
                }
            }
            RuleKind::Default => {
                if let Some(value) = rule.text_value() {
                    block.push_str(&default_substitute(name, &quote_str(value)));
                }
            }
            RuleKind::Enum => {
                if let Some(members) = rule.text_value() {
                    block.push_str(&enum_check(name, members));
                }
            }
        }
    }
    block
}

/// Integer fields: alias and default act on the raw text before the parse
/// (their only effective position), `required` is subsumed by the parse
/// failure, bounds compare the parsed value.
fn integer_field_block(
    field: &FieldDescriptor,
    _registry: &ErrorRegistry,
    location: &str,
    diags: &mut Diagnostics,
) -> String {
    let name = &field.name;
    let key = quote_str(name);
    let raw = format!("{name}_raw");
    let mutable = if overridden(field) { "mut " } else { "" };
    let mut block = String::new();
    block.push_str(&format!(
        "{INDENT}let {mutable}{raw} = form_value(&form, {key});\n"
    ));
    for rule in &field.rules {
        match rule.kind {
            RuleKind::ParamAlias => {
                if let Some(alias) = rule.text_value() {
                    block.push_str(&alias_override(&raw, alias));
                }
            }
            RuleKind::Default => {
                if let Some(value) = rule.int_value() {
                    block.push_str(&default_substitute(&raw, &quote_str(&value.to_string())));
                }
            }
            _ => {}
        }
    }
    block.push_str(&int_parse(name, &raw));
    for rule in &field.rules {
        match rule.kind {
            RuleKind::Minimum => {
                if let Some(bound) = rule.int_value() {
                    block.push_str(&value_check(name, "<", ">=", bound));
                }
            }
            RuleKind::Maximum => {
                if let Some(bound) = rule.int_value() {
                    block.push_str(&value_check(name, ">", "<=", bound));
                }
            }
            RuleKind::Enum => diags.record(
                location,
                "UnsupportedRule",
                format!("enum is not supported on integer field `{name}`, rule skipped"),
            ),
            _ => {}
        }
    }
    block
}

fn overridden(field: &FieldDescriptor) -> bool {
    field.has_rule(RuleKind::ParamAlias) || field.has_rule(RuleKind::Default)
}

fn empty_check(var: &str, registry: &ErrorRegistry) -> String {
    let err = registry.missing_value().ident;
    format!(
        "{INDENT}if {var}.is_empty() {{\n\
         {INDENT}    return {err}().respond();\n\
         {INDENT}}}\n"
    )
}

fn alias_override(var: &str, alias: &str) -> String {
    let alt = format!("{var}_alt");
    let key = quote_str(alias);
    format!(
        "{INDENT}let {alt} = form_value(&form, {key});\n\
         {INDENT}if !{alt}.is_empty() {{\n\
         {INDENT}    {var} = {alt};\n\
         {INDENT}}}\n"
    )
}

fn default_substitute(var: &str, literal: &str) -> String {
    format!(
        "{INDENT}if {var}.is_empty() {{\n\
         {INDENT}    {var} = {literal}.to_string();\n\
         {INDENT}}}\n"
    )
}

fn int_parse(name: &str, raw: &str) -> String {
    let message = quote_str(&format!("{name} must be int"));
    format!(
        "{INDENT}let {name}: i64 = match {raw}.parse() {{\n\
         {INDENT}    Ok(value) => value,\n\
         {INDENT}    Err(_) => return api_error({message}, 400).respond(),\n\
         {INDENT}}};\n"
    )
}

// Bounds may be negative, so lengths compare in i64.
fn len_check(name: &str, op: &str, requirement: &str, bound: i64) -> String {
    let message = quote_str(&format!("{name} len must be {requirement} {bound}"));
    format!(
        "{INDENT}if ({name}.len() as i64) {op} {bound} {{\n\
         {INDENT}    return api_error({message}, 400).respond();\n\
         {INDENT}}}\n"
    )
}

fn value_check(name: &str, op: &str, requirement: &str, bound: i64) -> String {
    let message = quote_str(&format!("{name} must be {requirement} {bound}"));
    format!(
        "{INDENT}if {name} {op} {bound} {{\n\
         {INDENT}    return api_error({message}, 400).respond();\n\
         {INDENT}}}\n"
    )
}

fn enum_check(name: &str, members: &str) -> String {
    let list: Vec<&str> = members.split('|').collect();
    let literals: Vec<String> = list.iter().map(|member| quote_str(member)).collect();
    let message = quote_str(&format!("{name} must be one of [{}]", list.join(", ")));
    format!(
        "{INDENT}if ![{}].contains(&{name}.as_str()) {{\n\
         {INDENT}    return api_error({message}, 400).respond();\n\
         {INDENT}}}\n",
        literals.join(", ")
    )
}
