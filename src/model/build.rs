//! Metadata extraction from a parsed declaration file.
//!
//! Walks top-level items of a [`syn::File`]: structs contribute
//! [`StructDescriptor`]s from `#[api_validator("...")]` fields, inherent
//! `impl` methods contribute [`HandlerDescriptor`]s from `apigen:api` doc
//! markers. Extraction is purely syntactic; nothing is type-checked or
//! expanded, and every anomaly short of an unparseable file is non-fatal.

use http::Method;
use syn::{
    Attribute, Expr, ExprLit, Fields, FnArg, GenericArgument, ImplItem, Item, ItemImpl,
    ItemStruct, Lit, LitStr, Meta, PathArguments, ReturnType, Type,
};
use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::model::{
    ApiDescription, FieldDescriptor, FieldType, HandlerDescriptor, RouteMarker, StructDescriptor,
};
use crate::rules::parse_conditions;

/// Field attribute holding the condition string.
pub const VALIDATOR_ATTR: &str = "api_validator";

/// Sentinel prefix of the route marker inside a doc comment.
pub const ROUTE_MARKER: &str = "apigen:api";

/// Builds the full model for one generation run.
///
/// Struct declaration order and method declaration order are both preserved;
/// the latter drives envelope and dispatcher emission order downstream.
pub fn build_api_description(file: &syn::File, diags: &mut Diagnostics) -> ApiDescription {
    let mut api = ApiDescription::new();
    for item in &file.items {
        match item {
            Item::Struct(item_struct) => collect_struct(item_struct, &mut api, diags),
            Item::Impl(item_impl) => collect_handlers(item_impl, &mut api, diags),
            _ => {}
        }
    }
    debug!(
        structs = api.structs().len(),
        handlers = api.handlers.len(),
        "extracted api description"
    );
    api
}

fn collect_struct(item: &ItemStruct, api: &mut ApiDescription, diags: &mut Diagnostics) {
    let Fields::Named(named) = &item.fields else {
        return;
    };
    let struct_name = item.ident.to_string();
    let declared = named.named.len();
    let mut fields = Vec::new();
    for field in &named.named {
        let Some(ident) = &field.ident else {
            continue;
        };
        let location = format!("{struct_name}.{ident}");
        let Some(raw) = validator_conditions(&field.attrs, &location, diags) else {
            continue;
        };
        let Some(ty) = field_type(&field.ty) else {
            diags.record(
                &location,
                "UnsupportedFieldType",
                "annotated field must be declared as String or i64",
            );
            continue;
        };
        let rules = parse_conditions(&raw, ty, &location, diags);
        if rules.is_empty() {
            diags.record(&location, "EmptyField", "no usable conditions, field dropped");
            continue;
        }
        fields.push(FieldDescriptor {
            name: ident.to_string(),
            ty,
            rules,
        });
    }
    if !fields.is_empty() {
        api.insert_struct(StructDescriptor {
            name: struct_name,
            fields,
            declared,
        });
    }
}

fn collect_handlers(item: &ItemImpl, api: &mut ApiDescription, diags: &mut Diagnostics) {
    // Trait impls carry no dispatchable inherent methods.
    if item.trait_.is_some() {
        return;
    }
    let Some(owner) = impl_owner(item) else {
        return;
    };
    for impl_item in &item.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        let Some(payload) = marker_payload(&method.attrs) else {
            continue;
        };
        let name = method.sig.ident.to_string();
        let location = format!("{owner}::{name}");

        let marker: RouteMarker = match serde_json::from_str(&payload) {
            Ok(marker) => marker,
            Err(err) => {
                diags.record(&location, "BadRouteMarker", format!("invalid payload: {err}"));
                continue;
            }
        };
        let verb = match parse_verb(&marker.method) {
            Ok(verb) => verb,
            Err(()) => {
                diags.record(
                    &location,
                    "BadRouteMarker",
                    format!("invalid verb `{}`", marker.method),
                );
                continue;
            }
        };
        if method.sig.receiver().is_none() {
            diags.record(&location, "BadHandler", "marked method has no receiver");
            continue;
        }
        let Some(input) = input_param(&method.sig) else {
            diags.record(
                &location,
                "BadHandler",
                "no parameter struct found in signature",
            );
            continue;
        };
        let Some(output) = output_type(&method.sig) else {
            diags.record(
                &location,
                "BadHandler",
                "return type is not Result<Payload, _>",
            );
            continue;
        };
        api.handlers.push(HandlerDescriptor {
            owner: owner.clone(),
            name,
            route: marker.url,
            verb,
            auth: marker.auth,
            input,
            output,
        });
    }
}

/// Maps a declared field type to its semantic type; `None` means the field
/// is not generatable.
fn field_type(ty: &Type) -> Option<FieldType> {
    match path_ident(ty)?.as_str() {
        "String" => Some(FieldType::Text),
        "i64" => Some(FieldType::Integer),
        _ => None,
    }
}

/// Extracts the condition string from an `api_validator` attribute, if the
/// field carries one.
fn validator_conditions(
    attrs: &[Attribute],
    location: &str,
    diags: &mut Diagnostics,
) -> Option<String> {
    let attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident(VALIDATOR_ATTR))?;
    match attr.parse_args::<LitStr>() {
        Ok(lit) => Some(lit.value()),
        Err(_) => {
            diags.record(
                location,
                "BadAnnotation",
                "api_validator expects a single string literal",
            );
            None
        }
    }
}

/// Finds the route-marker payload among doc-comment lines.
fn marker_payload(attrs: &[Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        let Meta::NameValue(meta) = &attr.meta else {
            continue;
        };
        let Expr::Lit(ExprLit {
            lit: Lit::Str(line),
            ..
        }) = &meta.value
        else {
            continue;
        };
        let text = line.value();
        if let Some(rest) = text.trim_start().strip_prefix(ROUTE_MARKER) {
            return Some(rest.trim_start().to_string());
        }
    }
    None
}

fn parse_verb(method: &str) -> Result<Option<Method>, ()> {
    if method.is_empty() {
        return Ok(None);
    }
    Method::from_bytes(method.as_bytes())
        .map(Some)
        .map_err(|_| ())
}

fn impl_owner(item: &ItemImpl) -> Option<String> {
    path_ident(&item.self_ty)
}

/// Last non-receiver parameter declared as a bare path type. References and
/// qualified types are skipped, matching the "sole parameter struct" rule.
fn input_param(sig: &syn::Signature) -> Option<String> {
    let mut found = None;
    for arg in &sig.inputs {
        if let FnArg::Typed(pat_type) = arg {
            if let Some(ident) = path_ident(&pat_type.ty) {
                found = Some(ident);
            }
        }
    }
    found
}

/// Success payload of a `Result<T, E>` return type, with `Box<T>` and `&T`
/// unwrapped.
fn output_type(sig: &syn::Signature) -> Option<String> {
    let ReturnType::Type(_, ty) = &sig.output else {
        return None;
    };
    let Type::Path(path) = &**ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Result" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    let GenericArgument::Type(success) = args.args.first()? else {
        return None;
    };
    unwrap_success_type(success)
}

fn unwrap_success_type(ty: &Type) -> Option<String> {
    match ty {
        Type::Reference(reference) => unwrap_success_type(&reference.elem),
        Type::Path(path) => {
            let segment = path.path.segments.last()?;
            if segment.ident == "Box" {
                let PathArguments::AngleBracketed(args) = &segment.arguments else {
                    return None;
                };
                let GenericArgument::Type(inner) = args.args.first()? else {
                    return None;
                };
                return unwrap_success_type(inner);
            }
            if segment.arguments.is_empty() {
                Some(segment.ident.to_string())
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Identifier of a bare (non-generic, unqualified) path type.
fn path_ident(ty: &Type) -> Option<String> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.arguments.is_empty() {
        Some(segment.ident.to_string())
    } else {
        None
    }
}
