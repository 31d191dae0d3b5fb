use std::collections::HashMap;

use http::Method;
use serde::Deserialize;

/// Semantic type of an annotated field.
///
/// Only two declared types are recognized in source: `String` maps to
/// [`FieldType::Text`] and `i64` maps to [`FieldType::Integer`]. Annotated
/// fields of any other type are skipped during extraction, so "unknown"
/// never enters the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Text,
}

/// Rule kinds in emission precedence order.
///
/// The derived `Ord` is load-bearing: normalization stable-sorts rules by
/// kind, so declaration order of these variants is the fixed precedence
/// required → param-alias → minimum → maximum → default → enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RuleKind {
    Required,
    ParamAlias,
    Minimum,
    Maximum,
    Default,
    Enum,
}

/// Value attached to a rule, typed per kind: integer for `min`/`max` and for
/// `default` on integer fields, text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleValue {
    Int(i64),
    Text(String),
}

/// One parsed validation condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRule {
    pub kind: RuleKind,
    pub value: Option<RuleValue>,
}

impl ValidationRule {
    pub fn bare(kind: RuleKind) -> Self {
        ValidationRule { kind, value: None }
    }

    pub fn int(kind: RuleKind, value: i64) -> Self {
        ValidationRule {
            kind,
            value: Some(RuleValue::Int(value)),
        }
    }

    pub fn text(kind: RuleKind, value: impl Into<String>) -> Self {
        ValidationRule {
            kind,
            value: Some(RuleValue::Text(value.into())),
        }
    }

    pub fn int_value(&self) -> Option<i64> {
        match self.value {
            Some(RuleValue::Int(value)) => Some(value),
            _ => None,
        }
    }

    pub fn text_value(&self) -> Option<&str> {
        match &self.value {
            Some(RuleValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// An annotated struct field with its normalized rule list.
///
/// Invariant: `rules` is non-empty and sorted by [`RuleKind`] precedence; a
/// field whose conditions all failed to parse never becomes a descriptor.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: FieldType,
    pub rules: Vec<ValidationRule>,
}

impl FieldDescriptor {
    /// First rule of the given kind, if any.
    pub fn rule(&self, kind: RuleKind) -> Option<&ValidationRule> {
        self.rules.iter().find(|rule| rule.kind == kind)
    }

    pub fn has_rule(&self, kind: RuleKind) -> bool {
        self.rule(kind).is_some()
    }
}

/// A parameter struct: its name and annotated fields in declaration order.
#[derive(Debug, Clone)]
pub struct StructDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
    /// Count of named fields the struct declares, descriptors or not.
    pub declared: usize,
}

impl StructDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// True when some declared fields carry no descriptor. Generated
    /// construction then needs a `..Default::default()` base to stay
    /// complete.
    pub fn needs_default_base(&self) -> bool {
        self.fields.len() < self.declared
    }
}

/// Wire payload of the `apigen:api` route marker.
///
/// Missing fields take zero-value defaults; unknown fields are tolerated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteMarker {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub auth: bool,
    #[serde(default)]
    pub method: String,
}

/// One annotated method, ready for emission.
#[derive(Debug, Clone)]
pub struct HandlerDescriptor {
    /// Self type of the surrounding `impl` block.
    pub owner: String,
    /// Business method name as written in source.
    pub name: String,
    /// Literal route path matched by the dispatcher.
    pub route: String,
    /// Required verb; `None` means the handler accepts any verb.
    pub verb: Option<Method>,
    /// Whether the shared-secret header check is emitted.
    pub auth: bool,
    /// Name of the single input parameter struct.
    pub input: String,
    /// Name of the success payload type inside the returned `Result`.
    pub output: String,
}

impl HandlerDescriptor {
    /// Name of the generated wrapper method.
    pub fn handler_fn(&self) -> String {
        format!("handle_{}", self.name)
    }

    /// Generation-time location string used in diagnostics.
    pub fn location(&self) -> String {
        format!("{}::{}", self.owner, self.name)
    }

    pub fn post_only(&self) -> bool {
        self.verb.as_ref() == Some(&Method::POST)
    }
}

/// The whole extracted model for one generation run.
///
/// Structs live in an insertion-ordered sequence with a name index for point
/// lookups; handlers keep declaration order, which drives envelope and
/// dispatcher emission order.
#[derive(Debug, Default)]
pub struct ApiDescription {
    structs: Vec<StructDescriptor>,
    by_name: HashMap<String, usize>,
    pub handlers: Vec<HandlerDescriptor>,
}

impl ApiDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_struct(&mut self, desc: StructDescriptor) {
        self.by_name.insert(desc.name.clone(), self.structs.len());
        self.structs.push(desc);
    }

    pub fn get_struct(&self, name: &str) -> Option<&StructDescriptor> {
        self.by_name.get(name).and_then(|&idx| self.structs.get(idx))
    }

    pub fn structs(&self) -> &[StructDescriptor] {
        &self.structs
    }
}
