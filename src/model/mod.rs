//! Extracted model of an annotated declaration file.
//!
//! This module owns the data the whole pipeline flows through:
//!
//! - [`StructDescriptor`] / [`FieldDescriptor`] - parameter structs and
//!   their normalized validation rules
//! - [`HandlerDescriptor`] - one annotated method with its route, verb,
//!   auth flag, and input/output type references
//! - [`ApiDescription`] - the per-run aggregate, insertion-ordered with a
//!   name index for struct lookups
//!
//! [`build_api_description`] populates the model from a parsed file;
//! [`load_source`] and [`parse_source`] are the fallible entry points around
//! it. The model is built once per run, consumed once by the emitter, and
//! discarded.

mod build;
mod load;
mod types;

pub use build::{build_api_description, ROUTE_MARKER, VALIDATOR_ATTR};
pub use load::{load_source, parse_source};
pub use types::{
    ApiDescription, FieldDescriptor, FieldType, HandlerDescriptor, RouteMarker, RuleKind,
    RuleValue, StructDescriptor, ValidationRule,
};
