//! Validation-condition parsing and normalization.
//!
//! A field's raw condition string is a comma-separated list where each item
//! is either the bare keyword `required` or `key=value`. Recognized keys:
//! `required`, `paramname`, `enum`, `default`, `min`, `max`. The grammar is
//! exact: no whitespace is stripped around keys or values, and a condition
//! holding more than one `=` is malformed.
//!
//! Parsed rules are stable-sorted into the fixed precedence
//! required → param-alias → minimum → maximum → default → enum, independent
//! of authored order. Unrecognized keys and unparseable integer literals
//! drop only the offending condition, with a diagnostic.

use crate::diagnostics::Diagnostics;
use crate::model::{FieldType, RuleKind, ValidationRule};

/// Parses one field's condition string into its normalized rule list.
///
/// `location` identifies the field in diagnostics (`Struct.field`). The
/// returned list may be empty; the caller decides whether that drops the
/// field.
pub fn parse_conditions(
    raw: &str,
    ty: FieldType,
    location: &str,
    diags: &mut Diagnostics,
) -> Vec<ValidationRule> {
    let mut rules = Vec::new();
    for condition in raw.split(',') {
        match condition.split_once('=') {
            None => match condition {
                "required" => rules.push(ValidationRule::bare(RuleKind::Required)),
                other => diags.record(
                    location,
                    "UnknownCondition",
                    format!("unrecognized condition `{other}`"),
                ),
            },
            Some((key, value)) => {
                // A second `=` makes the condition malformed, not a value.
                if value.contains('=') {
                    diags.record(
                        location,
                        "UnknownCondition",
                        format!("malformed condition `{condition}`"),
                    );
                    continue;
                }
                match key {
                    // A value on `required` is legal and ignored.
                    "required" => rules.push(ValidationRule::bare(RuleKind::Required)),
                    "paramname" => rules.push(ValidationRule::text(RuleKind::ParamAlias, value)),
                    "enum" => rules.push(ValidationRule::text(RuleKind::Enum, value)),
                    "default" => match ty {
                        FieldType::Integer => {
                            push_int_rule(&mut rules, RuleKind::Default, value, location, diags)
                        }
                        FieldType::Text => {
                            rules.push(ValidationRule::text(RuleKind::Default, value))
                        }
                    },
                    "min" => push_int_rule(&mut rules, RuleKind::Minimum, value, location, diags),
                    "max" => push_int_rule(&mut rules, RuleKind::Maximum, value, location, diags),
                    other => diags.record(
                        location,
                        "UnknownCondition",
                        format!("unrecognized condition key `{other}`"),
                    ),
                }
            }
        }
    }
    // Stable sort: fixed precedence across kinds, authored order within one.
    rules.sort_by_key(|rule| rule.kind);
    rules
}

fn push_int_rule(
    rules: &mut Vec<ValidationRule>,
    kind: RuleKind,
    value: &str,
    location: &str,
    diags: &mut Diagnostics,
) {
    match value.parse::<i64>() {
        Ok(parsed) => rules.push(ValidationRule::int(kind, parsed)),
        Err(_) => diags.record(
            location,
            "BadIntValue",
            format!("`{value}` is not an integer, condition dropped"),
        ),
    }
}
