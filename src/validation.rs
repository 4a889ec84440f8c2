//! Schema validation helpers.
//!
//! Validates a data-source or provider configuration (`serde_json::Value`)
//! against its [`Schema`] before it is turned into a typed lookup.
//!
//! ```
//! use ecloud_provider::schema::{Schema, Attribute};
//! use ecloud_provider::validation::validate;
//! use serde_json::json;
//!
//! let schema = Schema::v0()
//!     .with_attribute("name", Attribute::filter_string())
//!     .with_attribute("level", Attribute::filter_int64());
//!
//! assert!(validate(&schema, &json!({"name": "gold", "level": 600})).is_empty());
//!
//! let diagnostics = validate(&schema, &json!({"level": "600"}));
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].attribute, Some("level".to_string()));
//! ```

use crate::schema::{Attribute, AttributeType, Diagnostic, DiagnosticSeverity, Schema};
use serde_json::Value;

/// Validate a JSON value against a schema.
///
/// # Validation Rules
///
/// - Required attributes must be present and non-null
/// - Optional attributes may be absent or null
/// - Computed-only attributes may be absent or null, never set
/// - Attribute types must match the schema
/// - Non-null values for attributes the schema does not declare are rejected
pub fn validate(schema: &Schema, value: &Value) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let obj = match value {
        Value::Object(map) => map,
        Value::Null => return diagnostics_for_null(schema),
        _ => {
            diagnostics.push(
                Diagnostic::error("Expected object")
                    .with_detail(format!("Got {}", value_type_name(value))),
            );
            return diagnostics;
        },
    };

    for (name, attr) in &schema.attributes {
        validate_attribute(attr, obj.get(name), name, &mut diagnostics);
    }

    for (name, value) in obj {
        if value.is_null() || schema.attributes.contains_key(name) {
            continue;
        }
        diagnostics.push(
            Diagnostic::error(format!("Unsupported argument '{}'", name))
                .with_detail("An argument with this name is not expected here")
                .with_attribute(name.as_str()),
        );
    }

    diagnostics
}

/// Validate a JSON value against a schema, returning Ok if valid or Err with diagnostics.
pub fn validate_result(schema: &Schema, value: &Value) -> Result<(), Vec<Diagnostic>> {
    let diagnostics = validate(schema, value);
    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(diagnostics)
    }
}

/// Check if a JSON value is valid against a schema.
pub fn is_valid(schema: &Schema, value: &Value) -> bool {
    validate(schema, value).is_empty()
}

fn diagnostics_for_null(schema: &Schema) -> Vec<Diagnostic> {
    schema
        .attributes
        .iter()
        .filter(|(_, attr)| attr.flags.required)
        .map(|(name, _)| missing_required(name))
        .collect()
}

fn validate_attribute(
    attr: &Attribute,
    value: Option<&Value>,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if !attr.flags.is_settable() {
        if value.is_some_and(|v| !v.is_null()) {
            diagnostics.push(
                Diagnostic::error(format!("Cannot set computed attribute '{}'", path))
                    .with_detail("This attribute is set by the provider")
                    .with_attribute(path),
            );
        }
        return;
    }

    match value {
        None | Some(Value::Null) => {
            if attr.flags.required {
                diagnostics.push(missing_required(path));
            }
        },
        Some(v) => validate_attribute_type(&attr.attr_type, v, path, diagnostics),
    }
}

fn validate_attribute_type(
    attr_type: &AttributeType,
    value: &Value,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match attr_type {
        AttributeType::String => {
            if !value.is_string() {
                diagnostics.push(type_error(path, "string", value));
            }
        },
        AttributeType::Int64 => {
            if !is_int64(value) {
                diagnostics.push(type_error(path, "int64", value));
            }
        },
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Floats are rejected even when integral; lookups decode into i64.
fn is_int64(value: &Value) -> bool {
    value.as_i64().is_some()
}

fn missing_required(path: &str) -> Diagnostic {
    Diagnostic::error(format!("Missing required attribute '{}'", path))
        .with_detail("This attribute is required and must be provided")
        .with_attribute(path)
}

fn type_error(path: &str, expected: &str, got: &Value) -> Diagnostic {
    Diagnostic {
        severity: DiagnosticSeverity::Error,
        summary: format!("Invalid type for attribute '{}'", path),
        detail: Some(format!(
            "Expected {}, got {}",
            expected,
            value_type_name(got)
        )),
        attribute: Some(path.to_string()),
    }
}
