//! Schema types describing provider configuration and data sources.
//!
//! A data-source schema lists the filter arguments a user may supply and the
//! attributes written back after a successful lookup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The type of an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// A string value.
    String,
    /// A 64-bit integer.
    Int64,
}

/// Describes how an attribute can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttributeFlags {
    /// The attribute is required in configuration.
    pub required: bool,
    /// The attribute is optional in configuration.
    pub optional: bool,
    /// The attribute is set by the provider.
    pub computed: bool,
    /// The attribute is sensitive and should be hidden in logs/UI.
    pub sensitive: bool,
}

impl AttributeFlags {
    /// Flags for a required attribute.
    pub fn required() -> Self {
        Self {
            required: true,
            ..Default::default()
        }
    }

    /// Flags for a read-only attribute.
    pub fn computed() -> Self {
        Self {
            computed: true,
            ..Default::default()
        }
    }

    /// Flags for a filter argument: optional in config, filled in from the
    /// resolved record.
    pub fn optional_computed() -> Self {
        Self {
            optional: true,
            computed: true,
            ..Default::default()
        }
    }

    /// Whether a user may set this attribute.
    pub fn is_settable(&self) -> bool {
        self.required || self.optional
    }
}

/// Describes a single attribute in a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// The type of the attribute.
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    /// Flags describing how the attribute can be used.
    #[serde(flatten)]
    pub flags: AttributeFlags,
    /// Human-readable description of the attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attribute {
    /// Create a new attribute with the given type and flags.
    pub fn new(attr_type: AttributeType, flags: AttributeFlags) -> Self {
        Self {
            attr_type,
            flags,
            description: None,
        }
    }

    /// A required string, typically a parent ID used in the request path.
    pub fn required_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::required())
    }

    /// A string filter argument.
    pub fn filter_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::optional_computed())
    }

    /// An integer filter argument.
    pub fn filter_int64() -> Self {
        Self::new(AttributeType::Int64, AttributeFlags::optional_computed())
    }

    /// A read-only string.
    pub fn computed_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::computed())
    }

    /// A read-only integer.
    pub fn computed_int64() -> Self {
        Self::new(AttributeType::Int64, AttributeFlags::computed())
    }

    /// An optional string provider setting.
    pub fn optional_string() -> Self {
        Self::new(
            AttributeType::String,
            AttributeFlags {
                optional: true,
                ..Default::default()
            },
        )
    }

    /// An optional integer provider setting.
    pub fn optional_int64() -> Self {
        Self::new(
            AttributeType::Int64,
            AttributeFlags {
                optional: true,
                ..Default::default()
            },
        )
    }

    /// Set the description for this attribute.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark this attribute as sensitive.
    pub fn sensitive(mut self) -> Self {
        self.flags.sensitive = true;
        self
    }
}

/// Schema for a data source or for the provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Schema {
    /// The version of this schema.
    #[serde(default)]
    pub version: u64,
    /// Attributes keyed by name.
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Schema {
    /// Create a schema at version 0.
    pub fn v0() -> Self {
        Self::default()
    }

    /// Add an attribute to the schema.
    pub fn with_attribute(mut self, name: impl Into<String>, attr: Attribute) -> Self {
        self.attributes.insert(name.into(), attr);
        self
    }

    /// Set the description for this schema.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Names of the attributes a user may set, in order.
    pub fn settable_attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|(_, attr)| attr.flags.is_settable())
            .map(|(name, _)| name.as_str())
    }
}

/// Schema for the whole provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProviderSchema {
    /// Schema for provider configuration.
    #[serde(default)]
    pub provider: Schema,
    /// Schemas for each data source type.
    #[serde(default)]
    pub data_sources: BTreeMap<String, Schema>,
}

impl ProviderSchema {
    /// Create a new empty provider schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider configuration schema.
    pub fn with_provider_config(mut self, schema: Schema) -> Self {
        self.provider = schema;
        self
    }

    /// Add a data source schema.
    pub fn with_data_source(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.data_sources.insert(name.into(), schema);
        self
    }
}

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// An error that prevents the operation from completing.
    Error,
    /// A warning that doesn't prevent the operation but should be addressed.
    Warning,
}

/// A diagnostic message from the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity of the diagnostic.
    pub severity: DiagnosticSeverity,
    /// A short summary of the issue.
    pub summary: String,
    /// A detailed description of the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The attribute path where the issue occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            summary: summary.into(),
            detail: None,
            attribute: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(summary: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            summary: summary.into(),
            detail: None,
            attribute: None,
        }
    }

    /// Add detail to this diagnostic.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the attribute path for this diagnostic.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Whether this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

/// Render error diagnostics as a single line, for folding into an error.
pub fn summarize(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .filter(|d| d.is_error())
        .map(|d| match &d.detail {
            Some(detail) => format!("{}: {}", d.summary, detail),
            None => d.summary.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_flags() {
        let required = AttributeFlags::required();
        assert!(required.required);
        assert!(required.is_settable());

        let computed = AttributeFlags::computed();
        assert!(computed.computed);
        assert!(!computed.is_settable());

        let filter = AttributeFlags::optional_computed();
        assert!(filter.optional);
        assert!(filter.computed);
        assert!(filter.is_settable());
    }

    #[test]
    fn test_schema_builder() {
        let schema = Schema::v0()
            .with_description("Look up a tag")
            .with_attribute("tag_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute("created_at", Attribute::computed_string());

        assert_eq!(schema.version, 0);
        assert!(schema.attribute("tag_id").is_some());
        assert_eq!(
            schema.settable_attributes().collect::<Vec<_>>(),
            vec!["name", "tag_id"]
        );
    }

    #[test]
    fn test_sensitive_attribute() {
        let attr = Attribute::computed_string()
            .sensitive()
            .with_description("Credential password");
        assert!(attr.flags.sensitive);
        assert!(attr.flags.computed);
        assert_eq!(attr.description.as_deref(), Some("Credential password"));
    }

    #[test]
    fn test_provider_schema() {
        let schema = ProviderSchema::new()
            .with_provider_config(
                Schema::v0().with_attribute("api_key", Attribute::optional_string().sensitive()),
            )
            .with_data_source(
                "ecloud_tag",
                Schema::v0().with_attribute("name", Attribute::filter_string()),
            );

        assert!(schema.provider.attributes.contains_key("api_key"));
        assert!(schema.data_sources.contains_key("ecloud_tag"));
    }

    #[test]
    fn test_diagnostic_summary() {
        let diagnostics = vec![
            Diagnostic::error("Invalid type for attribute 'level'").with_detail("Expected int64"),
            Diagnostic::warning("ignored"),
            Diagnostic::error("Missing required attribute 'instance_id'"),
        ];
        assert_eq!(
            summarize(&diagnostics),
            "Invalid type for attribute 'level': Expected int64; \
             Missing required attribute 'instance_id'"
        );
    }
}
