//! Error types for eCloud data sources.

use thiserror::Error;

use crate::client::ClientError;

/// Errors that can occur while reading a data source.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The remote listing call failed.
    #[error("error retrieving {domain} list: {source}")]
    Api {
        /// The lookup domain being listed (e.g. `tag`).
        domain: &'static str,
        /// The underlying transport or service error.
        #[source]
        source: ClientError,
    },

    /// The query matched no records.
    #[error("no {domain} found with provided arguments")]
    NotFound {
        /// The lookup domain.
        domain: &'static str,
    },

    /// The query matched more than one record.
    #[error("more than 1 {domain} found with provided arguments (found {count})")]
    Ambiguous {
        /// The lookup domain.
        domain: &'static str,
        /// How many records matched.
        count: usize,
    },

    /// The data source configuration is invalid.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider is unconfigured or its configuration is invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The requested data source type is not registered.
    #[error("Unknown data source type: {0}")]
    UnknownDataSource(String),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProviderError {
    /// Whether this error came from the cardinality check rather than the
    /// remote call or the configuration.
    pub fn is_cardinality(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Ambiguous { .. })
    }

    /// The lookup domain the error refers to, if any.
    pub fn domain(&self) -> Option<&'static str> {
        match self {
            Self::Api { domain, .. } | Self::NotFound { domain } | Self::Ambiguous { domain, .. } => {
                Some(domain)
            },
            _ => None,
        }
    }
}
