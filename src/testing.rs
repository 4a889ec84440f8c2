//! Testing utilities for data sources and providers.
//!
//! [`MockClient`] stands in for the eCloud API: it serves canned records per
//! collection path, applies equality filters the way the API does, and
//! records every request. [`ProviderTester`] drives a [`ProviderService`]
//! without any transport.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ecloud_provider::testing::{MockClient, ProviderTester};
//! use ecloud_provider::ECloudProvider;
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let client = Arc::new(MockClient::new().with_records(
//!     "/ecloud/v2/tags",
//!     vec![json!({"id": "tag-1", "name": "web", "scope": "vpc"})],
//! ));
//! let tester = ProviderTester::new(ECloudProvider::with_client(client.clone()));
//!
//! let state = tester
//!     .read_data_source("ecloud_tag", json!({"name": "web"}))
//!     .await
//!     .unwrap();
//! assert_eq!(state["id"], "tag-1");
//! assert_eq!(client.requests().len(), 1);
//! # });
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::{ClientError, ListClient};
use crate::error::ProviderError;
use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::provider::ProviderService;
use crate::schema::{Diagnostic, DiagnosticSeverity, ProviderSchema};

#[derive(Debug, Clone)]
enum MockResponse {
    Records(Vec<Value>),
    Error { status: u16, body: String },
}

/// In-memory [`ListClient`] for tests.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
    requests: Mutex<Vec<(String, LookupQuery)>>,
}

impl MockClient {
    /// Create a client with no collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `records` for `path`, filtered by the request's equality terms.
    pub fn with_records(mut self, path: impl Into<String>, records: Vec<Value>) -> Self {
        self.responses
            .insert(path.into(), MockResponse::Records(records));
        self
    }

    /// Fail every request for `path` with the given status.
    pub fn with_error(
        mut self,
        path: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.responses.insert(
            path.into(),
            MockResponse::Error {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Requests received so far, as `(path, query)` pairs. Paths are in
    /// their encoded form.
    pub fn requests(&self) -> Vec<(String, LookupQuery)> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<(String, LookupQuery)> {
        self.requests().pop()
    }
}

/// Compare a record field to a filter value the way the API does: exact
/// string equality on the field's scalar form.
fn field_matches(record: &Value, field: &str, expected: &str) -> bool {
    match record.get(field) {
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        Some(Value::Bool(b)) => b.to_string() == expected,
        _ => false,
    }
}

#[async_trait]
impl ListClient for MockClient {
    async fn list(
        &self,
        path: &CollectionPath,
        query: &LookupQuery,
    ) -> Result<Vec<Value>, ClientError> {
        let path = path.to_string();
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((path.clone(), query.clone()));

        match self.responses.get(&path) {
            Some(MockResponse::Records(records)) => Ok(records
                .iter()
                .filter(|record| {
                    query
                        .filters()
                        .iter()
                        .all(|f| field_matches(record, &f.field, &f.value))
                })
                .cloned()
                .collect()),
            Some(MockResponse::Error { status, body }) => Err(ClientError::Api {
                status: *status,
                body: body.clone(),
            }),
            None => Err(ClientError::Api {
                status: 404,
                body: format!("no mock collection for {}", path),
            }),
        }
    }
}

/// A test harness for provider implementations.
pub struct ProviderTester<P: ProviderService> {
    provider: P,
}

impl<P: ProviderService> ProviderTester<P> {
    /// Create a new tester for the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Get a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get the provider's schema.
    pub fn schema(&self) -> ProviderSchema {
        self.provider.schema()
    }

    /// Get the list of data source type names.
    pub fn data_source_types(&self) -> Vec<String> {
        self.provider.metadata().data_sources
    }

    /// Validate provider configuration.
    pub async fn validate_provider_config(&self, config: Value) -> Result<(), TestError> {
        let diagnostics = self.provider.validate_provider_config(config).await?;
        check_diagnostics(diagnostics)
    }

    /// Configure the provider.
    pub async fn configure(&self, config: Value) -> Result<(), TestError> {
        let diagnostics = self.provider.configure(config).await?;
        check_diagnostics(diagnostics)
    }

    /// Stop the provider.
    pub async fn stop(&self) -> Result<(), ProviderError> {
        self.provider.stop().await
    }

    /// Validate a data source configuration.
    pub async fn validate_data_source_config(
        &self,
        data_source_type: &str,
        config: Value,
    ) -> Result<(), TestError> {
        let diagnostics = self
            .provider
            .validate_data_source_config(data_source_type, config)
            .await?;
        check_diagnostics(diagnostics)
    }

    /// Read a data source.
    pub async fn read_data_source(
        &self,
        data_source_type: &str,
        config: Value,
    ) -> Result<Value, ProviderError> {
        self.provider
            .read_data_source(data_source_type, config)
            .await
    }
}

/// Error type for test operations that may fail with diagnostics.
#[derive(Debug)]
pub enum TestError {
    /// The operation failed with diagnostics.
    Diagnostics(Vec<Diagnostic>),
    /// The operation failed with a provider error.
    Provider(ProviderError),
}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestError::Diagnostics(diags) => {
                writeln!(f, "Operation failed with {} diagnostic(s):", diags.len())?;
                for diag in diags {
                    write!(f, "  [{:?}] {}", diag.severity, diag.summary)?;
                    if let Some(detail) = &diag.detail {
                        write!(f, ": {}", detail)?;
                    }
                    if let Some(attr) = &diag.attribute {
                        write!(f, " (at {})", attr)?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            },
            TestError::Provider(e) => write!(f, "Provider error: {}", e),
        }
    }
}

impl std::error::Error for TestError {}

impl From<ProviderError> for TestError {
    fn from(e: ProviderError) -> Self {
        TestError::Provider(e)
    }
}

fn check_diagnostics(diagnostics: Vec<Diagnostic>) -> Result<(), TestError> {
    let errors: Vec<_> = diagnostics
        .into_iter()
        .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TestError::Diagnostics(errors))
    }
}

// =========================================================================
// Assertion Helpers
// =========================================================================

/// Assert that a read failed because nothing matched.
///
/// # Panics
///
/// Panics unless `result` is [`ProviderError::NotFound`] for `domain`.
pub fn assert_not_found(result: &Result<Value, ProviderError>, domain: &str) {
    match result {
        Err(ProviderError::NotFound { domain: d }) if *d == domain => {},
        other => panic!("Expected no {} to be found, got {:?}", domain, other),
    }
}

/// Assert that a read failed because `count` records matched.
///
/// # Panics
///
/// Panics unless `result` is [`ProviderError::Ambiguous`] for `domain`.
pub fn assert_ambiguous(result: &Result<Value, ProviderError>, domain: &str, count: usize) {
    match result {
        Err(ProviderError::Ambiguous { domain: d, count: c }) if *d == domain && *c == count => {},
        other => panic!(
            "Expected {} matching {} records, got {:?}",
            count, domain, other
        ),
    }
}

/// Assert that every key in `expected` has the same value in `state`.
///
/// # Panics
///
/// Panics on the first mismatching or missing attribute.
pub fn assert_state_contains(state: &Value, expected: &Value) {
    let Some(expected) = expected.as_object() else {
        panic!("Expected attributes must be an object, got {}", expected);
    };
    for (name, value) in expected {
        assert_eq!(
            state.get(name),
            Some(value),
            "State attribute '{}' mismatch in {}",
            name,
            state
        );
    }
}

/// Assert that diagnostics contain no errors.
///
/// # Panics
///
/// Panics if there are any error diagnostics.
pub fn assert_no_errors(diagnostics: &[Diagnostic]) {
    let errors: Vec<_> = diagnostics.iter().filter(|d| d.is_error()).collect();

    assert!(
        errors.is_empty(),
        "Expected no errors, but got {} error(s): {:?}",
        errors.len(),
        errors.iter().map(|d| &d.summary).collect::<Vec<_>>()
    );
}

/// Assert that diagnostics contain an error with the given summary substring.
///
/// # Panics
///
/// Panics if no error diagnostic contains the given substring.
pub fn assert_error_contains(diagnostics: &[Diagnostic], substring: &str) {
    let has_matching_error = diagnostics
        .iter()
        .any(|d| d.is_error() && d.summary.contains(substring));

    assert!(
        has_matching_error,
        "Expected an error containing '{}', but no matching error found. Errors: {:?}",
        substring,
        diagnostics
            .iter()
            .filter(|d| d.is_error())
            .map(|d| &d.summary)
            .collect::<Vec<_>>()
    );
}
