//! Type-erased data sources and their registry.
//!
//! Each [`Lookup`] is wrapped in a [`LookupDataSource`] so the provider can
//! hold all of them in one [`DataSourceRegistry`] keyed by type name.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::ListClient;
use crate::error::ProviderError;
use crate::resolve::{resolve, Lookup};
use crate::schema::{summarize, Diagnostic, Schema};
use crate::validation;

/// A readable data source.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Type name, e.g. `ecloud_tag`.
    fn type_name(&self) -> &'static str;

    /// Schema of arguments and attributes.
    fn schema(&self) -> Schema;

    /// Validate a configuration against the schema.
    fn validate(&self, config: &Value) -> Vec<Diagnostic> {
        validation::validate(&self.schema(), config)
    }

    /// Resolve the configuration to exactly one record and return its state.
    async fn read(&self, client: &dyn ListClient, config: Value) -> Result<Value, ProviderError>;
}

/// [`DataSource`] adapter for a [`Lookup`] implementation.
pub struct LookupDataSource<L> {
    _lookup: PhantomData<fn() -> L>,
}

impl<L: Lookup> LookupDataSource<L> {
    /// Create the adapter.
    pub fn new() -> Self {
        Self {
            _lookup: PhantomData,
        }
    }
}

impl<L: Lookup> Default for LookupDataSource<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<L: Lookup> DataSource for LookupDataSource<L> {
    fn type_name(&self) -> &'static str {
        L::DATA_SOURCE
    }

    fn schema(&self) -> Schema {
        L::schema()
    }

    fn validate(&self, config: &Value) -> Vec<Diagnostic> {
        let mut diagnostics = validation::validate(&L::schema(), config);
        if diagnostics.is_empty() {
            let scope = decode::<L>(config.clone()).and_then(|lookup| lookup.path().check());
            match scope {
                Ok(()) => {},
                Err(ProviderError::Validation(message)) => {
                    diagnostics.push(Diagnostic::error(message))
                },
                Err(e) => diagnostics.push(Diagnostic::error(e.to_string())),
            }
        }
        diagnostics
    }

    async fn read(&self, client: &dyn ListClient, config: Value) -> Result<Value, ProviderError> {
        let diagnostics = self.validate(&config);
        if diagnostics.iter().any(Diagnostic::is_error) {
            return Err(ProviderError::Validation(format!(
                "{}: {}",
                L::DATA_SOURCE,
                summarize(&diagnostics)
            )));
        }

        let lookup = decode::<L>(config)?;
        let resolved = resolve(client, &lookup).await?;
        Ok(resolved.state)
    }
}

fn decode<L: Lookup>(config: Value) -> Result<L, ProviderError> {
    let config = match config {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    Ok(serde_json::from_value(config)?)
}

/// Data sources keyed by type name.
#[derive(Default)]
pub struct DataSourceRegistry {
    sources: BTreeMap<&'static str, Box<dyn DataSource>>,
}

impl DataSourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the data source for `L`.
    pub fn register<L: Lookup>(mut self) -> Self {
        self.sources
            .insert(L::DATA_SOURCE, Box::new(LookupDataSource::<L>::new()));
        self
    }

    /// Find a data source by type name.
    pub fn get(&self, type_name: &str) -> Option<&dyn DataSource> {
        self.sources.get(type_name).map(|source| source.as_ref())
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.sources.keys().map(|name| name.to_string()).collect()
    }

    /// Schemas of every registered data source.
    pub fn schemas(&self) -> BTreeMap<String, Schema> {
        self.sources
            .iter()
            .map(|(name, source)| (name.to_string(), source.schema()))
            .collect()
    }

    /// Number of registered data sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl std::fmt::Debug for DataSourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSourceRegistry")
            .field("sources", &self.sources.keys().collect::<Vec<_>>())
            .finish()
    }
}
