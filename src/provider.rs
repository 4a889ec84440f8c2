//! The provider surface.
//!
//! [`ProviderService`] is the trait a host (a plugin server, a CLI, a test)
//! drives; [`ECloudProvider`] implements it over the eCloud data sources.
//!
//! The listing client is an explicit dependency: either built by
//! [`ProviderService::configure`] from the provider block, or injected with
//! [`ECloudProvider::with_client`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use crate::client::{HttpClient, ListClient};
use crate::config::ProviderConfig;
use crate::data_source::DataSourceRegistry;
use crate::data_sources;
use crate::error::ProviderError;
use crate::schema::{Diagnostic, ProviderSchema};
use crate::validation;

/// Provider metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProviderMetadata {
    /// Data source type names.
    pub data_sources: Vec<String>,
}

/// Trait that provider implementations must implement.
#[async_trait::async_trait]
pub trait ProviderService: Send + Sync + 'static {
    // =========================================================================
    // Schema & Metadata
    // =========================================================================

    /// Return the provider's schema including all data sources.
    fn schema(&self) -> ProviderSchema;

    /// Return provider metadata. By default, this is derived from the schema.
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            data_sources: self.schema().data_sources.keys().cloned().collect(),
        }
    }

    // =========================================================================
    // Provider Lifecycle
    // =========================================================================

    /// Validate the provider configuration before configuring.
    async fn validate_provider_config(
        &self,
        config: serde_json::Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        let _ = config;
        Ok(vec![])
    }

    /// Configure the provider with credentials and settings.
    async fn configure(&self, config: serde_json::Value) -> Result<Vec<Diagnostic>, ProviderError>;

    /// Stop the provider gracefully.
    async fn stop(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    // =========================================================================
    // Data Source Operations
    // =========================================================================

    /// Validate a data source's configuration.
    async fn validate_data_source_config(
        &self,
        data_source_type: &str,
        config: serde_json::Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        let _ = (data_source_type, config);
        Ok(vec![])
    }

    /// Read a data source.
    async fn read_data_source(
        &self,
        data_source_type: &str,
        _config: serde_json::Value,
    ) -> Result<serde_json::Value, ProviderError> {
        Err(ProviderError::UnknownDataSource(
            data_source_type.to_string(),
        ))
    }
}

/// The eCloud provider.
pub struct ECloudProvider {
    registry: DataSourceRegistry,
    client: RwLock<Option<Arc<dyn ListClient>>>,
}

impl ECloudProvider {
    /// Create an unconfigured provider with every eCloud data source.
    pub fn new() -> Self {
        Self {
            registry: data_sources::registry(),
            client: RwLock::new(None),
        }
    }

    /// Create a provider that lists through `client`.
    pub fn with_client(client: Arc<dyn ListClient>) -> Self {
        Self {
            registry: data_sources::registry(),
            client: RwLock::new(Some(client)),
        }
    }

    /// The registered data sources.
    pub fn registry(&self) -> &DataSourceRegistry {
        &self.registry
    }

    /// Whether a client is available.
    pub async fn is_configured(&self) -> bool {
        self.client.read().await.is_some()
    }

    async fn client(&self) -> Result<Arc<dyn ListClient>, ProviderError> {
        self.client.read().await.clone().ok_or_else(|| {
            ProviderError::Configuration(
                "provider must be configured before reading data sources".to_string(),
            )
        })
    }
}

impl Default for ECloudProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ECloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ECloudProvider")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl ProviderService for ECloudProvider {
    fn schema(&self) -> ProviderSchema {
        let mut schema = ProviderSchema::new().with_provider_config(ProviderConfig::schema());
        schema.data_sources = self.registry.schemas();
        schema
    }

    #[instrument(skip(self, config), name = "provider.validate_config")]
    async fn validate_provider_config(
        &self,
        config: serde_json::Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        let mut diagnostics = validation::validate(&ProviderConfig::schema(), &config);
        if diagnostics.is_empty() {
            if let Err(e) = ProviderConfig::from_value(config) {
                diagnostics.push(Diagnostic::error(e.to_string()));
            }
        }
        if !diagnostics.is_empty() {
            warn!(diagnostics = diagnostics.len(), "provider config has errors");
        }
        Ok(diagnostics)
    }

    #[instrument(skip(self, config), name = "provider.configure")]
    async fn configure(&self, config: serde_json::Value) -> Result<Vec<Diagnostic>, ProviderError> {
        let diagnostics = validation::validate(&ProviderConfig::schema(), &config);
        if diagnostics.iter().any(Diagnostic::is_error) {
            warn!(diagnostics = diagnostics.len(), "Configure completed with errors");
            return Ok(diagnostics);
        }

        let config = ProviderConfig::from_value(config)?;
        let client = HttpClient::new(&config)
            .map_err(|e| ProviderError::Configuration(e.to_string()))?;
        *self.client.write().await = Some(Arc::new(client));

        info!(api_url = %config.api_url, "Configure completed successfully");
        Ok(diagnostics)
    }

    async fn stop(&self) -> Result<(), ProviderError> {
        debug!("dropping API client");
        self.client.write().await.take();
        Ok(())
    }

    #[instrument(skip(self, config), name = "provider.validate_data_source_config")]
    async fn validate_data_source_config(
        &self,
        data_source_type: &str,
        config: serde_json::Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        let source = self
            .registry
            .get(data_source_type)
            .ok_or_else(|| ProviderError::UnknownDataSource(data_source_type.to_string()))?;
        Ok(source.validate(&config))
    }

    #[instrument(skip(self, config), name = "provider.read_data_source")]
    async fn read_data_source(
        &self,
        data_source_type: &str,
        config: serde_json::Value,
    ) -> Result<serde_json::Value, ProviderError> {
        let source = self
            .registry
            .get(data_source_type)
            .ok_or_else(|| ProviderError::UnknownDataSource(data_source_type.to_string()))?;
        let client = self.client().await?;

        match source.read(client.as_ref(), config).await {
            Ok(state) => {
                debug!("ReadDataSource completed successfully");
                Ok(state)
            },
            Err(e) => {
                error!(error = %e, "ReadDataSource failed");
                Err(e)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        assert_ambiguous, assert_error_contains, assert_not_found, assert_state_contains,
        MockClient, ProviderTester, TestError,
    };
    use serde_json::json;

    fn affinity_rules() -> Arc<MockClient> {
        Arc::new(MockClient::new().with_records(
            "/ecloud/v2/affinity-rules",
            vec![
                json!({"id": "ar-1", "name": "rule-1", "vpc_id": "vpc-1",
                       "availability_zone_id": "az-1", "type": "anti-affinity"}),
                json!({"id": "ar-2", "name": "rule-2", "vpc_id": "vpc-1",
                       "availability_zone_id": "az-1", "type": "affinity"}),
            ],
        ))
    }

    #[test]
    fn test_schema_lists_every_data_source() {
        let tester = ProviderTester::new(ECloudProvider::new());
        let types = tester.data_source_types();
        assert_eq!(types.len(), 26);
        assert!(types.contains(&"ecloud_vpn_profile_group".to_string()));

        let schema = tester.schema();
        assert!(schema.provider.attributes["api_key"].flags.sensitive);
        for (name, ds) in &schema.data_sources {
            assert!(
                ds.settable_attributes().next().is_some(),
                "{} declares no arguments",
                name
            );
        }
    }

    #[tokio::test]
    async fn test_read_single_match() {
        let tester = ProviderTester::new(ECloudProvider::with_client(affinity_rules()));
        let state = tester
            .read_data_source("ecloud_affinity_rule", json!({"name": "rule-1"}))
            .await
            .unwrap();

        assert_state_contains(
            &state,
            &json!({
                "id": "ar-1",
                "affinity_rule_id": "ar-1",
                "name": "rule-1",
                "vpc_id": "vpc-1",
                "availability_zone_id": "az-1",
                "type": "anti-affinity"
            }),
        );
    }

    #[tokio::test]
    async fn test_read_not_found_and_ambiguous() {
        let tester = ProviderTester::new(ECloudProvider::with_client(affinity_rules()));

        let result = tester
            .read_data_source("ecloud_affinity_rule", json!({"name": "rule-9"}))
            .await;
        assert_not_found(&result, "affinity rule");

        let result = tester
            .read_data_source("ecloud_affinity_rule", json!({"vpc_id": "vpc-1"}))
            .await;
        assert_ambiguous(&result, "affinity rule", 2);
    }

    #[tokio::test]
    async fn test_read_unknown_type() {
        let tester = ProviderTester::new(ECloudProvider::with_client(affinity_rules()));
        let err = tester
            .read_data_source("ecloud_instance", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::UnknownDataSource(_)));
    }

    #[tokio::test]
    async fn test_read_requires_configuration() {
        let tester = ProviderTester::new(ECloudProvider::new());
        let err = tester
            .read_data_source("ecloud_tag", json!({"name": "web"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_configure_builds_client() {
        let tester = ProviderTester::new(ECloudProvider::new());
        tester
            .configure(json!({"api_key": "k", "api_url": "http://127.0.0.1:9"}))
            .await
            .unwrap();
        assert!(tester.provider().is_configured().await);

        tester.stop().await.unwrap();
        assert!(!tester.provider().is_configured().await);
    }

    #[tokio::test]
    async fn test_configure_reports_schema_errors() {
        let tester = ProviderTester::new(ECloudProvider::new());
        let err = tester
            .configure(json!({"api_key": "k", "timeout_seconds": "soon"}))
            .await
            .unwrap_err();
        match err {
            TestError::Diagnostics(diags) => assert_error_contains(&diags, "timeout_seconds"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!tester.provider().is_configured().await);
    }

    #[tokio::test]
    async fn test_validate_provider_config_reports_bad_url() {
        let tester = ProviderTester::new(ECloudProvider::new());
        let err = tester
            .validate_provider_config(json!({"api_key": "k", "api_url": "ftp://x"}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[tokio::test]
    async fn test_validate_data_source_config() {
        let tester = ProviderTester::new(ECloudProvider::new());
        assert!(tester
            .validate_data_source_config("ecloud_iops", json!({"level": 600}))
            .await
            .is_ok());

        let err = tester
            .validate_data_source_config("ecloud_instance_credential", json!({"name": "root"}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("instance_id"));

        let err = tester
            .validate_data_source_config("ecloud_nope", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TestError::Provider(ProviderError::UnknownDataSource(_))
        ));
    }

    #[tokio::test]
    async fn test_remote_failure_surfaces_domain() {
        let client = Arc::new(MockClient::new().with_error("/ecloud/v2/vpn-gateways", 500, "oops"));
        let tester = ProviderTester::new(ECloudProvider::with_client(client));
        let err = tester
            .read_data_source("ecloud_vpn_gateway", json!({"name": "gw"}))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "error retrieving VPN gateway list: API returned status 500: oops"
        );
    }
}
