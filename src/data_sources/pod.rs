//! `ecloud_pod`: v1 pods.
//!
//! The v1 pod listing cannot filter on name, so `name` is matched locally
//! after the listing returns.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::{local_eq, Lookup};
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_pod`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodLookup {
    /// Numeric pod ID.
    pub pod_id: Option<i64>,
    /// Exact pod name, matched client-side.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pod {
    pub id: i64,
    pub name: Option<String>,
}

impl Lookup for PodLookup {
    type Record = Pod;
    const DATA_SOURCE: &'static str = "ecloud_pod";
    const DOMAIN: &'static str = "pod";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("pod_id", Attribute::filter_int64())
            .with_attribute("name", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v1/pods")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new().with_eq("id", self.pod_id)
    }

    fn matches(&self, record: &Pod) -> bool {
        local_eq(self.name.as_deref(), record.name.as_deref())
    }

    fn id(record: &Pod) -> String {
        record.id.to_string()
    }

    fn state(record: &Pod) -> Value {
        json!({
            "pod_id": record.id,
            "name": record.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::resolve::resolve;
    use crate::testing::MockClient;

    fn pods() -> MockClient {
        MockClient::new().with_records(
            "/ecloud/v1/pods",
            vec![
                json!({"id": 14, "name": "Manchester South"}),
                json!({"id": 15, "name": "Manchester North"}),
                json!({"id": 16, "name": "Manchester North"}),
            ],
        )
    }

    #[tokio::test]
    async fn test_name_is_filtered_locally() {
        let client = pods();
        let lookup = PodLookup {
            name: Some("Manchester South".to_string()),
            ..Default::default()
        };

        let resolved = resolve(&client, &lookup).await.unwrap();
        assert_eq!(resolved.id, "14");
        assert_eq!(resolved.state["pod_id"], 14);
        assert_eq!(resolved.state["id"], "14");
        assert!(client.last_request().unwrap().1.is_empty());
    }

    #[tokio::test]
    async fn test_local_name_is_case_sensitive() {
        let lookup = PodLookup {
            name: Some("manchester south".to_string()),
            ..Default::default()
        };
        let err = resolve(&pods(), &lookup).await.unwrap_err();
        assert!(matches!(err, ProviderError::NotFound { domain: "pod" }));
    }

    #[tokio::test]
    async fn test_duplicate_local_name_is_ambiguous() {
        let lookup = PodLookup {
            name: Some("Manchester North".to_string()),
            ..Default::default()
        };
        let err = resolve(&pods(), &lookup).await.unwrap_err();
        assert!(matches!(err, ProviderError::Ambiguous { count: 2, .. }));
    }

    #[tokio::test]
    async fn test_id_and_name_combine() {
        let client = pods();
        let lookup = PodLookup {
            pod_id: Some(16),
            name: Some("Manchester North".to_string()),
        };

        let resolved = resolve(&client, &lookup).await.unwrap();
        assert_eq!(resolved.id, "16");
        assert_eq!(client.last_request().unwrap().1.to_string(), "id:eq=16");
    }
}
