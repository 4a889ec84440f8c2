//! `ecloud_solution`: v1 solutions.
//!
//! As with pods, the name is matched client-side.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::{local_eq, Lookup};
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_solution`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolutionLookup {
    pub solution_id: Option<i64>,
    /// `Hybrid` or `Private`.
    pub environment: Option<String>,
    /// Exact solution name, matched client-side.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Solution {
    pub id: i64,
    pub name: Option<String>,
    pub environment: Option<String>,
}

impl Lookup for SolutionLookup {
    type Record = Solution;
    const DATA_SOURCE: &'static str = "ecloud_solution";
    const DOMAIN: &'static str = "solution";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("solution_id", Attribute::filter_int64())
            .with_attribute("environment", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v1/solutions")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.solution_id)
            .with_eq("environment", self.environment.as_deref())
    }

    fn matches(&self, record: &Solution) -> bool {
        local_eq(self.name.as_deref(), record.name.as_deref())
    }

    fn id(record: &Solution) -> String {
        record.id.to_string()
    }

    fn state(record: &Solution) -> Value {
        json!({
            "solution_id": record.id,
            "environment": record.environment,
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

    #[tokio::test]
    async fn test_environment_remote_name_local() {
        let client = MockClient::new().with_records(
            "/ecloud/v1/solutions",
            vec![
                json!({"id": 100, "name": "prod", "environment": "Hybrid"}),
                json!({"id": 101, "name": "prod", "environment": "Private"}),
                json!({"id": 102, "name": "dev", "environment": "Hybrid"}),
            ],
        );
        let lookup = SolutionLookup {
            environment: Some("Hybrid".to_string()),
            name: Some("prod".to_string()),
            ..Default::default()
        };

        let resolved = resolve(&client, &lookup).await.unwrap();
        assert_eq!(resolved.id, "100");
        assert_eq!(resolved.state["solution_id"], 100);

        let (_, query) = client.last_request().unwrap();
        assert_eq!(query.to_string(), "environment:eq=Hybrid");
        assert_eq!(query.get("name"), None);
    }

    #[tokio::test]
    async fn test_unknown_name_is_not_found() {
        let client = MockClient::new().with_records(
            "/ecloud/v1/solutions",
            vec![json!({"id": 100, "name": "prod", "environment": "Hybrid"})],
        );
        let lookup = SolutionLookup {
            name: Some("staging".to_string()),
            ..Default::default()
        };

        let err = resolve(&client, &lookup).await.unwrap_err();
        assert!(matches!(err, ProviderError::NotFound { domain: "solution" }));
    }
}
