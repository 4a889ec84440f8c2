//! `ecloud_affinity_rule`: affinity and anti-affinity rules within a VPC.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_affinity_rule`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AffinityRuleLookup {
    pub affinity_rule_id: Option<String>,
    pub vpc_id: Option<String>,
    pub availability_zone_id: Option<String>,
    pub name: Option<String>,
    /// `affinity` or `anti-affinity`.
    #[serde(rename = "type")]
    pub rule_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AffinityRule {
    pub id: String,
    pub name: Option<String>,
    pub vpc_id: Option<String>,
    pub availability_zone_id: Option<String>,
    #[serde(rename = "type")]
    pub rule_type: Option<String>,
}

impl Lookup for AffinityRuleLookup {
    type Record = AffinityRule;
    const DATA_SOURCE: &'static str = "ecloud_affinity_rule";
    const DOMAIN: &'static str = "affinity rule";

    fn schema() -> Schema {
        Schema::v0()
            .with_description("Look up a single affinity rule")
            .with_attribute("affinity_rule_id", Attribute::filter_string())
            .with_attribute("vpc_id", Attribute::filter_string())
            .with_attribute("availability_zone_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute(
                "type",
                Attribute::filter_string().with_description("affinity or anti-affinity"),
            )
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/affinity-rules")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.affinity_rule_id.as_deref())
            .with_eq("vpc_id", self.vpc_id.as_deref())
            .with_eq("availability_zone_id", self.availability_zone_id.as_deref())
            .with_eq("name", self.name.as_deref())
            .with_eq("type", self.rule_type.as_deref())
    }

    fn id(record: &AffinityRule) -> String {
        record.id.clone()
    }

    fn state(record: &AffinityRule) -> Value {
        json!({
            "affinity_rule_id": record.id,
            "vpc_id": record.vpc_id,
            "availability_zone_id": record.availability_zone_id,
            "name": record.name,
            "type": record.rule_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::resolve::resolve;
    use crate::testing::MockClient;

    fn client() -> MockClient {
        MockClient::new().with_records(
            "/ecloud/v2/affinity-rules",
            vec![
                json!({"id": "ar-1", "name": "rule-1", "vpc_id": "vpc-1", "type": "affinity"}),
                json!({"id": "ar-2", "name": "rule-2", "vpc_id": "vpc-1", "type": "anti-affinity"}),
            ],
        )
    }

    #[tokio::test]
    async fn test_type_argument_uses_type_field() {
        let lookup: AffinityRuleLookup =
            serde_json::from_value(json!({"type": "anti-affinity"})).unwrap();
        let client = client();

        let resolved = resolve(&client, &lookup).await.unwrap();
        assert_eq!(resolved.id, "ar-2");
        assert_eq!(resolved.state["type"], "anti-affinity");
        assert_eq!(client.last_request().unwrap().1.get("type"), Some("anti-affinity"));
    }

    #[tokio::test]
    async fn test_shared_vpc_is_ambiguous() {
        let lookup = AffinityRuleLookup {
            vpc_id: Some("vpc-1".to_string()),
            ..Default::default()
        };
        let err = resolve(&client(), &lookup).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "more than 1 affinity rule found with provided arguments (found 2)"
        );
        assert!(matches!(err, ProviderError::Ambiguous { count: 2, .. }));
    }
}
