//! Filtered singleton resolution.
//!
//! Every eCloud data source follows the same template: turn the supplied
//! arguments into equality filters, list the collection once, require
//! exactly one match and copy its fields into state. [`Lookup`] describes
//! one domain; [`resolve`] runs the template for any of them.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::{ClientError, ListClient};
use crate::error::ProviderError;
use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::schema::Schema;

/// A single-result lookup over one eCloud collection.
///
/// Implementors are the typed argument structs of each data source. Absent
/// arguments are `None` and contribute no filter.
pub trait Lookup: DeserializeOwned + Send + Sync + 'static {
    /// Record type returned by the collection endpoint.
    type Record: DeserializeOwned + Send;

    /// Data source type name, e.g. `ecloud_tag`.
    const DATA_SOURCE: &'static str;

    /// Human-readable domain used in error messages, e.g. `tag`.
    const DOMAIN: &'static str;

    /// Arguments accepted and attributes produced by this data source.
    fn schema() -> Schema;

    /// Collection path to list. Arguments that scope the collection go in
    /// as ID segments.
    fn path(&self) -> CollectionPath;

    /// Remote equality filters for the supplied arguments.
    fn query(&self) -> LookupQuery;

    /// Client-side check for arguments the API cannot filter on.
    fn matches(&self, _record: &Self::Record) -> bool {
        true
    }

    /// Identifier of a record.
    fn id(record: &Self::Record) -> String;

    /// State attributes for a record, excluding `id`. Must be an object.
    fn state(record: &Self::Record) -> Value;
}

/// A successfully resolved lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<R> {
    /// Identifier of the matched record.
    pub id: String,
    /// The matched record.
    pub record: R,
    /// State to hand back to the caller; always carries `id`.
    pub state: Value,
}

/// Reduce a candidate set to its only element.
///
/// Zero candidates is [`ProviderError::NotFound`]; more than one is
/// [`ProviderError::Ambiguous`] with the count.
pub fn exactly_one<T>(domain: &'static str, candidates: Vec<T>) -> Result<T, ProviderError> {
    let count = candidates.len();
    let mut iter = candidates.into_iter();
    match (iter.next(), count) {
        (Some(only), 1) => Ok(only),
        (None, _) => Err(ProviderError::NotFound { domain }),
        (Some(_), count) => Err(ProviderError::Ambiguous { domain, count }),
    }
}

/// Exact, case-sensitive match of an optional argument against a record
/// field. An absent argument matches everything.
pub fn local_eq<T>(wanted: Option<&T>, actual: Option<&T>) -> bool
where
    T: PartialEq + ?Sized,
{
    match wanted {
        Some(wanted) => actual == Some(wanted),
        None => true,
    }
}

/// Run a lookup against `client`.
pub async fn resolve<L: Lookup>(
    client: &dyn ListClient,
    lookup: &L,
) -> Result<Resolved<L::Record>, ProviderError> {
    let path = lookup.path();
    path.check()?;
    let query = lookup.query();
    debug!(data_source = L::DATA_SOURCE, path = %path, query = %query, "listing candidates");

    let raw = client
        .list(&path, &query)
        .await
        .map_err(|source| ProviderError::Api {
            domain: L::DOMAIN,
            source,
        })?;
    let fetched = raw.len();

    let mut candidates = Vec::with_capacity(fetched);
    for (index, value) in raw.into_iter().enumerate() {
        let record: L::Record = serde_json::from_value(value).map_err(|e| ProviderError::Api {
            domain: L::DOMAIN,
            source: ClientError::InvalidResponse(format!("record {}: {}", index, e)),
        })?;
        if lookup.matches(&record) {
            candidates.push(record);
        }
    }
    if candidates.len() != fetched {
        debug!(
            data_source = L::DATA_SOURCE,
            fetched,
            matched = candidates.len(),
            "applied local filters"
        );
    }

    let record = exactly_one(L::DOMAIN, candidates)?;
    let id = L::id(&record);

    let mut state = L::state(&record);
    debug_assert!(
        state.is_object(),
        "{} state must be an object, got {}",
        L::DATA_SOURCE,
        state
    );
    if let Some(obj) = state.as_object_mut() {
        obj.insert("id".to_string(), Value::String(id.clone()));
    }

    info!(data_source = L::DATA_SOURCE, id = %id, "lookup resolved");
    Ok(Resolved { id, record, state })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Attribute;
    use crate::testing::MockClient;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct RuleLookup {
        vpc_id: Option<String>,
        name: Option<String>,
        local_name: Option<String>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Rule {
        id: String,
        vpc_id: Option<String>,
        name: Option<String>,
    }

    impl Lookup for RuleLookup {
        type Record = Rule;
        const DATA_SOURCE: &'static str = "test_rule";
        const DOMAIN: &'static str = "rule";

        fn schema() -> Schema {
            Schema::v0().with_attribute("name", Attribute::filter_string())
        }

        fn path(&self) -> CollectionPath {
            CollectionPath::new("/rules")
        }

        fn query(&self) -> LookupQuery {
            LookupQuery::new()
                .with_eq("vpc_id", self.vpc_id.as_deref())
                .with_eq("name", self.name.as_deref())
        }

        fn matches(&self, record: &Rule) -> bool {
            local_eq(self.local_name.as_deref(), record.name.as_deref())
        }

        fn id(record: &Rule) -> String {
            record.id.clone()
        }

        fn state(record: &Rule) -> Value {
            json!({"rule_id": record.id, "vpc_id": record.vpc_id, "name": record.name})
        }
    }

    #[derive(Debug, Default, Deserialize)]
    struct FlatLookup;

    impl Lookup for FlatLookup {
        type Record = Rule;
        const DATA_SOURCE: &'static str = "test_flat";
        const DOMAIN: &'static str = "rule";

        fn schema() -> Schema {
            Schema::v0()
        }

        fn path(&self) -> CollectionPath {
            CollectionPath::new("/rules")
        }

        fn query(&self) -> LookupQuery {
            LookupQuery::new()
        }

        fn id(record: &Rule) -> String {
            record.id.clone()
        }

        fn state(record: &Rule) -> Value {
            Value::String(record.id.clone())
        }
    }

    #[derive(Debug, Default, Deserialize)]
    struct ScopedLookup {
        parent_id: String,
    }

    impl Lookup for ScopedLookup {
        type Record = Rule;
        const DATA_SOURCE: &'static str = "test_scoped";
        const DOMAIN: &'static str = "rule";

        fn schema() -> Schema {
            Schema::v0().with_attribute("parent_id", Attribute::required_string())
        }

        fn path(&self) -> CollectionPath {
            CollectionPath::new("/parents")
                .with_id("parent_id", self.parent_id.as_str())
                .join("rules")
        }

        fn query(&self) -> LookupQuery {
            LookupQuery::new()
        }

        fn id(record: &Rule) -> String {
            record.id.clone()
        }

        fn state(record: &Rule) -> Value {
            json!({"rule_id": record.id})
        }
    }

    fn rules() -> Vec<Value> {
        vec![
            json!({"id": "r-1", "vpc_id": "vpc-1", "name": "rule-1"}),
            json!({"id": "r-2", "vpc_id": "vpc-1", "name": "rule-2"}),
            json!({"id": "r-3", "vpc_id": "vpc-2", "name": "Rule-1"}),
        ]
    }

    #[test]
    fn test_exactly_one() {
        assert_eq!(exactly_one("rule", vec![7]).unwrap(), 7);
        assert!(matches!(
            exactly_one::<i32>("rule", vec![]),
            Err(ProviderError::NotFound { domain: "rule" })
        ));
        assert!(matches!(
            exactly_one("rule", vec![1, 2, 3]),
            Err(ProviderError::Ambiguous {
                domain: "rule",
                count: 3
            })
        ));
    }

    #[test]
    fn test_local_eq() {
        assert!(local_eq::<str>(None, Some("anything")));
        assert!(local_eq::<str>(None, None));
        assert!(local_eq(Some("a"), Some("a")));
        assert!(!local_eq(Some("a"), Some("A")));
        assert!(!local_eq(Some("a"), None));
    }

    #[tokio::test]
    async fn test_single_match_populates_state() {
        let client = MockClient::new().with_records("/rules", rules());
        let lookup = RuleLookup {
            name: Some("rule-1".to_string()),
            ..Default::default()
        };

        let resolved = resolve(&client, &lookup).await.unwrap();
        assert_eq!(resolved.id, "r-1");
        assert_eq!(
            resolved.state,
            json!({"id": "r-1", "rule_id": "r-1", "vpc_id": "vpc-1", "name": "rule-1"})
        );
        assert_eq!(client.requests()[0].1.get("name"), Some("rule-1"));
    }

    #[tokio::test]
    async fn test_zero_matches_is_not_found() {
        let client = MockClient::new().with_records("/rules", rules());
        let lookup = RuleLookup {
            name: Some("rule-9".to_string()),
            ..Default::default()
        };

        let err = resolve(&client, &lookup).await.unwrap_err();
        assert_eq!(err.to_string(), "no rule found with provided arguments");
    }

    #[tokio::test]
    async fn test_multiple_matches_is_ambiguous() {
        let client = MockClient::new().with_records("/rules", rules());
        let lookup = RuleLookup {
            vpc_id: Some("vpc-1".to_string()),
            ..Default::default()
        };

        let err = resolve(&client, &lookup).await.unwrap_err();
        assert!(matches!(err, ProviderError::Ambiguous { count: 2, .. }));
        assert!(err.to_string().starts_with("more than 1 rule found"));
    }

    #[tokio::test]
    async fn test_empty_query_lists_all() {
        let client = MockClient::new().with_records("/rules", rules());
        let err = resolve(&client, &RuleLookup::default()).await.unwrap_err();

        assert!(matches!(err, ProviderError::Ambiguous { count: 3, .. }));
        assert!(client.requests()[0].1.is_empty());
    }

    #[tokio::test]
    async fn test_local_filter_classifies_like_remote() {
        let client = MockClient::new().with_records("/rules", rules());

        for (name, expected) in [("rule-1", Some("r-1")), ("rule-9", None), ("Rule-1", Some("r-3"))] {
            let remote = RuleLookup {
                name: Some(name.to_string()),
                ..Default::default()
            };
            let local = RuleLookup {
                local_name: Some(name.to_string()),
                ..Default::default()
            };

            let remote_id = resolve(&client, &remote).await.ok().map(|r| r.id);
            let local_id = resolve(&client, &local).await.ok().map(|r| r.id);
            assert_eq!(remote_id.as_deref(), expected);
            assert_eq!(local_id, remote_id);
        }
    }

    #[tokio::test]
    async fn test_local_filter_ambiguous() {
        let client = MockClient::new().with_records(
            "/rules",
            vec![
                json!({"id": "r-1", "name": "dup"}),
                json!({"id": "r-2", "name": "dup"}),
                json!({"id": "r-3", "name": "other"}),
            ],
        );
        let lookup = RuleLookup {
            local_name: Some("dup".to_string()),
            ..Default::default()
        };

        let err = resolve(&client, &lookup).await.unwrap_err();
        assert!(matches!(err, ProviderError::Ambiguous { count: 2, .. }));
    }

    #[tokio::test]
    async fn test_remote_failure_is_wrapped() {
        let client = MockClient::new().with_error("/rules", 500, "boom");
        let err = resolve(&client, &RuleLookup::default()).await.unwrap_err();

        assert!(matches!(err, ProviderError::Api { domain: "rule", .. }));
        assert!(err.to_string().contains("error retrieving rule list"));
        assert!(!err.is_cardinality());
    }

    #[tokio::test]
    async fn test_malformed_record_is_reported() {
        let client = MockClient::new().with_records("/rules", vec![json!({"name": "no id"})]);
        let err = resolve(&client, &RuleLookup::default()).await.unwrap_err();

        assert!(matches!(
            err,
            ProviderError::Api {
                source: ClientError::InvalidResponse(_),
                ..
            }
        ));
    }

    #[cfg(debug_assertions)]
    #[tokio::test]
    #[should_panic(expected = "test_flat state must be an object")]
    async fn test_non_object_state_is_a_bug() {
        let client = MockClient::new().with_records("/rules", vec![json!({"id": "r-1"})]);
        let _ = resolve(&client, &FlatLookup).await;
    }

    #[tokio::test]
    async fn test_unusable_scope_id_sends_nothing() {
        let client = MockClient::new().with_records("/parents/p-1/rules", rules());

        for bad in ["", ".."] {
            let lookup = ScopedLookup {
                parent_id: bad.to_string(),
            };
            let err = resolve(&client, &lookup).await.unwrap_err();
            assert!(matches!(err, ProviderError::Validation(_)));
            assert!(err.to_string().contains("parent_id"));
        }
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_scope_id_with_separator_stays_in_collection() {
        let client = MockClient::new()
            .with_records("/parents/p-1/rules", rules())
            .with_records("/rules", rules());
        let lookup = ScopedLookup {
            parent_id: "../../rules?x".to_string(),
        };

        let err = resolve(&client, &lookup).await.unwrap_err();
        assert!(matches!(err, ProviderError::Api { .. }));
        let (path, _) = client.last_request().unwrap();
        assert_eq!(path, "/parents/..%2F..%2Frules%3Fx/rules");
    }
}
