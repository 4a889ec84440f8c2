//! `ecloud_loadbalancer_spec`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_loadbalancer_spec`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoadBalancerSpecLookup {
    pub loadbalancer_spec_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadBalancerSpec {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Lookup for LoadBalancerSpecLookup {
    type Record = LoadBalancerSpec;
    const DATA_SOURCE: &'static str = "ecloud_loadbalancer_spec";
    const DOMAIN: &'static str = "load balancer specification";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("loadbalancer_spec_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute("description", Attribute::computed_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/load-balancer-specs")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.loadbalancer_spec_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &LoadBalancerSpec) -> String {
        record.id.clone()
    }

    fn state(record: &LoadBalancerSpec) -> Value {
        json!({
            "loadbalancer_spec_id": record.id,
            "name": record.name,
            "description": record.description,
        })
    }
}
