//! `ecloud_loadbalancer_network`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_loadbalancer_network`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoadBalancerNetworkLookup {
    pub loadbalancer_network_id: Option<String>,
    pub load_balancer_id: Option<String>,
    pub network_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadBalancerNetwork {
    pub id: String,
    pub load_balancer_id: Option<String>,
    pub network_id: Option<String>,
    pub name: Option<String>,
}

impl Lookup for LoadBalancerNetworkLookup {
    type Record = LoadBalancerNetwork;
    const DATA_SOURCE: &'static str = "ecloud_loadbalancer_network";
    const DOMAIN: &'static str = "load balancer network";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("loadbalancer_network_id", Attribute::filter_string())
            .with_attribute("load_balancer_id", Attribute::filter_string())
            .with_attribute("network_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/load-balancer-networks")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.loadbalancer_network_id.as_deref())
            .with_eq("load_balancer_id", self.load_balancer_id.as_deref())
            .with_eq("network_id", self.network_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &LoadBalancerNetwork) -> String {
        record.id.clone()
    }

    fn state(record: &LoadBalancerNetwork) -> Value {
        json!({
            "loadbalancer_network_id": record.id,
            "load_balancer_id": record.load_balancer_id,
            "network_id": record.network_id,
            "name": record.name,
        })
    }
}
