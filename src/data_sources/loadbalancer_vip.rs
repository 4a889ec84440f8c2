//! `ecloud_loadbalancer_vip`: virtual IPs attached to a load balancer.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_loadbalancer_vip`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoadBalancerVipLookup {
    pub loadbalancer_vip_id: Option<String>,
    pub load_balancer_id: Option<String>,
    pub ip_address_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadBalancerVip {
    pub id: String,
    pub load_balancer_id: Option<String>,
    pub ip_address_id: Option<String>,
    pub name: Option<String>,
    pub config_id: Option<i64>,
}

impl Lookup for LoadBalancerVipLookup {
    type Record = LoadBalancerVip;
    const DATA_SOURCE: &'static str = "ecloud_loadbalancer_vip";
    const DOMAIN: &'static str = "load balancer VIP";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("loadbalancer_vip_id", Attribute::filter_string())
            .with_attribute("load_balancer_id", Attribute::filter_string())
            .with_attribute("ip_address_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute(
                "config_id",
                Attribute::computed_int64().with_description("Load balancer configuration ID"),
            )
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/vips")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.loadbalancer_vip_id.as_deref())
            .with_eq("load_balancer_id", self.load_balancer_id.as_deref())
            .with_eq("ip_address_id", self.ip_address_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &LoadBalancerVip) -> String {
        record.id.clone()
    }

    fn state(record: &LoadBalancerVip) -> Value {
        json!({
            "loadbalancer_vip_id": record.id,
            "load_balancer_id": record.load_balancer_id,
            "ip_address_id": record.ip_address_id,
            "name": record.name,
            "config_id": record.config_id,
        })
    }
}
