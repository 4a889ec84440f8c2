//! `ecloud_vpn_gateway`: client VPN gateways attached to a router.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_vpn_gateway`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VpnGatewayLookup {
    pub vpn_gateway_id: Option<String>,
    pub router_id: Option<String>,
    pub specification_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VpnGateway {
    pub id: String,
    pub router_id: Option<String>,
    pub specification_id: Option<String>,
    pub name: Option<String>,
    pub fqdn: Option<String>,
}

impl Lookup for VpnGatewayLookup {
    type Record = VpnGateway;
    const DATA_SOURCE: &'static str = "ecloud_vpn_gateway";
    const DOMAIN: &'static str = "VPN gateway";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("vpn_gateway_id", Attribute::filter_string())
            .with_attribute("router_id", Attribute::filter_string())
            .with_attribute("specification_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute(
                "fqdn",
                Attribute::computed_string().with_description("Hostname clients connect to"),
            )
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/vpn-gateways")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.vpn_gateway_id.as_deref())
            .with_eq("router_id", self.router_id.as_deref())
            .with_eq("specification_id", self.specification_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &VpnGateway) -> String {
        record.id.clone()
    }

    fn state(record: &VpnGateway) -> Value {
        json!({
            "vpn_gateway_id": record.id,
            "router_id": record.router_id,
            "specification_id": record.specification_id,
            "name": record.name,
            "fqdn": record.fqdn,
        })
    }
}
