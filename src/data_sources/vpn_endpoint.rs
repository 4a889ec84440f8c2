//! `ecloud_vpn_endpoint`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_vpn_endpoint`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VpnEndpointLookup {
    pub vpn_endpoint_id: Option<String>,
    pub vpn_service_id: Option<String>,
    pub floating_ip_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VpnEndpoint {
    pub id: String,
    pub vpn_service_id: Option<String>,
    pub floating_ip_id: Option<String>,
    pub name: Option<String>,
}

impl Lookup for VpnEndpointLookup {
    type Record = VpnEndpoint;
    const DATA_SOURCE: &'static str = "ecloud_vpn_endpoint";
    const DOMAIN: &'static str = "VPN endpoint";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("vpn_endpoint_id", Attribute::filter_string())
            .with_attribute("vpn_service_id", Attribute::filter_string())
            .with_attribute("floating_ip_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/vpn-endpoints")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.vpn_endpoint_id.as_deref())
            .with_eq("vpn_service_id", self.vpn_service_id.as_deref())
            .with_eq("floating_ip_id", self.floating_ip_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &VpnEndpoint) -> String {
        record.id.clone()
    }

    fn state(record: &VpnEndpoint) -> Value {
        json!({
            "vpn_endpoint_id": record.id,
            "vpn_service_id": record.vpn_service_id,
            "floating_ip_id": record.floating_ip_id,
            "name": record.name,
        })
    }
}
