//! `ecloud_vpn_service`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_vpn_service`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VpnServiceLookup {
    pub vpn_service_id: Option<String>,
    pub router_id: Option<String>,
    pub vpc_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VpnService {
    pub id: String,
    pub router_id: Option<String>,
    pub vpc_id: Option<String>,
    pub name: Option<String>,
}

impl Lookup for VpnServiceLookup {
    type Record = VpnService;
    const DATA_SOURCE: &'static str = "ecloud_vpn_service";
    const DOMAIN: &'static str = "VPN service";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("vpn_service_id", Attribute::filter_string())
            .with_attribute("router_id", Attribute::filter_string())
            .with_attribute("vpc_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/vpn-services")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.vpn_service_id.as_deref())
            .with_eq("router_id", self.router_id.as_deref())
            .with_eq("vpc_id", self.vpc_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &VpnService) -> String {
        record.id.clone()
    }

    fn state(record: &VpnService) -> Value {
        json!({
            "vpn_service_id": record.id,
            "router_id": record.router_id,
            "vpc_id": record.vpc_id,
            "name": record.name,
        })
    }
}
