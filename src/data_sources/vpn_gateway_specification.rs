//! `ecloud_vpn_gateway_specification`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_vpn_gateway_specification`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VpnGatewaySpecificationLookup {
    pub vpn_gateway_specification_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VpnGatewaySpecification {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Lookup for VpnGatewaySpecificationLookup {
    type Record = VpnGatewaySpecification;
    const DATA_SOURCE: &'static str = "ecloud_vpn_gateway_specification";
    const DOMAIN: &'static str = "VPN gateway specification";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("vpn_gateway_specification_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute("description", Attribute::computed_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/vpn-gateway-specifications")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.vpn_gateway_specification_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &VpnGatewaySpecification) -> String {
        record.id.clone()
    }

    fn state(record: &VpnGatewaySpecification) -> Value {
        json!({
            "vpn_gateway_specification_id": record.id,
            "name": record.name,
            "description": record.description,
        })
    }
}
