//! `ecloud_vpn_gateway_user`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_vpn_gateway_user`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VpnGatewayUserLookup {
    pub vpn_gateway_user_id: Option<String>,
    pub vpn_gateway_id: Option<String>,
    pub name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VpnGatewayUser {
    pub id: String,
    pub vpn_gateway_id: Option<String>,
    pub name: Option<String>,
    pub username: Option<String>,
}

impl Lookup for VpnGatewayUserLookup {
    type Record = VpnGatewayUser;
    const DATA_SOURCE: &'static str = "ecloud_vpn_gateway_user";
    const DOMAIN: &'static str = "VPN gateway user";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("vpn_gateway_user_id", Attribute::filter_string())
            .with_attribute("vpn_gateway_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute("username", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/vpn-gateway-users")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.vpn_gateway_user_id.as_deref())
            .with_eq("vpn_gateway_id", self.vpn_gateway_id.as_deref())
            .with_eq("name", self.name.as_deref())
            .with_eq("username", self.username.as_deref())
    }

    fn id(record: &VpnGatewayUser) -> String {
        record.id.clone()
    }

    fn state(record: &VpnGatewayUser) -> Value {
        json!({
            "vpn_gateway_user_id": record.id,
            "vpn_gateway_id": record.vpn_gateway_id,
            "name": record.name,
            "username": record.username,
        })
    }
}
