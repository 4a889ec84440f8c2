//! `ecloud_ip_address`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_ip_address`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpAddressLookup {
    pub ip_address_id: Option<String>,
    pub network_id: Option<String>,
    pub name: Option<String>,
    pub ip_address: Option<String>,
    /// `cluster` or `normal`.
    #[serde(rename = "type")]
    pub address_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IpAddress {
    pub id: String,
    pub network_id: Option<String>,
    pub name: Option<String>,
    pub ip_address: Option<String>,
    #[serde(rename = "type")]
    pub address_type: Option<String>,
}

impl Lookup for IpAddressLookup {
    type Record = IpAddress;
    const DATA_SOURCE: &'static str = "ecloud_ip_address";
    const DOMAIN: &'static str = "IP address";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("ip_address_id", Attribute::filter_string())
            .with_attribute("network_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute("ip_address", Attribute::filter_string())
            .with_attribute("type", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/ip-addresses")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.ip_address_id.as_deref())
            .with_eq("network_id", self.network_id.as_deref())
            .with_eq("name", self.name.as_deref())
            .with_eq("ip_address", self.ip_address.as_deref())
            .with_eq("type", self.address_type.as_deref())
    }

    fn id(record: &IpAddress) -> String {
        record.id.clone()
    }

    fn state(record: &IpAddress) -> Value {
        json!({
            "ip_address_id": record.id,
            "network_id": record.network_id,
            "name": record.name,
            "ip_address": record.ip_address,
            "type": record.address_type,
        })
    }
}
