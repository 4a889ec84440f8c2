//! `ecloud_vpn_profile_group`: IKE/IPsec profile groups for VPN endpoints.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_vpn_profile_group`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VpnProfileGroupLookup {
    pub vpn_profile_group_id: Option<String>,
    pub availability_zone_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VpnProfileGroup {
    pub id: String,
    pub availability_zone_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Lookup for VpnProfileGroupLookup {
    type Record = VpnProfileGroup;
    const DATA_SOURCE: &'static str = "ecloud_vpn_profile_group";
    const DOMAIN: &'static str = "VPN profile group";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("vpn_profile_group_id", Attribute::filter_string())
            .with_attribute("availability_zone_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute("description", Attribute::computed_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/vpn-profile-groups")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.vpn_profile_group_id.as_deref())
            .with_eq("availability_zone_id", self.availability_zone_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &VpnProfileGroup) -> String {
        record.id.clone()
    }

    fn state(record: &VpnProfileGroup) -> Value {
        json!({
            "vpn_profile_group_id": record.id,
            "availability_zone_id": record.availability_zone_id,
            "name": record.name,
            "description": record.description,
        })
    }
}
