//! `ecloud_nat_overload_rule`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_nat_overload_rule`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NatOverloadRuleLookup {
    pub nat_overload_rule_id: Option<String>,
    pub network_id: Option<String>,
    pub subnet_id: Option<String>,
    pub floating_ip_id: Option<String>,
    /// `allow` or `deny`.
    pub action: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NatOverloadRule {
    pub id: String,
    pub network_id: Option<String>,
    pub subnet_id: Option<String>,
    pub floating_ip_id: Option<String>,
    pub action: Option<String>,
    pub name: Option<String>,
}

impl Lookup for NatOverloadRuleLookup {
    type Record = NatOverloadRule;
    const DATA_SOURCE: &'static str = "ecloud_nat_overload_rule";
    const DOMAIN: &'static str = "NAT overload rule";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("nat_overload_rule_id", Attribute::filter_string())
            .with_attribute("network_id", Attribute::filter_string())
            .with_attribute("subnet_id", Attribute::filter_string())
            .with_attribute("floating_ip_id", Attribute::filter_string())
            .with_attribute("action", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/nat-overload-rules")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.nat_overload_rule_id.as_deref())
            .with_eq("network_id", self.network_id.as_deref())
            .with_eq("subnet_id", self.subnet_id.as_deref())
            .with_eq("floating_ip_id", self.floating_ip_id.as_deref())
            .with_eq("action", self.action.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &NatOverloadRule) -> String {
        record.id.clone()
    }

    fn state(record: &NatOverloadRule) -> Value {
        json!({
            "nat_overload_rule_id": record.id,
            "network_id": record.network_id,
            "subnet_id": record.subnet_id,
            "floating_ip_id": record.floating_ip_id,
            "action": record.action,
            "name": record.name,
        })
    }
}
