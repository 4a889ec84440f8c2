//! `ecloud_affinity_rule_member`
//!
//! Members are listed per rule, so `affinity_rule_id` is required and goes
//! into the request path rather than the filter set.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_affinity_rule_member`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AffinityRuleMemberLookup {
    pub affinity_rule_id: String,
    pub affinity_rule_member_id: Option<String>,
    pub instance_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AffinityRuleMember {
    pub id: String,
    pub instance_id: Option<String>,
    pub affinity_rule_id: Option<String>,
}

impl Lookup for AffinityRuleMemberLookup {
    type Record = AffinityRuleMember;
    const DATA_SOURCE: &'static str = "ecloud_affinity_rule_member";
    const DOMAIN: &'static str = "affinity rule member";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("affinity_rule_id", Attribute::required_string())
            .with_attribute("affinity_rule_member_id", Attribute::filter_string())
            .with_attribute("instance_id", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/affinity-rules")
            .with_id("affinity_rule_id", self.affinity_rule_id.as_str())
            .join("members")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.affinity_rule_member_id.as_deref())
            .with_eq("instance_id", self.instance_id.as_deref())
    }

    fn id(record: &AffinityRuleMember) -> String {
        record.id.clone()
    }

    fn state(record: &AffinityRuleMember) -> Value {
        json!({
            "affinity_rule_member_id": record.id,
            "affinity_rule_id": record.affinity_rule_id,
            "instance_id": record.instance_id,
        })
    }
}
