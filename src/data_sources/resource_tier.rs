//! `ecloud_resource_tier`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_resource_tier`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceTierLookup {
    pub resource_tier_id: Option<String>,
    pub availability_zone_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceTier {
    pub id: String,
    pub availability_zone_id: Option<String>,
    pub name: Option<String>,
}

impl Lookup for ResourceTierLookup {
    type Record = ResourceTier;
    const DATA_SOURCE: &'static str = "ecloud_resource_tier";
    const DOMAIN: &'static str = "resource tier";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("resource_tier_id", Attribute::filter_string())
            .with_attribute("availability_zone_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/resource-tiers")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.resource_tier_id.as_deref())
            .with_eq("availability_zone_id", self.availability_zone_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &ResourceTier) -> String {
        record.id.clone()
    }

    fn state(record: &ResourceTier) -> Value {
        json!({
            "resource_tier_id": record.id,
            "availability_zone_id": record.availability_zone_id,
            "name": record.name,
        })
    }
}
